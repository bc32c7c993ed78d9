use yew::prelude::*;
use shared::format::{format_currency, format_display_date, format_timestamp};
use shared::{DailyTakingRecord, TakingsField};

#[derive(Properties, PartialEq)]
pub struct DisplayEntryProps {
    pub record: DailyTakingRecord,
    #[prop_or(AttrValue::from("Daily Taking Entry"))]
    pub title: AttrValue,
    /// Also list every entry figure, not just the stored summary
    #[prop_or_default]
    pub detailed: bool,
}

fn row(field: &str, value: String) -> Html {
    html! {
        <tr>
            <td>{field.to_string()}</td>
            <td>{value}</td>
        </tr>
    }
}

/// Field/value table for one record
#[function_component(DisplayEntry)]
pub fn display_entry(props: &DisplayEntryProps) -> Html {
    let record = &props.record;
    let figures = &record.figures;

    let detail_rows = if props.detailed {
        html! {
            <>
                {row(TakingsField::CashCoin.label(), format_currency(figures.cash_coin))}
                {row(TakingsField::Cheques.label(), format_currency(figures.cheques))}
                {row(TakingsField::EftPos.label(), format_currency(figures.eft_pos))}
                {row("Total Banking", format_currency(record.total_banking()))}
                {row(TakingsField::PettyCash.label(), format_currency(figures.petty_cash))}
                {row(TakingsField::NonCacVouchers.label(), format_currency(figures.non_cac_vouchers))}
                {row(TakingsField::POrders.label(), format_currency(figures.p_orders))}
                {row(TakingsField::StaffVouchers.label(), format_currency(figures.staff_vouchers))}
                {row(TakingsField::FloatAdjust.label(), format_currency(figures.float_adjust))}
                {row(TakingsField::TotalTakings.label(), format_currency(figures.total_takings))}
                {row(TakingsField::RegRead.label(), format_currency(figures.reg_read))}
                {row("Overs / Unders", format_currency(record.overs_unders()))}
                {row(TakingsField::TotalCustomers.label(), figures.total_customers.to_string())}
                {row(TakingsField::Refunds.label(), format_currency(figures.refunds))}
                {row(TakingsField::Voids.label(), format_currency(figures.voids))}
                {if figures.petty_cash_notes.is_empty() {
                    html! {}
                } else {
                    row(TakingsField::PettyCashNotes.label(), figures.petty_cash_notes.clone())
                }}
            </>
        }
    } else {
        html! {}
    };

    html! {
        <section class="display-entry">
            <h3>{props.title.clone()}</h3>
            <table class="entry-table">
                <thead>
                    <tr>
                        <th>{"Field"}</th>
                        <th>{"Value"}</th>
                    </tr>
                </thead>
                <tbody>
                    {row("Store", record.store.clone())}
                    {row("Date", record.date.map(format_display_date).unwrap_or_default())}
                    {row("Daily Takings", format_currency(figures.daily_takings))}
                    {detail_rows}
                    {if let Some(created) = record.created_at.as_deref() {
                        row("Created", format_timestamp(created))
                    } else { html! {} }}
                    {if let Some(updated) = record.updated_at.as_deref() {
                        row("Last Updated", format_timestamp(updated))
                    } else { html! {} }}
                </tbody>
            </table>
        </section>
    }
}
