use yew::prelude::*;
use chrono::NaiveDate;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use shared::format::{date_input_value, format_total, parse_date_input};
use shared::{DailyTakingRecord, InputDrafts, StoreOption, TakingsField};
use crate::components::store_select::StoreSelect;

#[derive(Properties, PartialEq)]
pub struct TakingsFormProps {
    // Form state
    pub record: DailyTakingRecord,
    pub drafts: InputDrafts,
    pub store_options: Vec<StoreOption>,
    pub applied: bool,

    // Event handlers
    pub on_field: Callback<(TakingsField, String)>,
    pub on_store: Callback<String>,
    pub on_date: Callback<Option<NaiveDate>>,
    pub on_apply: Callback<()>,
}

/// Number input for one field. Shows the text as typed while it still
/// matches the record, so partial input like `12.` is not rewritten.
fn amount_input(field: TakingsField, props: &TakingsFormProps) -> Html {
    let on_field = &props.on_field;
    let oninput = {
        let on_field = on_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field.emit((field, input.value()));
        })
    };
    let id = field.wire_name();
    let step = if field == TakingsField::TotalCustomers { "1" } else { "0.01" };

    html! {
        <div class="form-group">
            <label for={id}>{field.label()}</label>
            <input
                type="number"
                id={id}
                step={step}
                value={props.drafts.input_text(field, &props.record.figures)}
                {oninput}
            />
        </div>
    }
}

#[function_component(TakingsForm)]
pub fn takings_form(props: &TakingsFormProps) -> Html {
    let record = &props.record;
    let overs_unders = record.overs_unders();

    let on_date_input = {
        let on_date = props.on_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_date.emit(parse_date_input(&input.value()));
        })
    };

    let on_notes_input = {
        let on_field = props.on_field.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_field.emit((TakingsField::PettyCashNotes, textarea.value()));
        })
    };

    html! {
        <section class="entry-section">
            <h2>{"Daily Takings Entry"}</h2>

            {if props.applied {
                html! {
                    <div class="form-message success">
                        {"Daily takings submitted!"}
                    </div>
                }
            } else { html! {} }}

            <form class="takings-form" onsubmit={
                let on_apply = props.on_apply.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_apply.emit(());
                })
            }>
                <div class="form-row">
                    <div class="form-group">
                        <label for="entry-date">{"Select Date"}</label>
                        <input
                            type="date"
                            id="entry-date"
                            value={date_input_value(record.date)}
                            onchange={on_date_input}
                        />
                    </div>
                    <StoreSelect
                        id="entry-store"
                        options={props.store_options.clone()}
                        selected={record.store.clone()}
                        on_change={props.on_store.clone()}
                    />
                </div>

                <div class="form-row">
                    {amount_input(TakingsField::CashCoin, props)}
                    <span class="operator">{"+"}</span>
                    {amount_input(TakingsField::Cheques, props)}
                    <span class="operator">{"+"}</span>
                    {amount_input(TakingsField::EftPos, props)}
                    <span class="operator">{"="}</span>
                    <div class="form-group">
                        <label>{"Total Banking"}</label>
                        <output class="derived-total">{format_total(record.total_banking())}</output>
                    </div>
                </div>

                <div class="form-row">
                    {amount_input(TakingsField::PettyCash, props)}
                    {amount_input(TakingsField::NonCacVouchers, props)}
                    {amount_input(TakingsField::POrders, props)}
                </div>

                <div class="form-row">
                    {amount_input(TakingsField::StaffVouchers, props)}
                    {amount_input(TakingsField::FloatAdjust, props)}
                    {amount_input(TakingsField::TotalTakings, props)}
                    {amount_input(TakingsField::RegRead, props)}
                </div>

                <div class="form-row">
                    <div class="form-group wide">
                        <label>{"Overs / Unders"}</label>
                        <output class={classes!("overs-unders", if overs_unders == 0.0 { "balanced" } else { "unbalanced" })}>
                            {format_total(overs_unders)}
                        </output>
                    </div>
                </div>

                <div class="form-row">
                    {amount_input(TakingsField::TotalCustomers, props)}
                    {amount_input(TakingsField::Refunds, props)}
                    {amount_input(TakingsField::Voids, props)}
                </div>

                <div class="form-row">
                    {amount_input(TakingsField::DailyTakings, props)}
                </div>

                <div class="form-row">
                    <button type="submit" class="btn btn-primary">{"APPLY"}</button>
                </div>

                <div class="form-group wide">
                    <label for="petty-cash-notes">{TakingsField::PettyCashNotes.label()}</label>
                    <textarea
                        id="petty-cash-notes"
                        rows="4"
                        placeholder="E.g. $10 for glasses, $15 delivery fee, $5 stamps"
                        value={record.figures.petty_cash_notes.clone()}
                        oninput={on_notes_input}
                    />
                </div>
            </form>
        </section>
    }
}
