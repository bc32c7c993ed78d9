use yew::prelude::*;
use chrono::NaiveDate;
use web_sys::HtmlInputElement;
use shared::format::{date_input_value, format_currency, format_display_date, parse_date_input};
use shared::{DailyTakingRecord, QueryResult};
use super::display_entry::DisplayEntry;
use super::store_select::StoreSelect;
use crate::hooks::use_store_directory::use_store_directory;
use crate::hooks::use_takings_query::use_takings_query;
use crate::services::api::ApiClient;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct ViewPageProps {
    pub api_client: ApiClient,
}

fn all_stores_table(records: &[DailyTakingRecord], date: Option<NaiveDate>) -> Html {
    let heading = match date {
        Some(date) => format!("Daily Takings for All Stores on {}", format_display_date(date)),
        None => "Daily Takings for All Stores".to_string(),
    };

    html! {
        <section class="display-entry">
            <h3>{heading}</h3>
            {if records.is_empty() {
                html! { <p class="empty">{"No takings recorded for this date."}</p> }
            } else {
                html! {
                    <table class="entry-table">
                        <thead>
                            <tr>
                                <th>{"Store"}</th>
                                <th>{"Daily Takings"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for records.iter().map(|record| html! {
                                <tr key={record.store.clone()}>
                                    <td>{record.store.clone()}</td>
                                    <td>{format_currency(record.figures.daily_takings)}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            }}
        </section>
    }
}

#[function_component(ViewPage)]
pub fn view_page(props: &ViewPageProps) -> Html {
    let selected_date = use_state(|| Some(date_utils::today()));
    let selected_store = use_state(String::new);
    let directory = use_store_directory(&props.api_client);
    let query = use_takings_query(&props.api_client);

    let on_date_change = {
        let selected_date = selected_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            selected_date.set(parse_date_input(&input.value()));
        })
    };

    let on_store_change = {
        let selected_store = selected_store.clone();
        Callback::from(move |store: String| selected_store.set(store))
    };

    let on_submit = {
        let submit = query.submit.clone();
        let selected_date = selected_date.clone();
        let selected_store = selected_store.clone();
        Callback::from(move |_: MouseEvent| {
            submit.emit(((*selected_store).clone(), *selected_date));
        })
    };

    let result_view = match query.state.result.as_ref() {
        Some(QueryResult::AllStores(records)) => all_stores_table(records, *selected_date),
        Some(QueryResult::Single(record)) => {
            let title = match record.date {
                Some(date) => format!("Daily Takings for {} on {}", record.store, format_display_date(date)),
                None => format!("Daily Takings for {}", record.store),
            };
            html! { <DisplayEntry record={(**record).clone()} {title} /> }
        }
        None => html! {},
    };

    html! {
        <section class="view-page">
            <h2>{"View Daily Takings"}</h2>

            <div class="form-row">
                <div class="form-group">
                    <label for="view-date">{"Select Date"}</label>
                    <input
                        type="date"
                        id="view-date"
                        value={date_input_value(*selected_date)}
                        onchange={on_date_change}
                    />
                </div>
                <StoreSelect
                    id="view-store"
                    options={directory.options().to_vec()}
                    selected={(*selected_store).clone()}
                    on_change={on_store_change}
                    include_all=true
                />
                <button
                    class="btn btn-primary"
                    onclick={on_submit}
                    disabled={query.state.loading}
                >
                    {if query.state.loading { "Loading..." } else { "Submit" }}
                </button>
            </div>

            {if let Some(error) = query.state.error.as_ref() {
                html! { <div class="form-message error">{error.clone()}</div> }
            } else { html! {} }}

            {result_view}
        </section>
    }
}
