use yew::prelude::*;
use shared::format::format_currency;
use shared::DailyTakingRecord;
use super::display_entry::DisplayEntry;
use super::header::Screen;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Screen>,
    /// Entries applied since the page was loaded
    pub applied_count: usize,
    /// Entries applied for today's date, ordered by store
    #[prop_or_default]
    pub applied_today: Vec<DailyTakingRecord>,
    /// Last record echoed by the entry screen, if it was opened
    #[prop_or_default]
    pub entry_in_progress: Option<DailyTakingRecord>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let go = |screen: Screen| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(screen))
    };

    html! {
        <section class="home">
            <h1>{"Welcome to Daily Takings System"}</h1>
            <p>{"Please select an option to continue"}</p>

            <div class="home-actions">
                <button class="btn btn-primary" onclick={go(Screen::Entry)}>
                    {"Enter Daily Takings"}
                </button>
                <button class="btn btn-secondary" onclick={go(Screen::View)}>
                    {"View Daily Takings"}
                </button>
            </div>

            {if props.applied_count > 0 {
                html! {
                    <p class="session-summary">
                        {format!("{} entr{} applied this session", props.applied_count,
                            if props.applied_count == 1 { "y" } else { "ies" })}
                    </p>
                }
            } else { html! {} }}

            {if props.applied_today.is_empty() {
                html! {}
            } else {
                html! {
                    <table class="entry-table applied-today">
                        <thead>
                            <tr>
                                <th>{"Applied today"}</th>
                                <th>{"Daily Takings"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for props.applied_today.iter().map(|record| html! {
                                <tr key={record.store.clone()}>
                                    <td>{record.store.clone()}</td>
                                    <td>{format_currency(record.figures.daily_takings)}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            }}

            {if let Some(record) = props.entry_in_progress.as_ref() {
                html! {
                    <DisplayEntry record={record.clone()} title="Entry in progress" />
                }
            } else { html! {} }}
        </section>
    }
}
