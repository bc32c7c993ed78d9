use yew::prelude::*;
use shared::{DailyTakingRecord, InMemoryTakingsStorage, TakingsStorage};

mod components;
mod hooks;
mod services;

use components::entry_page::EntryPage;
use components::header::{Header, Screen};
use components::home::Home;
use components::view_page::ViewPage;
use services::api::ApiClient;
use services::date_utils;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::from_build_env());
    // Lives as long as the page; applied entries survive screen changes
    let storage = use_memo((), |_| InMemoryTakingsStorage::shared());
    let today = *use_memo((), |_| date_utils::today());
    let history = use_state(|| vec![Screen::Home]);
    let entry_in_progress = use_state(|| Option::<DailyTakingRecord>::None);

    let current = history.last().copied().unwrap_or(Screen::Home);

    let on_navigate = {
        let history = history.clone();
        Callback::from(move |screen: Screen| {
            if history.last() == Some(&screen) {
                return;
            }
            let mut next = (*history).clone();
            next.push(screen);
            history.set(next);
        })
    };

    let on_back = {
        let history = history.clone();
        Callback::from(move |_| {
            if history.len() > 1 {
                let mut next = (*history).clone();
                next.pop();
                history.set(next);
            }
        })
    };

    let on_entry_change = {
        let entry_in_progress = entry_in_progress.clone();
        Callback::from(move |record: DailyTakingRecord| {
            entry_in_progress.set(Some(record));
        })
    };

    let screen = match current {
        Screen::Home => html! {
            <Home
                on_navigate={on_navigate.clone()}
                applied_count={(*storage).entry_count()}
                applied_today={(*storage).list_entries_for_date(today)}
                entry_in_progress={(*entry_in_progress).clone()}
            />
        },
        Screen::Entry => html! {
            <EntryPage
                api_client={(*api_client).clone()}
                storage={(*storage).clone()}
                on_change={on_entry_change}
            />
        },
        Screen::View => html! {
            <ViewPage api_client={(*api_client).clone()} />
        },
    };

    html! {
        <>
            <Header
                current={current}
                can_go_back={history.len() > 1}
                on_navigate={on_navigate}
                on_back={on_back}
            />
            <main class="main">
                <div class="container">
                    {screen}
                </div>
            </main>
        </>
    }
}

fn main() {
    Logger::info_with_component("app", &format!("Daily takings client using {}", ApiClient::from_build_env().base_url()));
    yew::Renderer::<App>::new().render();
}
