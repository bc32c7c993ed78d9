use chrono::NaiveDate;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::{QueryResult, TakingsQuery};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq, Default)]
pub struct QueryState {
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<QueryResult>,
}

pub struct UseTakingsQueryResult {
    pub state: QueryState,
    pub submit: Callback<(String, Option<NaiveDate>)>,
}

/// Hook for looking up stored takings by store choice and date.
///
/// Each submit clears the previous result and error first. Nothing guards
/// against overlapping submits; whichever response settles last is shown.
#[hook]
pub fn use_takings_query(api_client: &ApiClient) -> UseTakingsQueryResult {
    let loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let result = use_state(|| Option::<QueryResult>::None);

    let submit = {
        let api_client = api_client.clone();
        let loading = loading.clone();
        let error = error.clone();
        let result = result.clone();

        Callback::from(move |(store_choice, date): (String, Option<NaiveDate>)| {
            error.set(None);
            result.set(None);

            let query = match TakingsQuery::new(&store_choice, date) {
                Ok(query) => query,
                Err(e) => {
                    Logger::failure_with_component("view", &e);
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            let api_client = api_client.clone();
            let loading = loading.clone();
            let error = error.clone();
            let result = result.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.query_takings(&query).await {
                    Ok(found) => result.set(Some(found)),
                    Err(e) => {
                        Logger::info_with_component(
                            "view",
                            &format!("Lookup for {} on {} failed", query.store.as_str(), query.date),
                        );
                        Logger::failure_with_component("view", &e);
                        error.set(Some(e.to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    UseTakingsQueryResult {
        state: QueryState {
            loading: *loading,
            error: (*error).clone(),
            result: (*result).clone(),
        },
        submit,
    }
}
