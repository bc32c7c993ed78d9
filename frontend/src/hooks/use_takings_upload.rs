use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo::timers::future::TimeoutFuture;
use shared::{TakingsError, UploadResponse};
use web_sys::File;
use crate::hooks::use_entry_form::NOTICE_DURATION_MS;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq, Default, Debug)]
pub struct UploadState {
    pub loading: bool,
    pub error: Option<String>,
    pub submitted: bool,
}

pub struct UseTakingsUploadResult {
    pub state: UploadState,
    pub upload: Callback<File>,
}

/// Panel state once an upload settles, plus the response to pass on to the
/// entry form. A successful upload with no records still shows the
/// submitted notice; there is just nothing to load.
fn settle(outcome: Result<UploadResponse, TakingsError>) -> (UploadState, Option<UploadResponse>) {
    match outcome {
        Ok(response) => {
            let state = UploadState {
                loading: false,
                error: None,
                submitted: true,
            };
            let to_load = (!response.daily_takings_data.is_empty()).then_some(response);
            (state, to_load)
        }
        Err(e) => {
            let state = UploadState {
                loading: false,
                error: Some(e.to_string()),
                submitted: false,
            };
            (state, None)
        }
    }
}

/// Hook for sending a spreadsheet to the backend.
///
/// Parsed records go to `on_loaded`.
#[hook]
pub fn use_takings_upload(
    api_client: &ApiClient,
    on_loaded: Callback<UploadResponse>,
) -> UseTakingsUploadResult {
    let loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let submitted = use_state(|| false);

    let upload = {
        let api_client = api_client.clone();
        let loading = loading.clone();
        let error = error.clone();
        let submitted = submitted.clone();

        Callback::from(move |file: File| {
            let api_client = api_client.clone();
            let loading = loading.clone();
            let error = error.clone();
            let submitted = submitted.clone();
            let on_loaded = on_loaded.clone();

            spawn_local(async move {
                Logger::info_with_component("upload", &format!("Uploading {}", file.name()));
                loading.set(true);
                error.set(None);

                let outcome = api_client.upload_takings(&file).await;
                match &outcome {
                    Ok(response) => Logger::info_with_component(
                        "upload",
                        &format!(
                            "{} ({} record(s))",
                            response.message,
                            response.daily_takings_data.len()
                        ),
                    ),
                    Err(e) => Logger::failure_with_component("upload", e),
                }

                let (settled, to_load) = settle(outcome);
                if let Some(response) = to_load {
                    on_loaded.emit(response);
                }
                if settled.submitted {
                    let submitted_clear = submitted.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(NOTICE_DURATION_MS).await;
                        submitted_clear.set(false);
                    });
                }

                submitted.set(settled.submitted);
                error.set(settled.error);
                loading.set(settled.loading);
            });
        })
    };

    UseTakingsUploadResult {
        state: UploadState {
            loading: *loading,
            error: (*error).clone(),
            submitted: *submitted,
        },
        upload,
    }
}
