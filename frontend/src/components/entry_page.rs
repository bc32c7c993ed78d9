use yew::prelude::*;
use shared::{DailyTakingRecord, UploadResponse};
use super::display_entry::DisplayEntry;
use super::excel_uploader::ExcelUploader;
use super::forms::takings_form::TakingsForm;
use crate::hooks::use_entry_form::{use_entry_form, SharedStorage};
use crate::hooks::use_store_directory::use_store_directory;
use crate::hooks::use_takings_upload::use_takings_upload;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct EntryPageProps {
    pub api_client: ApiClient,
    pub storage: SharedStorage,
    /// Receives the full record after every change
    pub on_change: Callback<DailyTakingRecord>,
}

#[function_component(EntryPage)]
pub fn entry_page(props: &EntryPageProps) -> Html {
    let directory = use_store_directory(&props.api_client);
    let entry = use_entry_form(props.storage.clone(), props.on_change.clone());

    // The store list is only a soft constraint, so an unknown store is still loaded
    let on_uploaded = {
        let directory = directory.clone();
        let load_upload = entry.actions.load_upload.clone();
        Callback::from(move |response: UploadResponse| {
            if !directory.is_empty() && !directory.contains(&response.store_name) {
                Logger::warn_with_component(
                    "upload",
                    &format!("Uploaded store {} is not in the store list", response.store_name),
                );
            }
            load_upload.emit(response);
        })
    };
    let upload = use_takings_upload(&props.api_client, on_uploaded);

    html! {
        <div class="entry-page">
            <div class="entry-main">
                <TakingsForm
                    record={entry.state.record.clone()}
                    drafts={entry.state.drafts.clone()}
                    store_options={directory.options().to_vec()}
                    applied={entry.state.applied}
                    on_field={entry.actions.set_field.clone()}
                    on_store={entry.actions.set_store.clone()}
                    on_date={entry.actions.set_date.clone()}
                    on_apply={entry.actions.apply.clone()}
                />
            </div>

            <aside class="entry-side">
                <section class="upload-section">
                    <h3>{"Upload Excel File"}</h3>
                    <ExcelUploader
                        on_file_select={upload.upload.clone()}
                        disabled={upload.state.loading}
                    />

                    {if upload.state.loading {
                        html! { <div class="loading spinner">{"Uploading..."}</div> }
                    } else { html! {} }}

                    {if let Some(error) = upload.state.error.as_ref() {
                        html! { <div class="form-message error">{error.clone()}</div> }
                    } else { html! {} }}

                    {if upload.state.submitted {
                        html! { <div class="form-message success">{"File submitted!"}</div> }
                    } else { html! {} }}
                </section>

                <DisplayEntry
                    record={entry.state.record.clone()}
                    title="Current Entry"
                    detailed=true
                />
            </aside>
        </div>
    }
}
