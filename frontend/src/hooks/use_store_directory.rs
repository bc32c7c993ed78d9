use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::StoreDirectory;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Fetch the store list once when the calling screen mounts.
///
/// Starts empty and stays empty if the fetch fails; the failure is only
/// logged.
#[hook]
pub fn use_store_directory(api_client: &ApiClient) -> StoreDirectory {
    let directory = use_state(StoreDirectory::empty);

    use_effect_with((), {
        let directory = directory.clone();
        let api_client = api_client.clone();

        move |_| {
            spawn_local(async move {
                let (fetched, swallowed) = StoreDirectory::from_fetch(api_client.list_stores().await);
                if let Some(e) = swallowed {
                    Logger::warn_with_component(
                        "store-directory",
                        &format!("Using an empty store list: {}", e),
                    );
                }
                directory.set(fetched);
            });

            || ()
        }
    });

    (*directory).clone()
}
