use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use gloo::timers::future::TimeoutFuture;
use shared::{DailyTakingRecord, EntryForm, InMemoryTakingsStorage, InputDrafts, TakingsField, UploadResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::date_utils;
use crate::services::logging::Logger;

/// How long the "submitted" notice stays up
pub const NOTICE_DURATION_MS: u32 = 4000;

pub type SharedStorage = Rc<RefCell<InMemoryTakingsStorage>>;

#[derive(Clone, PartialEq)]
pub struct EntryFormState {
    pub record: DailyTakingRecord,
    /// What each input was last typed as
    pub drafts: InputDrafts,
    pub applied: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseEntryFormActions {
    pub set_field: Callback<(TakingsField, String)>,
    pub set_store: Callback<String>,
    pub set_date: Callback<Option<NaiveDate>>,
    pub apply: Callback<()>,
    pub load_upload: Callback<UploadResponse>,
}

pub struct UseEntryFormResult {
    pub state: EntryFormState,
    pub actions: UseEntryFormActions,
}

/// Drive an [`EntryForm`] from the entry screen.
///
/// The engine lives in a mutable ref; every change it reports is copied into
/// component state for rendering and echoed to `on_change`. Render code never
/// borrows the engine.
#[hook]
pub fn use_entry_form(
    storage: SharedStorage,
    on_change: Callback<DailyTakingRecord>,
) -> UseEntryFormResult {
    let today = *use_memo((), |_| date_utils::today());
    let record = use_state(|| DailyTakingRecord::blank(today));
    let applied = use_state(|| false);
    let drafts = use_mut_ref(InputDrafts::default);

    let form = {
        let record = record.clone();
        let on_change = on_change.clone();
        use_mut_ref(move || {
            EntryForm::new(today, storage).with_listener(move |current| {
                record.set(current.clone());
                on_change.emit(current.clone());
            })
        })
    };

    // Announce the fresh record once, like any later change
    use_effect_with((), {
        let form = form.clone();
        let on_change = on_change.clone();
        move |_| {
            let current = form.borrow().record().clone();
            on_change.emit(current);
            || ()
        }
    });

    let set_field = {
        let form = form.clone();
        let drafts = drafts.clone();
        Callback::from(move |(field, raw): (TakingsField, String)| {
            // Recorded first: the engine's listener triggers the re-render
            drafts.borrow_mut().record(field, &raw);
            form.borrow_mut().set_field(field, &raw);
        })
    };

    let set_store = {
        let form = form.clone();
        Callback::from(move |store: String| {
            form.borrow_mut().set_store(store);
        })
    };

    let set_date = {
        let form = form.clone();
        Callback::from(move |date: Option<NaiveDate>| {
            form.borrow_mut().set_date(date);
        })
    };

    let apply = {
        let form = form.clone();
        let applied = applied.clone();
        Callback::from(move |_| {
            let result = form.borrow_mut().apply();
            match result {
                Ok(key) => {
                    Logger::info_with_component(
                        "entry-form",
                        &format!("Committed daily takings for {} on {}", key.store, key.date),
                    );
                    applied.set(true);

                    let applied_clear = applied.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(NOTICE_DURATION_MS).await;
                        applied_clear.set(false);
                    });
                }
                Err(e) => Logger::failure_with_component("entry-form", &e),
            }
        })
    };

    let load_upload = {
        let form = form.clone();
        Callback::from(move |response: UploadResponse| {
            let loaded = form.borrow_mut().load_from_upload(&response);
            if loaded {
                Logger::info_with_component(
                    "entry-form",
                    &format!(
                        "Loaded 1 of {} uploaded record(s) for {}",
                        response.daily_takings_data.len(),
                        response.store_name
                    ),
                );
            } else {
                Logger::info_with_component("entry-form", "Upload contained no daily takings");
            }
        })
    };

    let drafts_snapshot = drafts.borrow().clone();

    UseEntryFormResult {
        state: EntryFormState {
            record: (*record).clone(),
            drafts: drafts_snapshot,
            applied: *applied,
        },
        actions: UseEntryFormActions {
            set_field,
            set_store,
            set_date,
            apply,
            load_upload,
        },
    }
}
