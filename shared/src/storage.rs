//! # Takings Storage
//!
//! Committed entries from the entry form are kept behind the
//! [`TakingsStorage`] trait so the form engine can be handed any store:
//! the in-memory map used by the browser client, or a test double.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::DailyTakingRecord;

/// Logical key of a committed entry: one record per store per day
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryKey {
    pub date: NaiveDate,
    pub store: String,
}

impl EntryKey {
    pub fn new(date: NaiveDate, store: impl Into<String>) -> Self {
        Self {
            date,
            store: store.into(),
        }
    }
}

/// Trait defining the interface for committed entry storage
pub trait TakingsStorage {
    /// Store an entry under `key`, replacing any previous entry.
    /// Returns the replaced entry, if there was one.
    fn store_entry(&mut self, key: EntryKey, record: DailyTakingRecord) -> Option<DailyTakingRecord>;

    /// Retrieve the entry stored under `key`
    fn get_entry(&self, key: &EntryKey) -> Option<DailyTakingRecord>;

    /// List all entries for a date, ordered by store name
    fn list_entries_for_date(&self, date: NaiveDate) -> Vec<DailyTakingRecord>;

    /// Number of stored entries
    fn entry_count(&self) -> usize;
}

/// Process-lifetime entry map. Nothing is persisted; a reload clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryTakingsStorage {
    entries: BTreeMap<EntryKey, DailyTakingRecord>,
}

impl InMemoryTakingsStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap in a shared handle so several screens can reach the same map
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }
}

impl TakingsStorage for InMemoryTakingsStorage {
    fn store_entry(&mut self, key: EntryKey, record: DailyTakingRecord) -> Option<DailyTakingRecord> {
        self.entries.insert(key, record)
    }

    fn get_entry(&self, key: &EntryKey) -> Option<DailyTakingRecord> {
        self.entries.get(key).cloned()
    }

    fn list_entries_for_date(&self, date: NaiveDate) -> Vec<DailyTakingRecord> {
        self.entries
            .iter()
            .filter(|(key, _)| key.date == date)
            .map(|(_, record)| record.clone())
            .collect()
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl<T: TakingsStorage> TakingsStorage for Rc<RefCell<T>> {
    fn store_entry(&mut self, key: EntryKey, record: DailyTakingRecord) -> Option<DailyTakingRecord> {
        self.borrow_mut().store_entry(key, record)
    }

    fn get_entry(&self, key: &EntryKey) -> Option<DailyTakingRecord> {
        self.borrow().get_entry(key)
    }

    fn list_entries_for_date(&self, date: NaiveDate) -> Vec<DailyTakingRecord> {
        self.borrow().list_entries_for_date(date)
    }

    fn entry_count(&self) -> usize {
        self.borrow().entry_count()
    }
}
