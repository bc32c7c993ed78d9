//! Request building and response interpretation for the takings backend.
//!
//! Transport lives in the frontend; everything here works on plain values so
//! the rules for each endpoint can be checked without a browser.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::{ApiErrorBody, DailyTakingRecord, Store, TakingsError, UploadResponse};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Wire value of the "every store" query
pub const ALL_STORES: &str = "All";

const NO_DATA_FOUND: &str = "No data found";

/// Endpoint URLs relative to a backend origin
#[derive(Debug, Clone, PartialEq)]
pub struct ApiEndpoints {
    base_url: String,
}

impl ApiEndpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn stores_url(&self) -> String {
        format!("{}/api/stores/", self.base_url)
    }

    pub fn upload_url(&self) -> String {
        format!("{}/api/upload/", self.base_url)
    }

    pub fn query_url(&self, query: &TakingsQuery) -> Result<String, TakingsError> {
        Ok(format!("{}?{}", self.upload_url(), query.query_string()?))
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Status line and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Status text, or the bare code when the server sent none (HTTP/2)
    pub fn status_label(&self) -> String {
        if self.status_text.trim().is_empty() {
            self.status.to_string()
        } else {
            self.status_text.clone()
        }
    }

    fn json<T: DeserializeOwned>(&self) -> Result<T, TakingsError> {
        serde_json::from_str(&self.body).map_err(|e| TakingsError::Decode(e.to_string()))
    }
}

/// Which stores a lookup covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSelection {
    All,
    Named(String),
}

impl StoreSelection {
    /// Interpret the value of a store select control. Empty means nothing
    /// was chosen.
    pub fn from_choice(choice: &str) -> Option<Self> {
        let choice = choice.trim();
        if choice.is_empty() {
            None
        } else if choice.eq_ignore_ascii_case(ALL_STORES) {
            Some(StoreSelection::All)
        } else {
            Some(StoreSelection::Named(choice.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StoreSelection::All => ALL_STORES,
            StoreSelection::Named(name) => name,
        }
    }
}

/// A validated lookup of stored takings
#[derive(Debug, Clone, PartialEq)]
pub struct TakingsQuery {
    pub store: StoreSelection,
    pub date: NaiveDate,
}

impl TakingsQuery {
    /// Check the client-side precondition: both a store and a date chosen
    pub fn new(store_choice: &str, date: Option<NaiveDate>) -> Result<Self, TakingsError> {
        match (StoreSelection::from_choice(store_choice), date) {
            (Some(store), Some(date)) => Ok(Self { store, date }),
            _ => Err(TakingsError::MissingSelection),
        }
    }

    pub fn query_string(&self) -> Result<String, TakingsError> {
        let date = self.date.format("%Y-%m-%d").to_string();
        serde_urlencoded::to_string([("store", self.store.as_str()), ("date", date.as_str())])
            .map_err(|e| TakingsError::Query(e.to_string()))
    }
}

/// What a lookup returned
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Single(Box<DailyTakingRecord>),
    AllStores(Vec<DailyTakingRecord>),
}

/// Decode `GET /api/stores/`
pub fn decode_store_list(reply: &HttpReply) -> Result<Vec<Store>, TakingsError> {
    if !reply.is_success() {
        return Err(TakingsError::Query(format!(
            "Failed to fetch stores: {}",
            reply.status_label()
        )));
    }
    reply.json()
}

/// Decode `POST /api/upload/`
pub fn decode_upload(reply: &HttpReply) -> Result<UploadResponse, TakingsError> {
    if !reply.is_success() {
        return Err(TakingsError::Upload(reply.status_label()));
    }
    reply.json()
}

/// Decode `GET /api/upload/?store=..&date=..`
///
/// Failure messages come from the body's `detail` field when the server
/// sent one.
pub fn decode_query(query: &TakingsQuery, reply: &HttpReply) -> Result<QueryResult, TakingsError> {
    if !reply.is_success() {
        let detail = serde_json::from_str::<ApiErrorBody>(&reply.body)
            .ok()
            .and_then(|body| body.detail)
            .filter(|detail| !detail.trim().is_empty())
            .unwrap_or_else(|| NO_DATA_FOUND.to_string());
        return Err(TakingsError::Query(detail));
    }

    match query.store {
        StoreSelection::All => reply.json().map(QueryResult::AllStores),
        StoreSelection::Named(_) => reply.json().map(|record| QueryResult::Single(Box::new(record))),
    }
}
