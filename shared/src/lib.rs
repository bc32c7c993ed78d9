use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

pub mod api;
pub mod entry_form;
pub mod error;
pub mod format;
pub mod storage;
pub mod store_directory;

pub use api::{ApiEndpoints, HttpReply, QueryResult, StoreSelection, TakingsQuery};
pub use entry_form::{EntryForm, InputDrafts, TakingsField};
pub use error::TakingsError;
pub use storage::{EntryKey, InMemoryTakingsStorage, TakingsStorage};
pub use store_directory::StoreDirectory;

/// Manually entered figures for one store on one day.
///
/// Everything the user can type into the entry form lives here, so resetting
/// the form is a matter of replacing this struct with its default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TakingsFigures {
    pub cash_coin: f64,
    pub cheques: f64,
    pub eft_pos: f64,
    pub petty_cash: f64,
    pub non_cac_vouchers: f64,
    pub p_orders: f64,
    pub staff_vouchers: f64,
    /// Correction applied to the starting cash float (may be negative)
    pub float_adjust: f64,
    pub total_takings: f64,
    /// Register reading at close
    pub reg_read: f64,
    pub total_customers: u32,
    pub refunds: f64,
    pub voids: f64,
    pub petty_cash_notes: String,
    /// Summary amount persisted by the backend
    #[serde(rename = "daily_takings")]
    pub daily_takings: f64,
}

impl TakingsFigures {
    /// Cash/coin + cheques + EFT POS
    pub fn total_banking(&self) -> f64 {
        self.cash_coin + self.cheques + self.eft_pos
    }

    /// Positive when takings exceed the register reading
    pub fn overs_unders(&self) -> f64 {
        self.total_takings - self.reg_read
    }
}

/// The canonical daily takings record exchanged with the backend.
///
/// Derived totals are never stored: they are computed from the figures on
/// demand and written out when the record is serialized. Incoming
/// `totalBanking`/`oversUnders` values are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DailyTakingRecord {
    #[serde(default)]
    pub store: String,
    /// `None` while the date control is cleared
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub figures: TakingsFigures,
    /// Backend audit timestamp (RFC 3339), never set by the client
    #[serde(default)]
    pub created_at: Option<String>,
    /// Backend audit timestamp (RFC 3339), never set by the client
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl DailyTakingRecord {
    /// Fresh record for the entry screen: zero figures, no store, given date
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn total_banking(&self) -> f64 {
        self.figures.total_banking()
    }

    pub fn overs_unders(&self) -> f64 {
        self.figures.overs_unders()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordOut<'a> {
    store: &'a str,
    date: Option<NaiveDate>,
    #[serde(flatten)]
    figures: &'a TakingsFigures,
    total_banking: f64,
    overs_unders: f64,
    #[serde(rename = "created_at", skip_serializing_if = "Option::is_none")]
    created_at: Option<&'a str>,
    #[serde(rename = "updated_at", skip_serializing_if = "Option::is_none")]
    updated_at: Option<&'a str>,
}

impl Serialize for DailyTakingRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RecordOut {
            store: &self.store,
            date: self.date,
            figures: &self.figures,
            total_banking: self.total_banking(),
            overs_unders: self.overs_unders(),
            created_at: self.created_at.as_deref(),
            updated_at: self.updated_at.as_deref(),
        }
        .serialize(serializer)
    }
}

/// A store as listed by `GET /api/stores/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
}

/// One entry of a store selection control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreOption {
    pub value: String,
    pub label: String,
}

impl From<Store> for StoreOption {
    fn from(store: Store) -> Self {
        Self {
            value: store.name.clone(),
            label: store.name,
        }
    }
}

/// Response of `POST /api/upload/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub store_name: String,
    #[serde(default)]
    pub daily_takings_data: Vec<DailyTakingRecord>,
    #[serde(default)]
    pub message: String,
}

/// Error body returned by the backend on non-success responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_derived_totals() {
        let figures = TakingsFigures {
            cash_coin: 100.0,
            cheques: 50.0,
            eft_pos: 25.0,
            total_takings: 500.0,
            reg_read: 480.0,
            ..TakingsFigures::default()
        };
        assert_eq!(figures.total_banking(), 175.0);
        assert_eq!(figures.overs_unders(), 20.0);
    }

    #[test]
    fn test_blank_record_is_zeroed_with_date() {
        let record = DailyTakingRecord::blank(date(2025, 6, 19));
        assert_eq!(record.date, Some(date(2025, 6, 19)));
        assert!(record.store.is_empty());
        assert_eq!(record.figures, TakingsFigures::default());
        assert_eq!(record.total_banking(), 0.0);
    }

    #[test]
    fn test_serialize_uses_wire_names_and_includes_derived_fields() {
        let record = DailyTakingRecord {
            store: "Newtown".to_string(),
            date: Some(date(2025, 6, 19)),
            figures: TakingsFigures {
                cash_coin: 100.0,
                cheques: 50.0,
                eft_pos: 25.0,
                p_orders: 3.0,
                total_takings: 480.0,
                reg_read: 500.0,
                total_customers: 42,
                petty_cash_notes: "$5 stamps".to_string(),
                daily_takings: 480.0,
                ..TakingsFigures::default()
            },
            created_at: None,
            updated_at: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["store"], "Newtown");
        assert_eq!(value["date"], "2025-06-19");
        assert_eq!(value["cashCoin"], 100.0);
        assert_eq!(value["pOrders"], 3.0);
        assert_eq!(value["nonCacVouchers"], 0.0);
        assert_eq!(value["totalCustomers"], 42);
        assert_eq!(value["pettyCashNotes"], "$5 stamps");
        assert_eq!(value["daily_takings"], 480.0);
        assert_eq!(value["totalBanking"], 175.0);
        assert_eq!(value["oversUnders"], -20.0);
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_deserialize_short_backend_record() {
        let value = json!({
            "store": "Newtown",
            "date": "2025-06-19",
            "daily_takings": 1234.5,
            "created_at": "2025-06-19T09:15:00Z",
            "updated_at": "2025-06-19T10:30:00+10:00"
        });

        let record: DailyTakingRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.store, "Newtown");
        assert_eq!(record.date, Some(date(2025, 6, 19)));
        assert_eq!(record.figures.daily_takings, 1234.5);
        assert_eq!(record.figures.cash_coin, 0.0);
        assert_eq!(record.created_at.as_deref(), Some("2025-06-19T09:15:00Z"));
        assert_eq!(record.updated_at.as_deref(), Some("2025-06-19T10:30:00+10:00"));
    }

    #[test]
    fn test_deserialize_ignores_incoming_derived_values() {
        let value = json!({
            "store": "Glebe",
            "date": "2025-06-19",
            "cashCoin": 10,
            "cheques": 5,
            "eftPos": 1,
            "totalBanking": 999,
            "oversUnders": 999
        });

        let record: DailyTakingRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.total_banking(), 16.0);
        assert_eq!(record.overs_unders(), 0.0);
    }

    #[test]
    fn test_store_option_from_store() {
        let option = StoreOption::from(Store {
            id: 7,
            name: "Marrickville".to_string(),
        });
        assert_eq!(option.value, "Marrickville");
        assert_eq!(option.label, "Marrickville");
    }

    #[test]
    fn test_upload_response_defaults_missing_data() {
        let response: UploadResponse =
            serde_json::from_value(json!({ "store_name": "Glebe" })).unwrap();
        assert!(response.daily_takings_data.is_empty());
        assert!(response.message.is_empty());
    }
}
