//! Daily takings entry form engine.
//!
//! Holds the record being edited, applies one field edit at a time through a
//! pure transition ([`DailyTakingRecord::with_field`]) and notifies a listener
//! with the full record after every change. Derived totals are never stored,
//! so they cannot go stale between edits.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::storage::{EntryKey, TakingsStorage};
use crate::{DailyTakingRecord, TakingsError, TakingsFigures, UploadResponse};

/// Fields the user can type into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TakingsField {
    CashCoin,
    Cheques,
    EftPos,
    PettyCash,
    NonCacVouchers,
    POrders,
    StaffVouchers,
    FloatAdjust,
    TotalTakings,
    RegRead,
    TotalCustomers,
    Refunds,
    Voids,
    PettyCashNotes,
    DailyTakings,
}

impl TakingsField {
    /// JSON name of the field
    pub fn wire_name(self) -> &'static str {
        match self {
            TakingsField::CashCoin => "cashCoin",
            TakingsField::Cheques => "cheques",
            TakingsField::EftPos => "eftPos",
            TakingsField::PettyCash => "pettyCash",
            TakingsField::NonCacVouchers => "nonCacVouchers",
            TakingsField::POrders => "pOrders",
            TakingsField::StaffVouchers => "staffVouchers",
            TakingsField::FloatAdjust => "floatAdjust",
            TakingsField::TotalTakings => "totalTakings",
            TakingsField::RegRead => "regRead",
            TakingsField::TotalCustomers => "totalCustomers",
            TakingsField::Refunds => "refunds",
            TakingsField::Voids => "voids",
            TakingsField::PettyCashNotes => "pettyCashNotes",
            TakingsField::DailyTakings => "daily_takings",
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            TakingsField::CashCoin => "Cash / Coin",
            TakingsField::Cheques => "Cheques",
            TakingsField::EftPos => "EFT POS",
            TakingsField::PettyCash => "Petty Cash",
            TakingsField::NonCacVouchers => "Non CAC Vouchers",
            TakingsField::POrders => "P/Orders",
            TakingsField::StaffVouchers => "Staff Vouchers",
            TakingsField::FloatAdjust => "Float Adj +/-",
            TakingsField::TotalTakings => "Total Takings",
            TakingsField::RegRead => "Reg Read",
            TakingsField::TotalCustomers => "Total Customers",
            TakingsField::Refunds => "Refunds",
            TakingsField::Voids => "Voids",
            TakingsField::PettyCashNotes => "Petty Cash Notes",
            TakingsField::DailyTakings => "Daily Takings",
        }
    }

    /// Current value of the field rendered for an input control
    pub fn display_value(self, figures: &TakingsFigures) -> String {
        match self {
            TakingsField::TotalCustomers => figures.total_customers.to_string(),
            TakingsField::PettyCashNotes => figures.petty_cash_notes.clone(),
            amount => amount_slot(figures, amount)
                .map(|value| value.to_string())
                .unwrap_or_default(),
        }
    }
}

fn amount_slot(figures: &TakingsFigures, field: TakingsField) -> Option<f64> {
    let value = match field {
        TakingsField::CashCoin => figures.cash_coin,
        TakingsField::Cheques => figures.cheques,
        TakingsField::EftPos => figures.eft_pos,
        TakingsField::PettyCash => figures.petty_cash,
        TakingsField::NonCacVouchers => figures.non_cac_vouchers,
        TakingsField::POrders => figures.p_orders,
        TakingsField::StaffVouchers => figures.staff_vouchers,
        TakingsField::FloatAdjust => figures.float_adjust,
        TakingsField::TotalTakings => figures.total_takings,
        TakingsField::RegRead => figures.reg_read,
        TakingsField::Refunds => figures.refunds,
        TakingsField::Voids => figures.voids,
        TakingsField::DailyTakings => figures.daily_takings,
        TakingsField::TotalCustomers | TakingsField::PettyCashNotes => return None,
    };
    Some(value)
}

fn amount_slot_mut(figures: &mut TakingsFigures, field: TakingsField) -> Option<&mut f64> {
    let slot = match field {
        TakingsField::CashCoin => &mut figures.cash_coin,
        TakingsField::Cheques => &mut figures.cheques,
        TakingsField::EftPos => &mut figures.eft_pos,
        TakingsField::PettyCash => &mut figures.petty_cash,
        TakingsField::NonCacVouchers => &mut figures.non_cac_vouchers,
        TakingsField::POrders => &mut figures.p_orders,
        TakingsField::StaffVouchers => &mut figures.staff_vouchers,
        TakingsField::FloatAdjust => &mut figures.float_adjust,
        TakingsField::TotalTakings => &mut figures.total_takings,
        TakingsField::RegRead => &mut figures.reg_read,
        TakingsField::Refunds => &mut figures.refunds,
        TakingsField::Voids => &mut figures.voids,
        TakingsField::DailyTakings => &mut figures.daily_takings,
        TakingsField::TotalCustomers | TakingsField::PettyCashNotes => return None,
    };
    Some(slot)
}

/// Parse a typed amount. Anything that is not a finite number becomes 0.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parse a typed customer count. Fractions are truncated; negative or
/// unparsable input becomes 0.
pub fn parse_count(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value.trunc().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

fn set_figure(figures: &mut TakingsFigures, field: TakingsField, raw: &str) {
    match field {
        TakingsField::TotalCustomers => figures.total_customers = parse_count(raw),
        TakingsField::PettyCashNotes => figures.petty_cash_notes = raw.to_string(),
        amount => {
            if let Some(slot) = amount_slot_mut(figures, amount) {
                *slot = parse_amount(raw);
            }
        }
    }
}

impl DailyTakingRecord {
    /// Pure form transition: the record with one field replaced by the
    /// parsed `raw` input.
    pub fn with_field(&self, field: TakingsField, raw: &str) -> Self {
        let mut next = self.clone();
        set_figure(&mut next.figures, field, raw);
        next
    }
}

/// Text last typed into each input of the entry form.
///
/// A number input mid-edit holds text such as `12.` or `-` that does not
/// survive a parse and re-format. While the typed text still parses to the
/// value in the record it is shown as typed; once the record moves on
/// (apply, upload) the record's own value is shown instead.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputDrafts {
    typed: HashMap<TakingsField, String>,
}

impl InputDrafts {
    pub fn record(&mut self, field: TakingsField, raw: &str) {
        self.typed.insert(field, raw.to_string());
    }

    /// Text to render in the input for `field`
    pub fn input_text(&self, field: TakingsField, figures: &TakingsFigures) -> String {
        match self.typed.get(&field) {
            Some(typed) if parses_to(field, typed, figures) => typed.clone(),
            _ => field.display_value(figures),
        }
    }
}

fn parses_to(field: TakingsField, typed: &str, figures: &TakingsFigures) -> bool {
    let mut parsed = figures.clone();
    set_figure(&mut parsed, field, typed);
    parsed == *figures
}

type ChangeListener = Box<dyn FnMut(&DailyTakingRecord)>;

/// State holder for the daily takings entry screen.
///
/// Every mutation that changes the record raises exactly one change
/// notification, in the order the mutations happen.
pub struct EntryForm<S: TakingsStorage> {
    record: DailyTakingRecord,
    storage: S,
    on_change: ChangeListener,
}

impl<S: TakingsStorage> EntryForm<S> {
    /// New form for `today`, committing applied entries into `storage`
    pub fn new(today: NaiveDate, storage: S) -> Self {
        Self {
            record: DailyTakingRecord::blank(today),
            storage,
            on_change: Box::new(|_| {}),
        }
    }

    /// Register the change listener, replacing any previous one
    pub fn with_listener(mut self, listener: impl FnMut(&DailyTakingRecord) + 'static) -> Self {
        self.on_change = Box::new(listener);
        self
    }

    pub fn record(&self) -> &DailyTakingRecord {
        &self.record
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn set_field(&mut self, field: TakingsField, raw: &str) {
        self.record = self.record.with_field(field, raw);
        self.notify();
    }

    pub fn set_store(&mut self, store: impl Into<String>) {
        self.record.store = store.into();
        self.notify();
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.record.date = date;
        self.notify();
    }

    /// Commit the current record under `(date, store)` and clear the typed
    /// figures. The selected store and date stay as they are.
    ///
    /// Returns the key the record was committed under. Without a store or a
    /// date nothing is committed and nothing is notified.
    pub fn apply(&mut self) -> Result<EntryKey, TakingsError> {
        if self.record.store.trim().is_empty() {
            return Err(TakingsError::MissingStore);
        }
        let date = self.record.date.ok_or(TakingsError::MissingDate)?;

        let key = EntryKey::new(date, self.record.store.clone());
        self.storage.store_entry(key.clone(), self.record.clone());

        self.record.figures = TakingsFigures::default();
        self.notify();
        Ok(key)
    }

    /// Replace the record with the first one parsed from an upload.
    ///
    /// Returns `false` (and leaves the record alone) when the upload
    /// produced no records. Any records after the first are dropped.
    pub fn load_from_upload(&mut self, response: &UploadResponse) -> bool {
        let Some(first) = response.daily_takings_data.first() else {
            return false;
        };
        self.record = first.clone();
        self.notify();
        true
    }

    fn notify(&mut self) {
        (self.on_change)(&self.record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryTakingsStorage;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 19).unwrap()
    }

    fn recording_form() -> (
        EntryForm<Rc<RefCell<InMemoryTakingsStorage>>>,
        Rc<RefCell<Vec<DailyTakingRecord>>>,
    ) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let form = EntryForm::new(today(), InMemoryTakingsStorage::shared())
            .with_listener(move |record| sink.borrow_mut().push(record.clone()));
        (form, seen)
    }

    fn upload(records: Vec<DailyTakingRecord>) -> UploadResponse {
        UploadResponse {
            store_name: "Glebe".to_string(),
            daily_takings_data: records,
            message: "Data successfully saved to database".to_string(),
        }
    }

    #[test]
    fn test_new_form_is_blank_for_today() {
        let (form, seen) = recording_form();
        assert_eq!(form.record().date, Some(today()));
        assert_eq!(form.record().figures, TakingsFigures::default());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_total_banking_scenario() {
        let (mut form, _) = recording_form();
        form.set_field(TakingsField::CashCoin, "100");
        form.set_field(TakingsField::Cheques, "50");
        form.set_field(TakingsField::EftPos, "25");
        assert_eq!(form.record().total_banking(), 175.0);
    }

    #[test]
    fn test_overs_unders_scenarios() {
        let (mut form, _) = recording_form();
        form.set_field(TakingsField::TotalTakings, "500");
        form.set_field(TakingsField::RegRead, "480");
        assert_eq!(form.record().overs_unders(), 20.0);

        form.set_field(TakingsField::TotalTakings, "480");
        form.set_field(TakingsField::RegRead, "500");
        assert_eq!(form.record().overs_unders(), -20.0);
    }

    #[test]
    fn test_derived_fields_never_stale_across_edit_sequence() {
        let (mut form, seen) = recording_form();
        let edits = [
            (TakingsField::CashCoin, "12.5"),
            (TakingsField::TotalTakings, "300"),
            (TakingsField::EftPos, "-2"),
            (TakingsField::RegRead, "299.5"),
            (TakingsField::Cheques, "abc"),
            (TakingsField::CashCoin, "40"),
            (TakingsField::RegRead, "310"),
        ];
        for (field, raw) in edits {
            form.set_field(field, raw);
        }

        for record in seen.borrow().iter() {
            let f = &record.figures;
            assert_eq!(record.total_banking(), f.cash_coin + f.cheques + f.eft_pos);
            assert_eq!(record.overs_unders(), f.total_takings - f.reg_read);
        }
        assert_eq!(form.record().total_banking(), 38.0);
        assert_eq!(form.record().overs_unders(), -10.0);
    }

    #[test]
    fn test_one_notification_per_edit_in_order() {
        let (mut form, seen) = recording_form();
        form.set_field(TakingsField::CashCoin, "1");
        form.set_field(TakingsField::CashCoin, "2");
        form.set_store("Glebe");
        form.set_field(TakingsField::CashCoin, "3");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        let cash: Vec<f64> = seen.iter().map(|r| r.figures.cash_coin).collect();
        assert_eq!(cash, vec![1.0, 2.0, 2.0, 3.0]);
        assert_eq!(seen[2].store, "Glebe");
    }

    #[test]
    fn test_invalid_input_coerced_to_zero() {
        let (mut form, _) = recording_form();
        form.set_field(TakingsField::CashCoin, "10");
        form.set_field(TakingsField::CashCoin, "ten");
        assert_eq!(form.record().figures.cash_coin, 0.0);

        form.set_field(TakingsField::Cheques, "inf");
        assert_eq!(form.record().figures.cheques, 0.0);

        form.set_field(TakingsField::FloatAdjust, " -7.25 ");
        assert_eq!(form.record().figures.float_adjust, -7.25);
    }

    #[test]
    fn test_customer_count_parsing() {
        assert_eq!(parse_count("42"), 42);
        assert_eq!(parse_count("12.9"), 12);
        assert_eq!(parse_count("-3"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("lots"), 0);
    }

    #[test]
    fn test_apply_without_store_is_noop() {
        let (mut form, seen) = recording_form();
        form.set_field(TakingsField::CashCoin, "100");
        let before = seen.borrow().len();

        assert_eq!(form.apply(), Err(TakingsError::MissingStore));
        assert_eq!(form.storage().entry_count(), 0);
        assert_eq!(form.record().figures.cash_coin, 100.0);
        assert_eq!(seen.borrow().len(), before);
    }

    #[test]
    fn test_apply_without_date_is_noop() {
        let (mut form, seen) = recording_form();
        form.set_store("Glebe");
        form.set_date(None);
        form.set_field(TakingsField::CashCoin, "100");
        let before = seen.borrow().len();

        assert_eq!(form.apply(), Err(TakingsError::MissingDate));
        assert_eq!(form.storage().entry_count(), 0);
        assert_eq!(seen.borrow().len(), before);
    }

    #[test]
    fn test_apply_commits_and_resets_figures() {
        let (mut form, seen) = recording_form();
        form.set_store("Glebe");
        form.set_field(TakingsField::CashCoin, "100");
        form.set_field(TakingsField::TotalCustomers, "31");
        form.set_field(TakingsField::PettyCashNotes, "stamps");

        let key = form.apply().unwrap();
        assert_eq!(key, EntryKey::new(today(), "Glebe"));

        let committed = form.storage().get_entry(&key).unwrap();
        assert_eq!(committed.figures.cash_coin, 100.0);
        assert_eq!(committed.figures.total_customers, 31);
        assert_eq!(committed.figures.petty_cash_notes, "stamps");

        assert_eq!(form.record().figures, TakingsFigures::default());
        assert_eq!(form.record().store, "Glebe");
        assert_eq!(form.record().date, Some(today()));
        assert_eq!(seen.borrow().last().unwrap(), form.record());
    }

    #[test]
    fn test_apply_overwrites_same_key() {
        let (mut form, _) = recording_form();
        form.set_store("Glebe");
        form.set_field(TakingsField::CashCoin, "100");
        form.apply().unwrap();
        form.set_field(TakingsField::CashCoin, "250");
        let key = form.apply().unwrap();

        assert_eq!(form.storage().entry_count(), 1);
        assert_eq!(form.storage().get_entry(&key).unwrap().figures.cash_coin, 250.0);
    }

    #[test]
    fn test_load_from_empty_upload_leaves_record() {
        let (mut form, seen) = recording_form();
        form.set_field(TakingsField::CashCoin, "5");
        let before = form.record().clone();

        assert!(!form.load_from_upload(&upload(Vec::new())));
        assert_eq!(form.record(), &before);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_load_from_upload_takes_first_record() {
        let (mut form, seen) = recording_form();
        form.set_field(TakingsField::CashCoin, "5");

        let mut first = DailyTakingRecord::blank(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        first.store = "Glebe".to_string();
        first.figures.daily_takings = 1520.4;
        let mut second = first.clone();
        second.figures.daily_takings = 980.0;

        assert!(form.load_from_upload(&upload(vec![first.clone(), second])));
        assert_eq!(form.record(), &first);
        assert_eq!(form.record().figures.cash_coin, 0.0);
        assert_eq!(seen.borrow().last().unwrap(), &first);
    }

    /// Type `keys` one character at a time into a number input bound to
    /// `field`. The input reports its text, the record takes the parsed
    /// value, and the input is overwritten whenever the rendered text
    /// differs from what it holds. A lone `-` is reported as empty text, as
    /// browsers do for incomplete numbers.
    fn type_into(
        record: DailyTakingRecord,
        drafts: &mut InputDrafts,
        field: TakingsField,
        keys: &str,
    ) -> (String, DailyTakingRecord) {
        let mut shown = String::new();
        let mut record = record;
        for key in keys.chars() {
            shown.push(key);
            let reported = if shown == "-" { String::new() } else { shown.clone() };
            drafts.record(field, &reported);
            record = record.with_field(field, &reported);

            let rendered = drafts.input_text(field, &record.figures);
            if rendered != reported {
                shown = rendered;
            }
        }
        (shown, record)
    }

    #[test]
    fn test_typing_decimals_keeps_typed_text() {
        let cases = [
            (TakingsField::CashCoin, "12.05", 12.05),
            (TakingsField::Cheques, "0.50", 0.5),
            (TakingsField::EftPos, "100.", 100.0),
            (TakingsField::FloatAdjust, "-7.25", -7.25),
            (TakingsField::DailyTakings, "1520.40", 1520.4),
        ];
        for (field, keys, value) in cases {
            let mut drafts = InputDrafts::default();
            let (shown, record) = type_into(DailyTakingRecord::blank(today()), &mut drafts, field, keys);
            assert_eq!(shown, keys, "input for {:?}", field);
            assert_eq!(amount_slot(&record.figures, field), Some(value));
        }
    }

    #[test]
    fn test_typing_customer_count_keeps_typed_text() {
        let mut drafts = InputDrafts::default();
        let (shown, record) =
            type_into(DailyTakingRecord::blank(today()), &mut drafts, TakingsField::TotalCustomers, "31");
        assert_eq!(shown, "31");
        assert_eq!(record.figures.total_customers, 31);
    }

    #[test]
    fn test_drafts_give_way_when_record_changes() {
        let (mut form, _) = recording_form();
        let mut drafts = InputDrafts::default();
        form.set_store("Glebe");

        drafts.record(TakingsField::CashCoin, "12.50");
        form.set_field(TakingsField::CashCoin, "12.50");
        assert_eq!(drafts.input_text(TakingsField::CashCoin, &form.record().figures), "12.50");

        form.apply().unwrap();
        assert_eq!(drafts.input_text(TakingsField::CashCoin, &form.record().figures), "0");

        let mut uploaded = DailyTakingRecord::blank(today());
        uploaded.figures.cash_coin = 80.0;
        form.load_from_upload(&upload(vec![uploaded]));
        assert_eq!(drafts.input_text(TakingsField::CashCoin, &form.record().figures), "80");
    }

    #[test]
    fn test_untouched_inputs_show_record_values() {
        let drafts = InputDrafts::default();
        let mut figures = TakingsFigures::default();
        figures.reg_read = 480.5;
        assert_eq!(drafts.input_text(TakingsField::RegRead, &figures), "480.5");
        assert_eq!(drafts.input_text(TakingsField::CashCoin, &figures), "0");
    }
}
