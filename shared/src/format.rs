use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown in place of an amount that overflowed to infinity or is NaN
pub const NOT_A_NUMBER: &str = "n/a";

/// Format an amount as dollars with thousands separators, e.g. `$1,234.50`
/// or `-$20.00`
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_A_NUMBER.to_string();
    }
    let rounded = format!("{:.2}", amount.abs());
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.004 rounds to 0.00 and should not carry a sign
    let sign = if amount < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Plain two-decimal amount with a leading dollar sign, as shown in the
/// read-only total boxes
pub fn format_total(amount: f64) -> String {
    if !amount.is_finite() {
        NOT_A_NUMBER.to_string()
    } else if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

/// `DD Mon YYYY`, e.g. `19 Jun 2025`
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// `DD Mon YYYY HH:MM` for a backend audit timestamp. Timestamps without an
/// offset are shown as written; anything unparsable is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%d %b %Y %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%d %b %Y %H:%M").to_string();
    }
    raw.to_string()
}

/// Value for an `<input type="date">`
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

/// Parse the value of an `<input type="date">`; empty or invalid is `None`
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
