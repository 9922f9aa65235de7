// SPDX-License-Identifier: MPL-2.0
//! Czech display formatting for invoice amounts and dates.
//!
//! The invoice service reports amounts as plain numbers and dates as ISO-8601
//! strings; these helpers turn them into the `cs-CZ` renderings users expect:
//! decimal comma, digit groups separated by non-breaking spaces, currency
//! symbol after the amount, and the short date `d. m. yyyy`.
//!
//! Both functions are pure and callable independently of the Fluent bundles.
//! Absent input yields the `N/A` sentinel instead of an error.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Placeholder shown when a value is missing from the extracted data.
pub const MISSING_VALUE: &str = "N/A";

/// Currency assumed when the service does not report one.
pub const DEFAULT_CURRENCY: &str = "CZK";

/// Non-breaking space used by Czech number formatting for digit grouping
/// and between the amount and the currency symbol.
const NBSP: char = '\u{a0}';

/// Formats a monetary amount per Czech conventions, e.g. `1 234,50 Kč`.
///
/// Returns [`MISSING_VALUE`] when the amount is absent. Negative amounts
/// render with a leading minus sign. The amount always carries two fraction
/// digits.
pub fn format_currency(amount: Option<f64>, currency: &str) -> String {
    let Some(amount) = amount else {
        return MISSING_VALUE.to_string();
    };

    format!(
        "{}{}{}",
        format_czech_number(amount),
        NBSP,
        currency_symbol(currency)
    )
}

/// Formats an ISO-8601 date or date-time string as a Czech short date,
/// e.g. `5. 3. 2024`.
///
/// Returns [`MISSING_VALUE`] for absent or empty input. Strings that do not
/// parse as a calendar date are returned verbatim; no validation is
/// performed before formatting.
pub fn format_date(date: Option<&str>) -> String {
    let Some(raw) = date else {
        return MISSING_VALUE.to_string();
    };
    if raw.trim().is_empty() {
        return MISSING_VALUE.to_string();
    }

    match parse_calendar_date(raw) {
        Some(date) => format!("{}. {}. {}", date.day(), date.month(), date.year()),
        None => raw.to_string(),
    }
}

/// Symbol used after the amount. Codes without a common Czech symbol render
/// as the ISO code itself, which is how the service stores them.
fn currency_symbol(code: &str) -> &str {
    match code {
        "CZK" => "Kč",
        "EUR" => "€",
        other => other,
    }
}

/// Renders `amount` with a decimal comma, two fraction digits, and digit
/// groups of three separated by non-breaking spaces.
fn format_czech_number(amount: f64) -> String {
    let rounded = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (rounded.as_str(), "00"),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(NBSP);
        }
        grouped.push(*digit);
    }

    // The sign is dropped for amounts that round to zero.
    let sign = if amount.is_sign_negative() && rounded != "0.00" {
        "-"
    } else {
        ""
    };

    format!("{sign}{grouped},{frac_part}")
}

/// Accepts the date encodings the service emits: RFC 3339 with offset,
/// `datetime.isoformat()` without offset, and bare dates.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_amount_renders_sentinel() {
        assert_eq!(format_currency(None, DEFAULT_CURRENCY), "N/A");
    }

    #[test]
    fn czk_amount_uses_czech_conventions() {
        assert_eq!(
            format_currency(Some(1234.5), "CZK"),
            "1\u{a0}234,50\u{a0}Kč"
        );
    }

    #[test]
    fn small_amount_has_no_grouping() {
        assert_eq!(format_currency(Some(42.0), "CZK"), "42,00\u{a0}Kč");
    }

    #[test]
    fn millions_group_in_threes() {
        assert_eq!(
            format_currency(Some(1_234_567.89), "CZK"),
            "1\u{a0}234\u{a0}567,89\u{a0}Kč"
        );
    }

    #[test]
    fn negative_amount_keeps_sign() {
        assert_eq!(
            format_currency(Some(-1234.5), "CZK"),
            "-1\u{a0}234,50\u{a0}Kč"
        );
    }

    #[test]
    fn negligible_negative_amount_drops_sign() {
        assert_eq!(format_currency(Some(-0.001), "CZK"), "0,00\u{a0}Kč");
    }

    #[test]
    fn euro_uses_symbol() {
        assert_eq!(format_currency(Some(99.9), "EUR"), "99,90\u{a0}€");
    }

    #[test]
    fn unknown_currency_falls_back_to_code() {
        assert_eq!(format_currency(Some(10.0), "USD"), "10,00\u{a0}USD");
    }

    #[test]
    fn missing_date_renders_sentinel() {
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("")), "N/A");
        assert_eq!(format_date(Some("   ")), "N/A");
    }

    #[test]
    fn rfc3339_date_renders_czech_short_date() {
        assert_eq!(format_date(Some("2024-03-05T00:00:00Z")), "5. 3. 2024");
    }

    #[test]
    fn isoformat_without_offset_parses() {
        assert_eq!(format_date(Some("2024-12-31T23:59:59")), "31. 12. 2024");
    }

    #[test]
    fn isoformat_with_microseconds_parses() {
        assert_eq!(
            format_date(Some("2024-03-05T14:30:00.123456")),
            "5. 3. 2024"
        );
    }

    #[test]
    fn bare_date_parses() {
        assert_eq!(format_date(Some("2024-03-05")), "5. 3. 2024");
    }

    #[test]
    fn day_and_month_are_not_zero_padded() {
        assert_eq!(format_date(Some("2024-01-02")), "2. 1. 2024");
    }

    #[test]
    fn unparseable_date_is_returned_verbatim() {
        assert_eq!(format_date(Some("not a date")), "not a date");
    }
}
