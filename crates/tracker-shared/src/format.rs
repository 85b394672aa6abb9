//! Display formatting helpers.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::constants::DATE_FORMAT;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Format an ISO-8601 date or datetime in the application's date format.
///
/// Returns `None` when the input is not a recognizable date.
pub fn format_date(input: &str) -> Option<String> {
    let input = input.trim();

    let date = DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.date_naive())
        .or_else(|_| input.parse::<NaiveDateTime>().map(|dt| dt.date()))
        .or_else(|_| input.parse::<NaiveDate>())
        .ok()?;

    Some(date.format(DATE_FORMAT).to_string())
}

/// Format an amount as currency with en-US grouping and two decimals.
///
/// Currencies without a well-known symbol are prefixed with their code.
/// `NaN` renders as `NaN` and infinities as `∞` behind the symbol.
pub fn format_currency(amount: f64, currency: &str) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }

    let number = if amount.is_infinite() {
        "∞".to_string()
    } else {
        let fixed = format!("{:.2}", amount.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        format!("{}.{}", group_thousands(whole), cents)
    };

    let formatted = match currency.to_ascii_uppercase().as_str() {
        "USD" => format!("${}", number),
        "EUR" => format!("€{}", number),
        "GBP" => format!("£{}", number),
        code => format!("{} {}", code, number),
    };

    if amount < 0.0 && number != "0.00" {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Truncate `text` to at most `max_len` characters, ending in `...` when cut.
///
/// A `max_len` too small to hold the ellipsis keeps a bare prefix instead,
/// so the result never exceeds `max_len`.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    if max_len <= 3 {
        return text.chars().take(max_len).collect();
    }

    let kept: String = text.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

/// Loose email syntax check: something@something.something, no whitespace.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
