//! Deserializers for the looser shapes the API puts on the wire.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, de};

/// Optional date given as `2023-03-01`, a full ISO timestamp, or the
/// HTTP-date form `Wed, 01 Mar 2023 00:00:00 GMT`.
pub(crate) fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_date(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("unrecognized date `{}`", raw))),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| raw.parse::<NaiveDateTime>().ok().map(|dt| dt.date()))
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| DateTime::parse_from_rfc2822(raw).ok().map(|dt| dt.date_naive()))
}

/// Nullable flag that reads `null` as `false`.
pub(crate) fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Nullable flag that reads `null` as `true`.
pub(crate) fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}
