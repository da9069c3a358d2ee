use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::model::CellValue;

/// Parses a raw datetime cell into epoch milliseconds.
///
/// Text cells are tried against RFC 3339 first, then the common naive
/// calendar shapes the host emits; naive datetimes are taken as UTC.
/// Numeric cells are already epoch milliseconds. Anything unparsable
/// yields `None`, which the reshaper carries through unfiltered.
#[must_use]
pub fn parse_epoch_millis(value: &CellValue) -> Option<i64> {
    match value {
        CellValue::Number(millis) if millis.is_finite() => Some(*millis as i64),
        CellValue::Number(_) | CellValue::Null => None,
        CellValue::Text(text) => parse_text(text.trim()),
    }
}

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn parse_text(text: &str) -> Option<i64> {
    if text.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.timestamp_millis());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}
