use serde::{Deserialize, Serialize};

/// One rendered timeline datum.
///
/// Field names follow the charting backend's point contract: `x` is the
/// epoch-millisecond position (`null` when the source cell was
/// unparsable), `name` is the owning series/category, `label` the event
/// description. Invalid timestamps are kept, not filtered; the backend
/// decides how to draw them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    #[serde(rename = "x")]
    pub timestamp: Option<i64>,
    #[serde(rename = "name")]
    pub series_name: String,
    pub label: String,
}

impl TimelinePoint {
    #[must_use]
    pub fn new(
        timestamp: Option<i64>,
        series_name: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            series_name: series_name.into(),
            label: label.into(),
        }
    }
}
