use serde::{Deserialize, Serialize};

/// Largest magnitude at which every whole f64 is an exact integer (2^53).
const MAX_EXACT_INT_F64: f64 = 9_007_199_254_740_992.0;

/// Raw cell value as delivered by the host's data query.
///
/// The host wire format is loosely typed; this variant pins down the three
/// shapes that actually occur so downstream code never touches dynamic
/// payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Null,
}

impl CellValue {
    /// Renders the cell the way it appears in series names and labels.
    ///
    /// Whole numbers drop their fractional part (`3.0` renders as `"3"`),
    /// `Null` renders empty.
    #[must_use]
    pub fn render_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(value) => {
                // Whole floats are only cast when exactly representable as
                // an integer; beyond 2^53 the cast would saturate.
                if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT_F64 {
                    format!("{}", *value as i64)
                } else {
                    format!("{value}")
                }
            }
            Self::Null => String::new(),
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::CellValue;

    #[test]
    fn render_text_formats_whole_numbers_without_fraction() {
        assert_eq!(CellValue::Number(3.0).render_text(), "3");
        assert_eq!(CellValue::Number(3.5).render_text(), "3.5");
        assert_eq!(CellValue::Number(-12.0).render_text(), "-12");
    }

    #[test]
    fn render_text_of_huge_whole_numbers_never_saturates() {
        assert_eq!(CellValue::Number(1e20).render_text(), format!("{}", 1e20));
        assert_eq!(
            CellValue::Number(-1e20).render_text(),
            format!("{}", -1e20)
        );
        // Saturation would have produced i64::MAX regardless of sign.
        assert_ne!(CellValue::Number(1e20).render_text(), "9223372036854775807");
        assert_eq!(
            CellValue::Number(9_007_199_254_740_992.0).render_text(),
            "9007199254740992"
        );
    }

    #[test]
    fn render_text_of_null_is_empty() {
        assert_eq!(CellValue::Null.render_text(), "");
    }

    #[test]
    fn untagged_serde_round_trips_each_variant() {
        let json = serde_json::to_string(&CellValue::Text("ship".to_owned())).expect("serialize");
        assert_eq!(json, "\"ship\"");
        let back: CellValue = serde_json::from_str("42.5").expect("deserialize");
        assert_eq!(back, CellValue::Number(42.5));
    }
}
