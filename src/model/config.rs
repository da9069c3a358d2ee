use serde::{Deserialize, Serialize};

use super::Column;

/// A named role ("datetime", "category", "label") mapped to an ordered
/// list of catalog columns.
///
/// Role keys are unique within one configuration; the host editor enforces
/// this before the configuration reaches the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub key: String,
    pub columns: Vec<Column>,
}

impl Dimension {
    #[must_use]
    pub fn new(key: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            key: key.into(),
            columns,
        }
    }
}

/// The user's current column-to-role assignment.
///
/// Created and replaced wholesale by the host on every configuration
/// change; this plugin never mutates it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub key: String,
    pub dimensions: Vec<Dimension>,
}

impl ChartConfig {
    #[must_use]
    pub fn new(key: impl Into<String>, dimensions: Vec<Dimension>) -> Self {
        Self {
            key: key.into(),
            dimensions,
        }
    }
}
