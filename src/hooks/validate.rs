use serde::{Deserialize, Serialize};

use crate::model::ChartConfig;
use crate::shape::{ROLE_CATEGORY, ROLE_DATETIME, resolver};

pub const MISSING_ROLES_ERROR: &str =
    "Please select at least one datetime and one category column";

/// Structured validation outcome returned to the host's configuration
/// editor. Validation never panics or returns `Err`; a bad configuration
/// is data, not a fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    #[must_use]
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
        }
    }
}

/// Rejects configurations the reshaper could only degrade on: an empty
/// configuration list, or a first configuration whose "datetime" or
/// "category" role resolves to no columns.
#[must_use]
pub fn validate_chart_config(configs: &[ChartConfig]) -> ValidationResult {
    let Some(config) = configs.first() else {
        return ValidationResult::invalid(MISSING_ROLES_ERROR);
    };

    let datetime = resolver::column_ids_by_key(config, ROLE_DATETIME);
    let category = resolver::column_ids_by_key(config, ROLE_CATEGORY);
    if datetime.is_empty() || category.is_empty() {
        return ValidationResult::invalid(MISSING_ROLES_ERROR);
    }

    ValidationResult::valid()
}
