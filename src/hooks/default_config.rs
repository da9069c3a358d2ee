use tracing::debug;

use crate::model::{ChartConfig, Column, ColumnKind, Dimension};
use crate::shape::{ROLE_CATEGORY, ROLE_DATETIME};

/// Builds the initial role assignment from the host's column catalog.
///
/// Picks the first timestamp-kind column for "datetime" and the first
/// attribute-kind column for "category". When either is absent the chart
/// cannot be auto-configured and an empty list is returned; the host then
/// leaves configuration to the user.
#[must_use]
pub fn default_chart_config(columns: &[Column]) -> Vec<ChartConfig> {
    let datetime = columns
        .iter()
        .find(|column| column.kind == ColumnKind::Timestamp);
    let category = columns
        .iter()
        .find(|column| column.kind == ColumnKind::Attribute);

    let (Some(datetime), Some(category)) = (datetime, category) else {
        debug!(
            columns = columns.len(),
            "no timestamp/attribute column pair; skipping default configuration"
        );
        return Vec::new();
    };

    vec![ChartConfig::new(
        "timeline",
        vec![
            Dimension::new(ROLE_DATETIME, vec![datetime.clone()]),
            Dimension::new(ROLE_CATEGORY, vec![category.clone()]),
        ],
    )]
}
