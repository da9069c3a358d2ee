use serde::{Deserialize, Serialize};

use crate::model::{ChartConfig, Column};

/// Ordered column list the host fetches data for, one per configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub columns: Vec<Column>,
}

/// Flattens each configuration's dimensions into a single fetch query,
/// preserving dimension order and column order within each dimension.
#[must_use]
pub fn queries_from_chart_config(configs: &[ChartConfig]) -> Vec<Query> {
    configs
        .iter()
        .map(|config| Query {
            columns: config
                .dimensions
                .iter()
                .flat_map(|dimension| dimension.columns.iter().cloned())
                .collect(),
        })
        .collect()
}
