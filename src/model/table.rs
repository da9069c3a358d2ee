use serde::{Deserialize, Serialize};

use super::{CellValue, ChartConfig, Column, ColumnId};

/// Positional table snapshot: one ordered column-id list plus rows whose
/// cells align with it by index.
///
/// Row length is not validated against the column-id list; a mismatched
/// row degrades silently during reshaping instead of failing the render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataView {
    pub column_ids: Vec<ColumnId>,
    pub rows: Vec<Vec<CellValue>>,
}

impl DataView {
    #[must_use]
    pub fn new(column_ids: Vec<ColumnId>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { column_ids, rows }
    }
}

/// Snapshot of everything the host hands the plugin per render: the column
/// catalog, the active configurations, and the fetched data views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    pub columns: Vec<Column>,
    pub config: Vec<ChartConfig>,
    pub data: Vec<DataView>,
}

impl ChartModel {
    #[must_use]
    pub fn new(columns: Vec<Column>, config: Vec<ChartConfig>, data: Vec<DataView>) -> Self {
        Self {
            columns,
            config,
            data,
        }
    }

    /// First configuration, the one the render path consumes.
    #[must_use]
    pub fn active_config(&self) -> Option<&ChartConfig> {
        self.config.first()
    }

    /// First data view, the one the render path consumes.
    #[must_use]
    pub fn primary_view(&self) -> Option<&DataView> {
        self.data.first()
    }
}
