use crate::model::{ChartConfig, ColumnId};

/// Returns the column ids assigned to `key`, in their configured order.
///
/// An absent role is a valid, checked state and yields an empty list,
/// never an error.
#[must_use]
pub fn column_ids_by_key(config: &ChartConfig, key: &str) -> Vec<ColumnId> {
    config
        .dimensions
        .iter()
        .find(|dimension| dimension.key == key)
        .map(|dimension| {
            dimension
                .columns
                .iter()
                .map(|column| column.id.clone())
                .collect()
        })
        .unwrap_or_default()
}

/// First column id assigned to `key`, if any.
#[must_use]
pub fn first_column_id(config: &ChartConfig, key: &str) -> Option<ColumnId> {
    config
        .dimensions
        .iter()
        .find(|dimension| dimension.key == key)
        .and_then(|dimension| dimension.columns.first())
        .map(|column| column.id.clone())
}
