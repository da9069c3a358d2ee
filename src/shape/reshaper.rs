use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::model::{CellValue, ChartConfig, ColumnId};

use super::{ROLE_CATEGORY, ROLE_DATETIME, ROLE_LABEL, TimelinePoint, resolver};

/// Reshapes positional rows into a flat timeline point sequence.
///
/// Rows are grouped by the first "category" column's value in first-seen
/// order; within a group, point order matches row order. Every input row
/// produces exactly one point. Shape mismatches degrade silently: a short
/// row simply has no value for trailing columns, a long row drops its
/// tail, and an unresolved category role collapses all rows into a single
/// unnamed group.
#[must_use]
pub fn reshape(
    column_ids: &[ColumnId],
    rows: &[Vec<CellValue>],
    config: &ChartConfig,
) -> Vec<TimelinePoint> {
    let category_id = resolver::first_column_id(config, ROLE_CATEGORY);
    let datetime_id = resolver::first_column_id(config, ROLE_DATETIME);
    let label_id = resolver::first_column_id(config, ROLE_LABEL);

    let mut groups: IndexMap<String, SmallVec<[TimelinePoint; 4]>> = IndexMap::new();
    for row in rows {
        let fields = row_fields(column_ids, row);
        let category = lookup(&fields, category_id.as_ref());
        let series_name = category.render_text();

        let timestamp = super::parse_epoch_millis(lookup(&fields, datetime_id.as_ref()));
        let label = lookup(&fields, label_id.as_ref()).render_text();
        trace!(
            series = %series_name,
            timestamp = ?timestamp,
            "reshaped row"
        );

        groups
            .entry(series_name.clone())
            .or_default()
            .push(TimelinePoint::new(timestamp, series_name, label));
    }

    let points: Vec<TimelinePoint> = groups.into_values().flatten().collect();
    debug!(
        rows = rows.len(),
        points = points.len(),
        "reshaped timeline series"
    );
    points
}

/// Positional zip of column ids onto one row's cells.
///
/// `zip` stops at the shorter side, which is exactly the silent-degradation
/// contract for mismatched row lengths.
fn row_fields<'a>(
    column_ids: &'a [ColumnId],
    row: &'a [CellValue],
) -> IndexMap<&'a ColumnId, &'a CellValue> {
    column_ids.iter().zip(row.iter()).collect()
}

const NULL_CELL: CellValue = CellValue::Null;

fn lookup<'a>(
    fields: &'a IndexMap<&ColumnId, &CellValue>,
    id: Option<&ColumnId>,
) -> &'a CellValue {
    id.and_then(|id| fields.get(id).copied())
        .unwrap_or(&NULL_CELL)
}
