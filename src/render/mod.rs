mod null_renderer;
mod options;

pub use null_renderer::{NullChart, NullRenderer};
pub use options::{
    AxisLabelOptions, AxisOptions, ChartOptions, SeriesOptions, TimelineChartOptions,
    TitleOptions, TooltipOptions, TooltipStyle,
};

use crate::error::ChartResult;

/// Handle to one live chart instance owned by the runtime.
///
/// `dispose` must be idempotent; the runtime calls it before every
/// replacement and backends may also release on drop.
pub trait ChartHandle {
    fn dispose(&mut self);
}

/// Contract implemented by the embedded charting backend.
///
/// The backend receives a fully materialized options structure so drawing
/// code stays isolated from the host data model and the reshaping logic.
pub trait TimelineRenderer {
    type Chart: ChartHandle;

    fn create_chart(&mut self, options: &TimelineChartOptions) -> ChartResult<Self::Chart>;
}
