use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::shape::TimelinePoint;

pub const CHART_KIND_TIMELINE: &str = "timeline";
pub const DEFAULT_TITLE: &str = "Dynamic Timeline Chart";
pub const DEFAULT_TOOLTIP_WIDTH: &str = "300px";

/// Fully materialized options handed to the charting backend, serialized
/// with the backend's camelCase wire names so option snapshots can be
/// asserted byte-for-byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineChartOptions {
    pub chart: ChartOptions,
    pub title: TitleOptions,
    pub x_axis: AxisOptions,
    pub y_axis: AxisOptions,
    pub series: Vec<SeriesOptions>,
    pub tooltip: TooltipOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleOptions {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_line_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<AxisLabelOptions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabelOptions {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOptions {
    pub data: Vec<TimelinePoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub style: TooltipStyle,
    pub value_decimals: u32,
    pub shared: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipStyle {
    pub width: String,
}

impl TimelineChartOptions {
    /// Default timeline options around one derived point sequence: hidden
    /// datetime x-axis, unlabeled gridline y-axis, shared zero-decimal
    /// tooltip.
    #[must_use]
    pub fn from_points(points: Vec<TimelinePoint>) -> Self {
        Self {
            chart: ChartOptions {
                kind: CHART_KIND_TIMELINE.to_owned(),
            },
            title: TitleOptions {
                text: DEFAULT_TITLE.to_owned(),
            },
            x_axis: AxisOptions {
                kind: Some("datetime".to_owned()),
                visible: Some(false),
                ..AxisOptions::default()
            },
            y_axis: AxisOptions {
                grid_line_width: Some(1.0),
                labels: Some(AxisLabelOptions { enabled: false }),
                ..AxisOptions::default()
            },
            series: vec![SeriesOptions { data: points }],
            tooltip: TooltipOptions {
                style: TooltipStyle {
                    width: DEFAULT_TOOLTIP_WIDTH.to_owned(),
                },
                value_decimals: 0,
                shared: true,
            },
        }
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.data.len()).sum()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart options: {e}")))
    }
}
