//! Render lifecycle: owns the single live chart handle and drives the
//! dispose → start → construct → complete sequence per host invocation.

use tracing::{debug, warn};

use crate::host::{ChartContext, ChartEvent};
use crate::model::{ChartConfig, ChartModel};
use crate::render::{ChartHandle, TimelineChartOptions, TimelineRenderer};
use crate::shape;

/// Terminal state of one render attempt. `Completed` means the attempt
/// finished and produced a chart; `Failed` means the backend refused
/// construction and the fault was reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Completed,
    Failed,
}

/// Timeline plugin runtime registered with the host at initialization.
///
/// Exclusively owns the previously rendered chart handle; exactly one
/// chart instance is live at a time and it is disposed before each
/// re-render. The host invokes `render` at most once per logical update,
/// so `&mut self` is the only overlap guard needed.
pub struct TimelineRuntime<R: TimelineRenderer> {
    renderer: R,
    chart: Option<R::Chart>,
    last_outcome: Option<RenderOutcome>,
}

impl<R: TimelineRenderer> TimelineRuntime<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            chart: None,
            last_outcome: None,
        }
    }

    /// Runs one render attempt against the host's current chart model.
    ///
    /// Disposes any prior chart first (a no-op when none exists), then
    /// emits `RenderStart`, attempts construction, emits `RenderError`
    /// with the fault text when the backend refuses, and emits
    /// `RenderComplete` unconditionally afterward. Single attempt, no
    /// retry.
    pub fn render(&mut self, ctx: &mut dyn ChartContext) -> RenderOutcome {
        self.dispose_chart();

        ctx.emit_event(ChartEvent::RenderStart);
        let options = derive_options(ctx.chart_model());
        let outcome = match self.renderer.create_chart(&options) {
            Ok(chart) => {
                self.chart = Some(chart);
                debug!(points = options.point_count(), "timeline render complete");
                RenderOutcome::Completed
            }
            Err(fault) => {
                warn!(error = %fault, "timeline chart construction failed");
                ctx.emit_event(ChartEvent::RenderError {
                    error: fault.to_string(),
                });
                RenderOutcome::Failed
            }
        };
        ctx.emit_event(ChartEvent::RenderComplete);

        self.last_outcome = Some(outcome);
        outcome
    }

    /// Whether a chart instance is currently live.
    #[must_use]
    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<RenderOutcome> {
        self.last_outcome
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn dispose_chart(&mut self) {
        if let Some(mut chart) = self.chart.take() {
            chart.dispose();
        }
    }
}

/// Derives backend options from the model's first configuration and first
/// data view. A missing configuration or view degrades to an empty
/// series, matching the reshaper's silent-degradation contract.
fn derive_options(model: &ChartModel) -> TimelineChartOptions {
    let fallback;
    let config = match model.active_config() {
        Some(config) => config,
        // No configuration still renders: every row falls into the
        // unnamed bucket with a null timestamp.
        None => {
            fallback = ChartConfig::new("timeline", Vec::new());
            &fallback
        }
    };

    let points = match model.primary_view() {
        Some(view) => shape::reshape(&view.column_ids, &view.rows, config),
        None => Vec::new(),
    };
    TimelineChartOptions::from_points(points)
}
