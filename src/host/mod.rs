//! Interface to the host analytics platform.
//!
//! The host owns the chart model and the event channel; the plugin only
//! ever sees them through [`ChartContext`]. In the other direction,
//! [`init`] performs the one-time registration handshake and hands the
//! host the [`TimelineHooks`] bundle it drives from then on.

use serde::{Deserialize, Serialize};

use crate::hooks::{self, Query, ValidationResult};
use crate::model::{ChartConfig, ChartModel, Column};
use crate::render::TimelineRenderer;
use crate::runtime::{RenderOutcome, TimelineRuntime};

/// Lifecycle signals emitted back to the host around each render attempt.
///
/// `RenderComplete` always follows `RenderStart`, error or not; it means
/// "render attempt finished", never "render succeeded".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartEvent {
    RenderStart,
    RenderError { error: String },
    RenderComplete,
}

/// Host context as seen by the plugin: the current model snapshot plus the
/// outbound event channel.
pub trait ChartContext {
    fn chart_model(&self) -> &ChartModel;
    fn emit_event(&mut self, event: ChartEvent);
}

/// Everything the plugin registers with the host in one handshake: the
/// render callback (backed by the runtime) plus the configuration hooks.
///
/// The host calls `init` once, keeps the returned bundle, and invokes its
/// methods for the lifetime of the embedding.
pub struct TimelineHooks<R: TimelineRenderer> {
    runtime: TimelineRuntime<R>,
}

impl<R: TimelineRenderer> TimelineHooks<R> {
    /// The registered render callback; one attempt per invocation.
    pub fn render_chart(&mut self, ctx: &mut dyn ChartContext) -> RenderOutcome {
        self.runtime.render(ctx)
    }

    /// Default-configuration generator over the host's column catalog.
    #[must_use]
    pub fn default_chart_config(&self, columns: &[Column]) -> Vec<ChartConfig> {
        hooks::default_chart_config(columns)
    }

    /// Query-column extractor for data fetching.
    #[must_use]
    pub fn queries_from_chart_config(&self, configs: &[ChartConfig]) -> Vec<Query> {
        hooks::queries_from_chart_config(configs)
    }

    /// Configuration validator for the host's editor flow.
    #[must_use]
    pub fn validate_config(&self, configs: &[ChartConfig]) -> ValidationResult {
        hooks::validate_chart_config(configs)
    }

    #[must_use]
    pub fn runtime(&self) -> &TimelineRuntime<R> {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut TimelineRuntime<R> {
        &mut self.runtime
    }
}

/// One-time registration handshake: wraps the backend in a runtime and
/// hands the host the full hook bundle.
#[must_use]
pub fn init<R: TimelineRenderer>(renderer: R) -> TimelineHooks<R> {
    TimelineHooks {
        runtime: TimelineRuntime::new(renderer),
    }
}
