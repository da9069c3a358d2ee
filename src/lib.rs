//! timeline-chart: a custom timeline visualization plugin for a host
//! analytics platform's charting SDK.
//!
//! The plugin reshapes the host's tabular chart model into a timeline
//! point series (group rows by the "category" role, position them by the
//! "datetime" role, caption them by the "label" role) and delegates
//! drawing to an embedded charting backend behind the
//! [`render::TimelineRenderer`] seam.

pub mod error;
pub mod hooks;
pub mod host;
pub mod model;
pub mod render;
pub mod runtime;
pub mod shape;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
pub use host::{TimelineHooks, init};
pub use runtime::{RenderOutcome, TimelineRuntime};
