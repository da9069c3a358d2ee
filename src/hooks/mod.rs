//! Hook implementations the host platform calls outside the render path:
//! default configuration, query derivation, and configuration validation.

pub mod default_config;
pub mod query;
pub mod validate;

pub use default_config::default_chart_config;
pub use query::{Query, queries_from_chart_config};
pub use validate::{ValidationResult, validate_chart_config};
