//! The timeline data shaping core: role resolution, datetime parsing, and
//! row-to-point reshaping. Everything here is a pure transform over data
//! the host supplies per render.

pub mod datetime;
pub mod point;
pub mod reshaper;
pub mod resolver;

pub use datetime::parse_epoch_millis;
pub use point::TimelinePoint;
pub use reshaper::reshape;
pub use resolver::column_ids_by_key;

/// Role keys understood by the timeline reshaper.
pub const ROLE_DATETIME: &str = "datetime";
pub const ROLE_CATEGORY: &str = "category";
pub const ROLE_LABEL: &str = "label";
