pub mod column;
pub mod config;
pub mod table;
pub mod value;

pub use column::{Column, ColumnId, ColumnKind};
pub use config::{ChartConfig, Dimension};
pub use table::{ChartModel, DataView};
pub use value::CellValue;
