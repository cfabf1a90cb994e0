pub mod record;
pub mod schema;
pub mod report_set;
pub mod series;
pub mod selection;

pub use record::*;
pub use schema::{Column, ColumnIndex};
pub use report_set::*;
pub use series::*;
pub use selection::*;
