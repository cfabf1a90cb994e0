pub mod formatter;
pub mod table;

pub use formatter::*;
