pub mod formatting;

pub use formatting::{format_kbps, format_ms, format_rate, truncate_label};
