pub mod merge;
pub mod sorter;
pub mod filter;

pub use merge::merge;
pub use sorter::sort_by_samples;
pub use filter::{distinct_samples, filter_by_label, rows_for_sample, totals};
