pub mod deriver;

pub use deriver::{bandwidth_series, latency_series, throughput_series};
