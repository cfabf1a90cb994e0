use serde::{Deserialize, Serialize};

/// Label JMeter gives the aggregate row of a summary report.
pub const TOTAL_LABEL: &str = "TOTAL";

/// One row of one load-test summary report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Load level of the run (`# Samples`).
    pub samples: u64,
    pub label: String,
    /// Requests per second.
    pub throughput: f64,
    /// Response times in milliseconds.
    pub average: f64,
    pub median: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
    pub received_kbps: f64,
    pub sent_kbps: f64,
    /// File name the row was read from.
    pub source_file: String,
}
