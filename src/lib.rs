//! Aggregates load-test summary reports (one CSV per run) into trends across
//! load levels: throughput, response-time percentiles and bandwidth against
//! `# Samples`.
//!
//! A pass is `select → load → merge → sort → derive`, see [`pipeline::analyze`].

pub mod aggregate;
pub mod config;
pub mod errors;
pub mod loader;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod reporting;
pub mod utils;

#[cfg(feature = "cli")]
pub mod cli;

pub use errors::LoadTrendError;
pub use loader::{DirectoryCatalog, FileConvention, LoadOutcome, MemoryCatalog, ReportCatalog, ReportLoader};
pub use models::{CacheState, ReportRecord, ReportSet, Selection, Variant};
pub use pipeline::{analyze, Analysis, AnalysisOptions, TrendReport};
