use serde::Serialize;
use crate::aggregate::{distinct_samples, rows_for_sample, sort_by_samples, totals};
use crate::config::CatalogConfig;
use crate::errors::LoadTrendError;
use crate::loader::{FileConvention, FileFailure, LoadOutcome, ReportCatalog, ReportLoader};
use crate::metrics::{bandwidth_series, latency_series, throughput_series};
use crate::models::{
    AggregateView, BandwidthSeries, ReportRecord, ReportSet, Selection, Series, TOTAL_LABEL,
};
use tracing::{info, warn};

/// Naming rules applied during one analysis pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub convention: FileConvention,
    pub total_label: String,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            convention: FileConvention::default(),
            total_label: TOTAL_LABEL.to_string(),
        }
    }
}

impl From<&CatalogConfig> for AnalysisOptions {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            convention: config.convention(),
            total_label: config.total_label.clone(),
        }
    }
}

/// Sorted records of one selection and every view derived from them.
#[derive(Debug, Serialize)]
pub struct TrendReport {
    pub selection: Selection,
    pub files: Vec<String>,
    pub total_label: String,
    pub records: ReportSet,
    pub failures: Vec<FileFailure>,
    pub distinct_samples: Vec<u64>,
    pub throughput: Series,
    pub latency: Vec<Series>,
    pub bandwidth: BandwidthSeries,
}

impl TrendReport {
    fn derive(
        selection: Selection,
        files: Vec<String>,
        total_label: String,
        reports: ReportSet,
        failures: Vec<FileFailure>,
    ) -> Self {
        let records = sort_by_samples(reports);
        let bandwidth = bandwidth_series(&totals(&records, &total_label));
        Self {
            distinct_samples: distinct_samples(&records),
            throughput: throughput_series(&records),
            latency: latency_series(&records),
            bandwidth,
            selection,
            files,
            total_label,
            records,
            failures,
        }
    }

    pub fn rows_for_sample(&self, samples: u64) -> Vec<&ReportRecord> {
        rows_for_sample(&self.records, samples)
    }

    pub fn totals(&self) -> AggregateView<'_> {
        totals(&self.records, &self.total_label)
    }
}

/// Outcome of one analysis pass.
#[derive(Debug)]
pub enum Analysis {
    Ready(Box<TrendReport>),
    /// No records were loaded; nothing is derived.
    Empty {
        selection: Selection,
        files: Vec<String>,
        failures: Vec<FileFailure>,
    },
}

impl Analysis {
    pub fn report(&self) -> Option<&TrendReport> {
        match self {
            Analysis::Ready(report) => Some(&**report),
            Analysis::Empty { .. } => None,
        }
    }

    pub fn failures(&self) -> &[FileFailure] {
        match self {
            Analysis::Ready(report) => &report.failures,
            Analysis::Empty { failures, .. } => failures,
        }
    }
}

/// Run select, load, merge, sort and derive for one selection. Holds no state
/// between calls; only session-level failures are returned as errors.
pub fn analyze(
    catalog: &dyn ReportCatalog,
    selection: &Selection,
    options: &AnalysisOptions,
) -> Result<Analysis, LoadTrendError> {
    let loader = ReportLoader::new(catalog, options.convention.clone());
    let files = loader.select(&selection.variant, selection.cache_state)?;

    match loader.load_all(&selection.variant, &files)? {
        LoadOutcome::Loaded { reports, failures } => {
            info!(
                variant = %selection.variant,
                cache_state = %selection.cache_state,
                files = files.len(),
                records = reports.len(),
                failed = failures.len(),
                "Analysis ready"
            );
            Ok(Analysis::Ready(Box::new(TrendReport::derive(
                selection.clone(),
                files,
                options.total_label.clone(),
                reports,
                failures,
            ))))
        }
        LoadOutcome::Empty { failures } => {
            warn!(variant = %selection.variant, cache_state = %selection.cache_state, "No reports found");
            Ok(Analysis::Empty {
                selection: selection.clone(),
                files,
                failures,
            })
        }
    }
}
