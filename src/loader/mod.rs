pub mod catalog;
pub mod csv;
pub mod select;

pub use catalog::{DirectoryCatalog, MemoryCatalog, ReportCatalog};
pub use select::FileConvention;

use serde::Serialize;
use crate::aggregate::merge;
use crate::errors::LoadTrendError;
use crate::models::{CacheState, ColumnIndex, ReportRecord, ReportSet, Variant};
use tracing::{debug, info, warn};

/// Parse one report file's content into typed records tagged with `source_file`.
pub fn parse_report(content: &str, source_file: &str) -> Result<Vec<ReportRecord>, LoadTrendError> {
    let mut rows = csv::parse_rows(content)?.into_iter();
    let header = rows
        .next()
        .ok_or_else(|| LoadTrendError::parse(1, "no header row"))?;
    let index = ColumnIndex::resolve(&header.fields)?;

    rows.map(|row| index.record(&row.fields, row.line, source_file))
        .collect()
}

/// A report file that could not be loaded.
#[derive(Debug, Serialize)]
pub struct FileFailure {
    pub file: String,
    pub error_type: &'static str,
    #[serde(serialize_with = "serialize_display")]
    pub error: LoadTrendError,
}

impl FileFailure {
    pub fn new(file: impl Into<String>, error: LoadTrendError) -> Self {
        Self {
            file: file.into(),
            error_type: error.classify().error_type,
            error,
        }
    }
}

fn serialize_display<S: serde::Serializer>(
    value: &LoadTrendError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Result of loading a batch of report files.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded {
        reports: ReportSet,
        failures: Vec<FileFailure>,
    },
    /// No file yielded a record. Carries the failures so the caller can show them.
    Empty { failures: Vec<FileFailure> },
}

impl LoadOutcome {
    pub fn failures(&self) -> &[FileFailure] {
        match self {
            LoadOutcome::Loaded { failures, .. } | LoadOutcome::Empty { failures } => failures,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LoadOutcome::Empty { .. })
    }
}

/// Resolves and loads the report files of one variant from a catalog.
pub struct ReportLoader<'a> {
    catalog: &'a dyn ReportCatalog,
    convention: FileConvention,
}

impl<'a> ReportLoader<'a> {
    pub fn new(catalog: &'a dyn ReportCatalog, convention: FileConvention) -> Self {
        Self { catalog, convention }
    }

    pub fn convention(&self) -> &FileConvention {
        &self.convention
    }

    /// Candidate files of a variant in the requested cache cohort, sorted by name.
    pub fn select(&self, variant: &Variant, cache_state: CacheState) -> Result<Vec<String>, LoadTrendError> {
        let names = self.catalog.list(variant)?;
        let selected = self.convention.select(&names, cache_state);
        debug!(
            variant = %variant,
            cache_state = %cache_state,
            listed = names.len(),
            selected = selected.len(),
            "Selected report files"
        );
        Ok(selected)
    }

    /// Load one report file.
    pub fn load(&self, variant: &Variant, file_name: &str) -> Result<Vec<ReportRecord>, LoadTrendError> {
        let content = self.catalog.read(variant, file_name)?;
        parse_report(&content, file_name)
    }

    /// Load every file, isolating per-file failures. Records keep file order,
    /// then row order within each file. Session-level errors abort the batch.
    pub fn load_all<S: AsRef<str>>(
        &self,
        variant: &Variant,
        file_names: &[S],
    ) -> Result<LoadOutcome, LoadTrendError> {
        let mut sets = Vec::new();
        let mut failures = Vec::new();

        for file_name in file_names {
            let file_name = file_name.as_ref();
            match self.load(variant, file_name) {
                Ok(records) => {
                    info!(file = %file_name, records = records.len(), "Loaded report");
                    sets.extend(ReportSet::new(records));
                }
                Err(e) if !e.classify().per_file => return Err(e),
                Err(e) => {
                    warn!(file = %file_name, error = %e, "Skipping report file");
                    failures.push(FileFailure::new(file_name, e));
                }
            }
        }

        Ok(match merge(sets) {
            Some(reports) => LoadOutcome::Loaded { reports, failures },
            None => {
                warn!(
                    variant = %variant,
                    candidates = file_names.len(),
                    failed = failures.len(),
                    "No report records loaded"
                );
                LoadOutcome::Empty { failures }
            }
        })
    }
}
