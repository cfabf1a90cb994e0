use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use crate::config::security::validate_selection_name;
use crate::errors::LoadTrendError;
use crate::models::Variant;
use tracing::{debug, warn};

/// Where report files for a variant live.
pub trait ReportCatalog {
    /// File names available for a variant, in no particular order. Filtering by
    /// extension and cohort is left to `FileConvention`.
    fn list(&self, variant: &Variant) -> Result<Vec<String>, LoadTrendError>;

    /// Full content of one report file.
    fn read(&self, variant: &Variant, file_name: &str) -> Result<String, LoadTrendError>;
}

/// Catalog laid out on disk as `<root>/<scenario>/<location>/<file>`.
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(root: PathBuf) -> Self {
        debug!(root = %root.display(), "DirectoryCatalog initialized");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the reports of one variant.
    pub fn variant_dir(&self, variant: &Variant) -> Result<PathBuf, LoadTrendError> {
        validate_selection_name(&variant.scenario)?;
        validate_selection_name(&variant.location)?;
        Ok(self.root.join(&variant.scenario).join(&variant.location))
    }
}

impl ReportCatalog for DirectoryCatalog {
    fn list(&self, variant: &Variant) -> Result<Vec<String>, LoadTrendError> {
        let dir = self.variant_dir(variant)?;
        if !dir.is_dir() {
            warn!(path = %dir.display(), "Report directory not found");
            return Ok(Vec::new());
        }

        let escaped = glob::Pattern::escape(&dir.to_string_lossy());
        let pattern = format!("{}/*", escaped);

        let mut names = Vec::new();
        for entry in glob::glob(&pattern)
            .map_err(|e| LoadTrendError::Config(format!("Invalid glob pattern: {}", e)))?
        {
            let path = entry.map_err(|e| LoadTrendError::Io(e.into()))?;
            if !path.is_file() {
                continue;
            }
            match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => names.push(name.to_string()),
                None => warn!(path = %path.display(), "Skipping file with non-UTF-8 name"),
            }
        }

        debug!(path = %dir.display(), files = names.len(), "Listed report directory");
        Ok(names)
    }

    fn read(&self, variant: &Variant, file_name: &str) -> Result<String, LoadTrendError> {
        validate_selection_name(file_name)?;
        let path = self.variant_dir(variant)?.join(file_name);
        Ok(std::fs::read_to_string(path)?)
    }
}

/// In-memory catalog keyed by variant then file name.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    files: BTreeMap<(String, String), BTreeMap<String, String>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, variant: &Variant, file_name: impl Into<String>, content: impl Into<String>) {
        self.files
            .entry((variant.scenario.clone(), variant.location.clone()))
            .or_default()
            .insert(file_name.into(), content.into());
    }

    pub fn with_file(mut self, variant: &Variant, file_name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(variant, file_name, content);
        self
    }

    fn variant_files(&self, variant: &Variant) -> Option<&BTreeMap<String, String>> {
        self.files.get(&(variant.scenario.clone(), variant.location.clone()))
    }
}

impl ReportCatalog for MemoryCatalog {
    fn list(&self, variant: &Variant) -> Result<Vec<String>, LoadTrendError> {
        Ok(self
            .variant_files(variant)
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn read(&self, variant: &Variant, file_name: &str) -> Result<String, LoadTrendError> {
        self.variant_files(variant)
            .and_then(|files| files.get(file_name))
            .cloned()
            .ok_or_else(|| {
                LoadTrendError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{} not found in {}", file_name, variant),
                ))
            })
    }
}
