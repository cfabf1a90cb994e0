use crate::models::CacheState;

/// File naming convention of a report catalog: `<name>.<extension>` for the
/// default cohort and `<name><marker>.<extension>` for cache-cleared runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConvention {
    pub extension: String,
    pub cache_cleared_marker: String,
}

impl Default for FileConvention {
    fn default() -> Self {
        Self {
            extension: "csv".to_string(),
            cache_cleared_marker: "clear".to_string(),
        }
    }
}

impl FileConvention {
    pub fn new(extension: impl Into<String>, cache_cleared_marker: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            cache_cleared_marker: cache_cleared_marker.into(),
        }
    }

    fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }

    pub fn matches_extension(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.suffix())
    }

    pub fn is_cache_cleared(&self, file_name: &str) -> bool {
        file_name.ends_with(&format!("{}{}", self.cache_cleared_marker, self.suffix()))
    }

    /// Cohort a report file belongs to, or `None` when the extension does not match.
    pub fn cohort(&self, file_name: &str) -> Option<CacheState> {
        if !self.matches_extension(file_name) {
            None
        } else if self.is_cache_cleared(file_name) {
            Some(CacheState::Cleared)
        } else {
            Some(CacheState::Default)
        }
    }

    /// Keep the file names of the requested cohort, sorted by name.
    pub fn select<I, S>(&self, file_names: I, cache_state: CacheState) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected: Vec<String> = file_names
            .into_iter()
            .filter(|name| self.cohort(name.as_ref()) == Some(cache_state))
            .map(|name| name.as_ref().to_string())
            .collect();
        selected.sort();
        selected
    }
}
