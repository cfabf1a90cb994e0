use serde::{Deserialize, Serialize};
use crate::loader::FileConvention;
use crate::models::TOTAL_LABEL;

pub const DEFAULT_CONFIG_FILE: &str = "loadtrend.yaml";

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LoadTrendConfig {
    pub catalog: CatalogConfig,
    pub selection: SelectionConfig,
}

/// Where report files live and how they are named.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub root: String,
    pub extension: String,
    pub cache_cleared_marker: String,
    pub total_label: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: "Reports".to_string(),
            extension: "csv".to_string(),
            cache_cleared_marker: "clear".to_string(),
            total_label: TOTAL_LABEL.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn convention(&self) -> FileConvention {
        FileConvention::new(&self.extension, &self.cache_cleared_marker)
    }
}

/// Scenario and location choices offered to a front end. The first entry of
/// each list is the default.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    pub scenarios: Vec<String>,
    pub locations: Vec<String>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            scenarios: vec!["Tasks".to_string(), "All".to_string(), "Roster".to_string()],
            locations: vec!["Local".to_string(), "VM".to_string()],
        }
    }
}

impl SelectionConfig {
    pub fn default_scenario(&self) -> Option<&str> {
        self.scenarios.first().map(|s| s.as_str())
    }

    pub fn default_location(&self) -> Option<&str> {
        self.locations.first().map(|s| s.as_str())
    }
}
