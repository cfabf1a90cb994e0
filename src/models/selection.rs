use serde::{Deserialize, Serialize};

/// Which cohort of report files a selection reads.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheState {
    #[default]
    Default,
    /// Runs recorded after the server cache was cleared.
    Cleared,
}

impl CacheState {
    pub fn from_flag(cleared: bool) -> Self {
        if cleared {
            Self::Cleared
        } else {
            Self::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Cleared => "cleared",
        }
    }
}

impl std::fmt::Display for CacheState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scenario and location choice. Both values are opaque to the engine; only a
/// catalog gives them meaning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Variant {
    pub scenario: String,
    pub location: String,
}

impl Variant {
    pub fn new(scenario: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            location: location.into(),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.scenario, self.location)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Selection {
    pub variant: Variant,
    pub cache_state: CacheState,
}

impl Selection {
    pub fn new(variant: Variant, cache_state: CacheState) -> Self {
        Self { variant, cache_state }
    }
}
