use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadTrendError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content is not parseable as a tabular report.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Content parses but does not expose every required column.
    #[error("Schema error: missing required column(s): {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl LoadTrendError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        LoadTrendError::Parse { line, message: message.into() }
    }
}
