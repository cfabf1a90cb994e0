use super::types::LoadTrendError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// Failure is confined to one source file; a batch load records it and moves on.
    pub per_file: bool,
}

impl LoadTrendError {
    /// Classify this error by type and by whether it is isolated to a single report file.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            // Per-file failures
            LoadTrendError::Parse { .. } => ErrorClassification {
                error_type: "ParseError",
                per_file: true,
            },
            LoadTrendError::Schema { .. } => ErrorClassification {
                error_type: "SchemaError",
                per_file: true,
            },
            LoadTrendError::Io(_) => ErrorClassification {
                error_type: "IoError",
                per_file: true,
            },

            // Session-level failures
            LoadTrendError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                per_file: false,
            },
            LoadTrendError::InvalidSelection(_) => ErrorClassification {
                error_type: "InvalidSelectionError",
                per_file: false,
            },
            LoadTrendError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                per_file: false,
            },
            LoadTrendError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                per_file: false,
            },
        }
    }
}
