use std::collections::HashSet;
use std::path::Path;
use crate::errors::LoadTrendError;
use super::types::{LoadTrendConfig, DEFAULT_CONFIG_FILE};
use super::security::{validate_security_patterns, validate_selection_name};
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

pub fn parse_config(path: &Path) -> Result<LoadTrendConfig, LoadTrendError> {
    if !path.exists() {
        return Err(LoadTrendError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = std::fs::metadata(path)?;
    if metadata.len() > 1_048_576 {
        return Err(LoadTrendError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Parse an explicit config file, or fall back to `loadtrend.yaml` in the
/// working directory, or to built-in defaults when neither exists.
pub fn load_or_default(path: Option<&Path>) -> Result<LoadTrendConfig, LoadTrendError> {
    if let Some(path) = path {
        return parse_config(path);
    }

    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    if fallback.exists() {
        debug!(path = %fallback.display(), "Using config from working directory");
        parse_config(fallback)
    } else {
        Ok(LoadTrendConfig::default())
    }
}

pub fn parse_config_str(content: &str) -> Result<LoadTrendConfig, LoadTrendError> {
    // An empty document means "all defaults"
    if content.trim().is_empty() {
        return Ok(LoadTrendConfig::default());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    validate_security_patterns(&yaml)?;
    validate_schema(&yaml)?;

    let config: LoadTrendConfig = serde_yaml::from_value(yaml)?;

    validate_conflicts(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), LoadTrendError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| LoadTrendError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| LoadTrendError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only: typed deserialization and semantic checks decide
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

/// Detect semantic problems the schema cannot express.
fn validate_conflicts(config: &LoadTrendConfig) -> Result<(), LoadTrendError> {
    let catalog = &config.catalog;
    if catalog.extension.trim().is_empty() {
        return Err(LoadTrendError::Config("catalog.extension must not be empty".into()));
    }
    if catalog.extension.starts_with('.') {
        return Err(LoadTrendError::Config(format!(
            "catalog.extension '{}' must not start with a dot",
            catalog.extension
        )));
    }
    if catalog.cache_cleared_marker.is_empty() {
        return Err(LoadTrendError::Config("catalog.cache_cleared_marker must not be empty".into()));
    }
    if catalog.cache_cleared_marker.contains(['/', '\\']) {
        return Err(LoadTrendError::Config(format!(
            "catalog.cache_cleared_marker '{}' must not contain a path separator",
            catalog.cache_cleared_marker
        )));
    }
    if catalog.total_label.trim().is_empty() {
        return Err(LoadTrendError::Config("catalog.total_label must not be empty".into()));
    }

    for (field, names) in [
        ("selection.scenarios", &config.selection.scenarios),
        ("selection.locations", &config.selection.locations),
    ] {
        if names.is_empty() {
            return Err(LoadTrendError::Config(format!("{} must list at least one entry", field)));
        }
        let mut seen = HashSet::new();
        for name in names {
            validate_selection_name(name)
                .map_err(|e| LoadTrendError::Config(format!("{}: {}", field, e)))?;
            if !seen.insert(name.as_str()) {
                return Err(LoadTrendError::Config(format!(
                    "{} lists '{}' more than once",
                    field, name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogConfig, SelectionConfig};

    #[test]
    fn test_parse_full_config() {
        let config = parse_config_str(
            "catalog:\n  root: /srv/jmeter\n  extension: csv\n  cache_cleared_marker: _cold\n  total_label: ALL\nselection:\n  scenarios: [Checkout]\n  locations: [Cloud, Edge]\n",
        )
        .unwrap();
        assert_eq!(config.catalog.root, "/srv/jmeter");
        assert_eq!(config.catalog.cache_cleared_marker, "_cold");
        assert_eq!(config.catalog.total_label, "ALL");
        assert_eq!(config.selection.default_location(), Some("Cloud"));
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config_str("  \n").unwrap(), LoadTrendConfig::default());
    }

    #[test]
    fn test_invalid_yaml_fails() {
        assert!(matches!(parse_config_str("catalog: [unclosed"), Err(LoadTrendError::Yaml(_))));
    }

    #[test]
    fn test_traversal_in_config_fails() {
        assert!(parse_config_str("catalog:\n  root: ../../etc\n").is_err());
    }

    #[test]
    fn test_validate_conflicts_duplicate_location() {
        let config = LoadTrendConfig {
            selection: SelectionConfig {
                locations: vec!["VM".to_string(), "VM".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_conflicts(&config).is_err());
    }

    #[test]
    fn test_validate_conflicts_empty_scenarios() {
        let config = LoadTrendConfig {
            selection: SelectionConfig {
                scenarios: Vec::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_conflicts(&config).is_err());
    }

    #[test]
    fn test_validate_conflicts_dotted_extension() {
        let config = LoadTrendConfig {
            catalog: CatalogConfig {
                extension: ".csv".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_conflicts(&config).is_err());
    }

    #[test]
    fn test_validate_conflicts_marker_with_separator() {
        let config = LoadTrendConfig {
            catalog: CatalogConfig {
                cache_cleared_marker: "x/clear".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_conflicts(&config).is_err());
    }

    #[test]
    fn test_validate_conflicts_default_config() {
        assert!(validate_conflicts(&LoadTrendConfig::default()).is_ok());
    }

    #[test]
    fn test_parse_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_config(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, LoadTrendError::Config(_)));
    }

    #[test]
    fn test_parse_config_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loadtrend.yaml");
        std::fs::write(&path, "selection:\n  scenarios: [Roster]\n").unwrap();
        let config = parse_config(&path).unwrap();
        assert_eq!(config.selection.default_scenario(), Some("Roster"));
        assert_eq!(config.selection.locations, SelectionConfig::default().locations);
    }
}
