use std::sync::LazyLock;
use regex::Regex;
use crate::errors::LoadTrendError;

const DANGEROUS_PATTERNS: &[&str] = &[
    "../",
    "..\\",
    "\0",
];

/// One path component: no separators, no NUL, not a dot entry.
static SELECTION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^/\\\x00]+$").expect("valid selection name regex"));

pub fn validate_security_patterns(value: &serde_yaml::Value) -> Result<(), LoadTrendError> {
    check_value(value, &[])?;
    Ok(())
}

/// Reject scenario, location and file names that would leave the catalog root.
pub fn validate_selection_name(name: &str) -> Result<(), LoadTrendError> {
    if name == "." || name == ".." || !SELECTION_NAME.is_match(name) {
        return Err(LoadTrendError::InvalidSelection(format!(
            "'{}' is not a valid catalog entry name",
            name
        )));
    }
    Ok(())
}

fn check_value(value: &serde_yaml::Value, path: &[String]) -> Result<(), LoadTrendError> {
    match value {
        serde_yaml::Value::String(s) => {
            for pattern in DANGEROUS_PATTERNS {
                if s.contains(pattern) {
                    let path_str = if path.is_empty() { "root".to_string() } else { path.join(".") };
                    return Err(LoadTrendError::Config(
                        format!("Dangerous pattern '{}' found at config path: {}", pattern.escape_default(), path_str)
                    ));
                }
            }
            Ok(())
        }
        serde_yaml::Value::Mapping(map) => {
            for (k, v) in map {
                let key = k.as_str().unwrap_or("unknown").to_string();
                let mut new_path = path.to_vec();
                new_path.push(key);
                check_value(v, &new_path)?;
            }
            Ok(())
        }
        serde_yaml::Value::Sequence(seq) => {
            for (i, v) in seq.iter().enumerate() {
                let mut new_path = path.to_vec();
                new_path.push(format!("[{}]", i));
                check_value(v, &new_path)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
