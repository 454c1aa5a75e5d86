//! Detect fields missing from an existing configuration file.
//!
//! Missing optional fields are filled with defaults on load; `config --check`
//! reports them so the file can be updated explicitly.

use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};

pub const KNOWN_FIELDS: [&str; 6] = [
    "store",
    "drivers",
    "cache_ttl_secs",
    "input_policy",
    "currency_symbol",
    "date_labels",
];

pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("invalid YAML: {e}")))?;

    let empty = Mapping::new();
    let map = match &yaml {
        Value::Mapping(m) => m,
        Value::Null => &empty,
        _ => {
            return Err(AppError::Config(
                "configuration file is not a mapping".into(),
            ));
        }
    };

    Ok(KNOWN_FIELDS
        .iter()
        .copied()
        .filter(|f| !map.contains_key(Value::String(f.to_string())))
        .collect())
}

/// Field names present in the file that the program does not know.
pub fn unknown_fields(content: &str) -> AppResult<Vec<String>> {
    let yaml: Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("invalid YAML: {e}")))?;

    let Value::Mapping(map) = yaml else {
        return Ok(Vec::new());
    };

    Ok(map
        .keys()
        .filter_map(|k| k.as_str())
        .filter(|k| !KNOWN_FIELDS.contains(k))
        .map(str::to_string)
        .collect())
}
