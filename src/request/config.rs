use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_TIMESTAMP_FIELD: &str = "@timestamp";

/// Field names of the indexed flow schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFields {
    #[serde(default = "default_timestamp")]
    pub timestamp: String,
}

fn default_timestamp() -> String {
    DEFAULT_TIMESTAMP_FIELD.to_string()
}

impl Default for SourceFields {
    fn default() -> Self {
        Self {
            timestamp: default_timestamp(),
        }
    }
}

/// Per-source settings that requests inherit when they do not override them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfiguration {
    #[serde(default)]
    pub fields: SourceFields,
    #[serde(default)]
    pub default_index: Vec<String>,
}

impl SourceConfiguration {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::JsonParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.fields.timestamp.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "fields.timestamp must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = SourceConfiguration::from_json("{}").unwrap();
        assert_eq!(config.fields.timestamp, "@timestamp");
        assert!(config.default_index.is_empty());
    }

    #[test]
    fn empty_timestamp_is_rejected() {
        let err = SourceConfiguration::from_json(r#"{"fields":{"timestamp":" "}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
