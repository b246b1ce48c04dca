use thiserror::Error;

/// Errors that can occur while building a top-N flow query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryBuildError {
    /// A name outside one of the closed enums reached the field taxonomy.
    /// This signals a mismatch between the caller and this crate, never a data condition.
    #[error("Taxonomy violation: '{value}' is not a valid {taxonomy}")]
    TaxonomyViolation {
        taxonomy: &'static str,
        value: String,
    },

    #[error("Malformed flow request: {0}")]
    MalformedInput(String),
}

/// Errors that can occur when reading an aggregation response back into flow edges.
#[derive(Error, Debug, Clone)]
pub enum ResponseError {
    #[error("Failed to parse search response JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to render inspect output: {0}")]
    InspectError(String),
}

/// Errors that can occur while loading the source configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration JSON: {0}")]
    JsonParseError(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}
