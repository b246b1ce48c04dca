use crate::error::QueryBuildError;
use crate::request::FilterQuery;
use serde_json::Value;

/// Defines the contract for turning a request's filter query into boolean filter clauses.
///
/// Implementations must be pure and keep clause order stable.
pub trait FilterClauseCompiler: Send + Sync {
    fn name(&self) -> &str;
    fn compile(&self, filter_query: Option<&FilterQuery>) -> Result<Vec<Value>, QueryBuildError>;
}

/// The default compiler: a filter query is one already-built boolean clause,
/// either as JSON text or as a decoded value.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFilterCompiler;

impl FilterClauseCompiler for JsonFilterCompiler {
    fn name(&self) -> &str {
        "json"
    }

    fn compile(&self, filter_query: Option<&FilterQuery>) -> Result<Vec<Value>, QueryBuildError> {
        match filter_query {
            None => Ok(Vec::new()),
            Some(FilterQuery::Text(text)) if text.trim().is_empty() => Ok(Vec::new()),
            Some(FilterQuery::Text(text)) => serde_json::from_str(text)
                .map(|clause| vec![clause])
                .map_err(|e| {
                    QueryBuildError::MalformedInput(format!("filterQuery is not valid JSON: {}", e))
                }),
            Some(FilterQuery::Structured(value)) => Ok(vec![value.clone()]),
        }
    }
}
