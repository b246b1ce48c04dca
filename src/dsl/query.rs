use serde::Serialize;
use std::collections::BTreeMap;

/// The `query` node of a top-N flow search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    pub bool: BoolQuery,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoolQuery {
    pub filter: Vec<FilterClause>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_not: Option<Vec<FilterClause>>,
}

/// Inclusive range bounds for the time field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeBounds {
    pub gte: i64,
    pub lte: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExistsQuery {
    pub field: String,
}

/// One entry of a boolean `filter` or `must_not` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterClause {
    /// Keyed by the configured timestamp field, so it is a single-entry map.
    Range(BTreeMap<String, RangeBounds>),
    Exists(ExistsQuery),
    /// A clause produced by the filter-clause compiler, passed through verbatim.
    #[serde(untagged)]
    Compiled(serde_json::Value),
}

impl FilterClause {
    pub fn range(field: &str, gte: i64, lte: i64) -> Self {
        FilterClause::Range(BTreeMap::from([(field.to_string(), RangeBounds { gte, lte })]))
    }

    pub fn exists(field: impl Into<String>) -> Self {
        FilterClause::Exists(ExistsQuery {
            field: field.into(),
        })
    }

    /// The field of an `exists` clause, if this is one.
    pub fn exists_field(&self) -> Option<&str> {
        match self {
            FilterClause::Exists(ExistsQuery { field }) => Some(field),
            _ => None,
        }
    }
}
