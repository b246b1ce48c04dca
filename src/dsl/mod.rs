//! The typed query document submitted to the search engine.
//!
//! Every node is a concrete struct or enum, so serialized key order is fixed
//! by field order and two equal documents always serialize to the same bytes.

pub mod aggregation;
pub mod query;

pub use aggregation::*;
pub use query::*;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryBody {
    pub aggregations: Aggregations,
    pub query: Query,
}

/// A complete top-N flow search request: index envelope plus body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopNFlowQuery {
    #[serde(rename = "allowNoIndices")]
    pub allow_no_indices: bool,
    pub index: Vec<String>,
    #[serde(rename = "ignoreUnavailable")]
    pub ignore_unavailable: bool,
    pub body: QueryBody,
    pub size: u64,
    pub track_total_hits: bool,
}

impl TopNFlowQuery {
    pub fn aggregations(&self) -> &Aggregations {
        &self.body.aggregations
    }

    pub fn bool_query(&self) -> &BoolQuery {
        &self.body.query.bool
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Renders a document the way debug inspection panels show it.
pub fn inspect_dsl<T: Serialize>(document: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(document)
}
