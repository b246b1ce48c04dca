use crate::error::QueryBuildError;
use crate::taxonomy::{FlowDirection, FlowSort, FlowTarget};
use serde::{Deserialize, Serialize};

/// The filter the user typed or a pre-built structured filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterQuery {
    /// A JSON-encoded boolean query, as sent by the search bar.
    Text(String),
    /// An already decoded boolean query.
    Structured(serde_json::Value),
}

/// Inclusive time bounds in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: i64,
    pub to: i64,
}

/// Paging state shared by the query (`query_size`) and the response formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub active_page: usize,
    pub cursor_start: usize,
    pub fake_possible_count: u64,
    /// Upper bound on the number of top-N buckets requested from the engine.
    /// Also the end of the page window: a page holds rows `cursor_start..query_size`.
    pub query_size: usize,
}

impl Pagination {
    /// First page of `limit` rows, with room to show `pages` pages in the pager.
    pub fn first_page(limit: usize, pages: u64) -> Self {
        Self {
            active_page: 0,
            cursor_start: 0,
            fake_possible_count: (limit as u64).saturating_mul(pages),
            query_size: limit,
        }
    }
}

/// Everything needed to build one top-N flow query.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRequest {
    pub default_index: Vec<String>,
    pub filter_query: Option<FilterQuery>,
    pub flow_direction: FlowDirection,
    pub flow_target: FlowTarget,
    pub sort: FlowSort,
    pub pagination: Pagination,
    pub timestamp_field_name: String,
    pub time_range: TimeRange,
}

impl FlowRequest {
    /// Rejects structurally invalid requests before any construction happens.
    pub fn validate(&self) -> Result<(), QueryBuildError> {
        if self.pagination.query_size == 0 {
            return Err(QueryBuildError::MalformedInput(
                "querySize must be a positive integer".to_string(),
            ));
        }
        if self.time_range.from > self.time_range.to {
            return Err(QueryBuildError::MalformedInput(format!(
                "time range is inverted: from {} is after to {}",
                self.time_range.from, self.time_range.to
            )));
        }
        if self.timestamp_field_name.trim().is_empty() {
            return Err(QueryBuildError::MalformedInput(
                "timestamp field name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
