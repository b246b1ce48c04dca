//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the flowquery crate.

// Building
pub use crate::builder::clauses::{FilterClauseCompiler, JsonFilterCompiler};
pub use crate::builder::{QueryBuilder, sort_order_key};

// Request types and taxonomy
pub use crate::request::{
    FilterQuery, FlowRequest, FlowRequestParams, IntoFlowRequest, Pagination,
    SourceConfiguration, TimeRange,
};
pub use crate::taxonomy::{Direction, FlowDirection, FlowSort, FlowTarget, SortField};

// Query document
pub use crate::dsl::{DirectionalAgg, FilterClause, TermsOrder, TopNFlowQuery, inspect_dsl};

// Response formatting
pub use crate::response::{TopNFlowData, TopNFlowEdge, format_parsed, format_response};

// Error types
pub use crate::error::{ConfigError, QueryBuildError, ResponseError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
