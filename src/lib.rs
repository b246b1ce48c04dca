//! # flowquery - Top-N Network Flow Query Builder
//!
//! **flowquery** builds the aggregation query that ranks network endpoints by traffic.
//! A request names a flow target (source, destination, client or server), a flow
//! direction, a sort metric, a page size, a time range and an optional filter; the
//! builder turns it into a typed search document ready to be serialized and sent
//! to the search engine.
//!
//! ## Core Workflow
//!
//! 1.  **Describe the request**: Fill a `FlowRequest` directly, or decode your own
//!     parameters and implement `IntoFlowRequest` for them.
//! 2.  **Build**: Create a `QueryBuilder` (optionally with a custom
//!     `FilterClauseCompiler`) and call `build`. Building is pure and deterministic.
//! 3.  **Submit**: Serialize the resulting `TopNFlowQuery` and send it with your own
//!     transport.
//! 4.  **Format**: Pass the engine's response to `format_response` to get typed
//!     flow edges and pager information.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowquery::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let request = FlowRequest {
//!         default_index: vec!["packetbeat-*".to_string()],
//!         filter_query: None,
//!         flow_direction: FlowDirection::BiDirectional,
//!         flow_target: FlowTarget::Client,
//!         sort: FlowSort { field: SortField::Packets, direction: Direction::Desc },
//!         pagination: Pagination::first_page(10, 5),
//!         timestamp_field_name: "@timestamp".to_string(),
//!         time_range: TimeRange { from: 0, to: 1_000 },
//!     };
//!
//!     let builder = QueryBuilder::default();
//!     let query = builder.build(&request)?;
//!     println!("{}", inspect_dsl(&query)?);
//!
//!     // ... send `query` to the engine, then:
//!     let response_json = r#"{"aggregations":{"top_n_flow_count":{"value":0}}}"#;
//!     let data = format_response(&request, &query, response_json)?;
//!     println!("{} flows", data.total_count);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod dsl;
pub mod error;
pub mod prelude;
pub mod request;
pub mod response;
pub mod taxonomy;
