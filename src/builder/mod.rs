use crate::dsl::{BoolQuery, FilterClause, Query, QueryBody, TopNFlowQuery};
use crate::error::QueryBuildError;
use crate::request::FlowRequest;

mod aggs;
pub mod clauses;
mod filters;

pub use aggs::sort_order_key;
use clauses::{FilterClauseCompiler, JsonFilterCompiler};

/// Turns a [`FlowRequest`] into a [`TopNFlowQuery`].
///
/// The builder holds no per-call state; one instance can be shared across threads
/// and every call to [`QueryBuilder::build`] depends only on its argument.
pub struct QueryBuilder {
    filter_compiler: Box<dyn FilterClauseCompiler>,
}

pub struct QueryBuilderBuilder {
    filter_compiler: Box<dyn FilterClauseCompiler>,
}

impl QueryBuilderBuilder {
    pub fn new() -> Self {
        Self {
            filter_compiler: Box::new(JsonFilterCompiler),
        }
    }

    pub fn with_filter_compiler(mut self, compiler: Box<dyn FilterClauseCompiler>) -> Self {
        self.filter_compiler = compiler;
        self
    }

    pub fn build(self) -> QueryBuilder {
        QueryBuilder {
            filter_compiler: self.filter_compiler,
        }
    }
}

impl Default for QueryBuilderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        QueryBuilderBuilder::new().build()
    }
}

impl QueryBuilder {
    pub fn builder() -> QueryBuilderBuilder {
        QueryBuilderBuilder::new()
    }

    pub fn filter_compiler_name(&self) -> &str {
        self.filter_compiler.name()
    }

    /// Builds the top-N flow search for `request`.
    ///
    /// # Errors
    ///
    /// * `QueryBuildError::MalformedInput` if the request fails validation or its
    ///   filter query cannot be compiled. Nothing is constructed in that case.
    pub fn build(&self, request: &FlowRequest) -> Result<TopNFlowQuery, QueryBuildError> {
        request.validate()?;

        let mut filter: Vec<FilterClause> = self
            .filter_compiler
            .compile(request.filter_query.as_ref())?
            .into_iter()
            .map(FilterClause::Compiled)
            .collect();
        filter.push(FilterClause::range(
            &request.timestamp_field_name,
            request.time_range.from,
            request.time_range.to,
        ));
        filter.extend(filters::bi_directional_filters(
            request.flow_direction,
            request.flow_target,
        ));

        let aggregations = aggs::aggregations(
            request.flow_direction,
            request.flow_target,
            request.sort,
            request.pagination.query_size,
        );

        tracing::debug!(
            flow_direction = %request.flow_direction,
            flow_target = %request.flow_target,
            sort_field = %request.sort.field,
            query_size = request.pagination.query_size,
            filter_clauses = filter.len(),
            "built top-N flow query"
        );

        Ok(TopNFlowQuery {
            allow_no_indices: true,
            index: request.default_index.clone(),
            ignore_unavailable: true,
            body: QueryBody {
                aggregations,
                query: Query {
                    bool: BoolQuery {
                        filter,
                        must_not: filters::uni_directional_must_not(request.flow_direction),
                    },
                },
            },
            size: 0,
            track_total_hits: false,
        })
    }
}
