use super::config::SourceConfiguration;
use super::definition::{FilterQuery, FlowRequest, Pagination, TimeRange};
use crate::error::QueryBuildError;
use crate::taxonomy::{FlowDirection, FlowSort, FlowTarget};
use serde::Deserialize;

/// A trait for caller-side request formats that can be turned into a [`FlowRequest`].
///
/// Route handlers decode their own parameters and implement this to hand the
/// builder a fully populated request.
pub trait IntoFlowRequest {
    fn into_flow_request(
        self,
        config: &SourceConfiguration,
    ) -> Result<FlowRequest, QueryBuildError>;
}

/// The JSON wire form of a request, as posted by the network page.
///
/// Enum fields are decoded by name; an unknown name fails with a taxonomy violation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRequestParams {
    #[serde(default)]
    pub default_index: Vec<String>,
    #[serde(default)]
    pub filter_query: Option<FilterQuery>,
    pub flow_direction: String,
    pub flow_target: String,
    pub sort: SortParams,
    pub pagination: Pagination,
    #[serde(default)]
    pub timestamp_field_name: Option<String>,
    pub timerange: TimeRange,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SortParams {
    pub field: String,
    pub direction: String,
}

impl FlowRequestParams {
    pub fn from_json(json: &str) -> Result<Self, QueryBuildError> {
        serde_json::from_str(json).map_err(|e| QueryBuildError::MalformedInput(e.to_string()))
    }
}

impl IntoFlowRequest for FlowRequestParams {
    fn into_flow_request(
        self,
        config: &SourceConfiguration,
    ) -> Result<FlowRequest, QueryBuildError> {
        let flow_direction: FlowDirection = self.flow_direction.parse()?;
        let flow_target: FlowTarget = self.flow_target.parse()?;
        let sort = FlowSort {
            field: self.sort.field.parse()?,
            direction: self.sort.direction.parse()?,
        };

        let default_index = if self.default_index.is_empty() {
            config.default_index.clone()
        } else {
            self.default_index
        };
        let timestamp_field_name = self
            .timestamp_field_name
            .unwrap_or_else(|| config.fields.timestamp.clone());

        Ok(FlowRequest {
            default_index,
            filter_query: self.filter_query,
            flow_direction,
            flow_target,
            sort,
            pagination: self.pagination,
            timestamp_field_name,
            time_range: self.timerange,
        })
    }
}
