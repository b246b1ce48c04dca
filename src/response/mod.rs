//! Reads a top-N flow aggregation response back into typed rows for the network table.

mod model;

pub use model::*;

use crate::dsl::{TopNFlowQuery, inspect_dsl};
use crate::error::ResponseError;
use crate::request::FlowRequest;
use crate::taxonomy::{FlowDirection, FlowTarget};
use itertools::Itertools;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointStats {
    pub ip: String,
    /// Observed domains, most recently seen first.
    pub domain: Vec<String>,
    /// Number of distinct peers on the opposite side of the flow.
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    pub bytes: u64,
    pub packets: u64,
    pub direction: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopNFlowItem {
    pub id: String,
    pub flow_target: FlowTarget,
    pub endpoint: EndpointStats,
    pub network: NetworkStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cursor {
    pub value: String,
    pub tiebreaker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopNFlowEdge {
    pub node: TopNFlowItem,
    pub cursor: Cursor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub active_page: usize,
    pub fake_total_count: u64,
    pub show_more_pages_indicator: bool,
}

/// The documents exchanged with the engine, kept for the inspect panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspect {
    pub dsl: Vec<String>,
    pub response: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopNFlowData {
    pub edges: Vec<TopNFlowEdge>,
    pub total_count: u64,
    pub page_info: PageInfo,
    pub inspect: Inspect,
}

/// Parses the raw response body and formats it for `request`.
pub fn format_response(
    request: &FlowRequest,
    dsl: &TopNFlowQuery,
    response_json: &str,
) -> Result<TopNFlowData, ResponseError> {
    let raw: serde_json::Value = serde_json::from_str(response_json)
        .map_err(|e| ResponseError::JsonParseError(e.to_string()))?;
    let response: TopNFlowResponse = serde_json::from_value(raw.clone())
        .map_err(|e| ResponseError::JsonParseError(e.to_string()))?;

    let render = |e: serde_json::Error| ResponseError::InspectError(e.to_string());
    let mut data = format_parsed(request, &response);
    data.inspect = Inspect {
        dsl: vec![inspect_dsl(dsl).map_err(render)?],
        response: vec![inspect_dsl(&raw).map_err(render)?],
    };
    Ok(data)
}

/// Formats an already decoded response. `inspect` is left empty.
pub fn format_parsed(request: &FlowRequest, response: &TopNFlowResponse) -> TopNFlowData {
    let aggregations = response.aggregations.as_ref();
    let buckets: &[FlowBucket] = aggregations
        .and_then(|aggs| match request.flow_direction {
            FlowDirection::UniDirectional => aggs.top_uni_flow.as_ref(),
            FlowDirection::BiDirectional => aggs.top_bi_flow.as_ref(),
        })
        .map(|list| list.buckets.as_slice())
        .unwrap_or_default();
    let total_count = MetricValue::as_count(aggregations.and_then(|aggs| aggs.top_n_flow_count.as_ref()));

    let pagination = &request.pagination;
    let edges = buckets
        .iter()
        .skip(pagination.cursor_start)
        .take(pagination.query_size.saturating_sub(pagination.cursor_start))
        .map(|bucket| format_edge(bucket, request.flow_target))
        .collect();

    let fake_total_count = pagination.fake_possible_count.min(total_count);

    TopNFlowData {
        edges,
        total_count,
        page_info: PageInfo {
            active_page: pagination.active_page,
            fake_total_count,
            show_more_pages_indicator: total_count > fake_total_count,
        },
        inspect: Inspect {
            dsl: Vec::new(),
            response: Vec::new(),
        },
    }
}

fn format_edge(bucket: &FlowBucket, flow_target: FlowTarget) -> TopNFlowEdge {
    TopNFlowEdge {
        node: TopNFlowItem {
            id: bucket.key.clone(),
            flow_target,
            endpoint: EndpointStats {
                ip: bucket.key.clone(),
                domain: bucket.domain_keys().unique().map(str::to_string).collect(),
                count: MetricValue::as_count(bucket.ip_count.as_ref()),
            },
            network: NetworkStats {
                bytes: MetricValue::as_count(bucket.bytes.as_ref()),
                packets: MetricValue::as_count(bucket.packets.as_ref()),
                direction: bucket.direction_keys().map(str::to_string).collect_vec(),
            },
        },
        cursor: Cursor {
            value: bucket.key.clone(),
            tiebreaker: None,
        },
    }
}
