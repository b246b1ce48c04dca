//! Common test utilities for building flow requests and responses.
use flowquery::prelude::*;

/// A bi-directional client request sorted by packets, 10 rows, no filter.
#[allow(dead_code)]
pub fn create_client_request() -> FlowRequest {
    FlowRequest {
        default_index: vec!["flows-*".to_string()],
        filter_query: None,
        flow_direction: FlowDirection::BiDirectional,
        flow_target: FlowTarget::Client,
        sort: FlowSort {
            field: SortField::Packets,
            direction: Direction::Desc,
        },
        pagination: Pagination {
            active_page: 0,
            cursor_start: 0,
            fake_possible_count: 50,
            query_size: 10,
        },
        timestamp_field_name: "@timestamp".to_string(),
        time_range: TimeRange { from: 0, to: 1000 },
    }
}

/// Same as [`create_client_request`] with the given direction and target.
#[allow(dead_code)]
pub fn create_request(flow_direction: FlowDirection, flow_target: FlowTarget) -> FlowRequest {
    FlowRequest {
        flow_direction,
        flow_target,
        ..create_client_request()
    }
}

/// Every direction/target combination.
#[allow(dead_code)]
pub fn all_combinations() -> Vec<(FlowDirection, FlowTarget)> {
    FlowDirection::ALL
        .into_iter()
        .flat_map(|d| FlowTarget::ALL.into_iter().map(move |t| (d, t)))
        .collect()
}

/// Builds with the default builder and returns the JSON tree.
#[allow(dead_code)]
pub fn build_json(request: &FlowRequest) -> serde_json::Value {
    QueryBuilder::default()
        .build(request)
        .expect("Failed to build query")
        .to_json()
        .expect("Failed to serialize query")
}

/// The wire form the network page posts.
#[allow(dead_code)]
pub const UNI_SOURCE_PARAMS_JSON: &str = r#"{
    "defaultIndex": ["packetbeat-*", "filebeat-*"],
    "filterQuery": "{\"bool\":{\"filter\":[{\"match_phrase\":{\"host.name\":\"edge-1\"}}]}}",
    "flowDirection": "uniDirectional",
    "flowTarget": "source",
    "sort": { "field": "bytes", "direction": "desc" },
    "pagination": { "activePage": 1, "cursorStart": 2, "fakePossibleCount": 3, "querySize": 4 },
    "timerange": { "from": 1556884800000, "to": 1556971200000 }
}"#;

/// Four uni-directional source buckets, total cardinality 9.
#[allow(dead_code)]
pub const UNI_SOURCE_RESPONSE_JSON: &str = r#"{
    "took": 12,
    "timed_out": false,
    "hits": { "max_score": null, "hits": [] },
    "aggregations": {
        "top_n_flow_count": { "value": 9 },
        "top_uni_flow": {
            "buckets": [
                {
                    "key": "10.0.0.1", "doc_count": 40,
                    "bytes": { "value": 5000 }, "packets": { "value": 50 }, "ip_count": { "value": 3 },
                    "direction": { "buckets": [ { "key": "outbound", "doc_count": 40 } ] },
                    "domain": { "buckets": [
                        { "key": "a.example.com", "doc_count": 3, "timestamp": { "value": 1556971100000 } },
                        { "key": "b.example.com", "doc_count": 1, "timestamp": { "value": 1556971000000 } }
                    ] }
                },
                {
                    "key": "10.0.0.2", "doc_count": 20,
                    "bytes": { "value": 4000 }, "packets": { "value": 40 }, "ip_count": { "value": 2 },
                    "direction": { "buckets": [] },
                    "domain": { "buckets": [] }
                },
                {
                    "key": "10.0.0.3", "doc_count": 10,
                    "bytes": { "value": 3000 }, "packets": { "value": 30 }, "ip_count": { "value": 1 },
                    "direction": { "buckets": [ { "key": "inbound", "doc_count": 6 }, { "key": "internal", "doc_count": 4 } ] },
                    "domain": { "buckets": [ { "key": "c.example.com", "doc_count": 10 } ] }
                },
                {
                    "key": "10.0.0.4", "doc_count": 5,
                    "bytes": { "value": null }, "packets": { "value": 20 }, "ip_count": { "value": 1 },
                    "direction": { "buckets": [] },
                    "domain": { "buckets": [] }
                }
            ]
        }
    }
}"#;
