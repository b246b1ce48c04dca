//! Tests for reading aggregation responses back into flow edges.
mod common;
use common::*;
use flowquery::prelude::*;
use flowquery::response::TopNFlowResponse;

fn uni_source_request(cursor_start: usize, query_size: usize, fake_possible_count: u64) -> FlowRequest {
    FlowRequest {
        pagination: Pagination {
            active_page: 0,
            cursor_start,
            fake_possible_count,
            query_size,
        },
        ..create_request(FlowDirection::UniDirectional, FlowTarget::Source)
    }
}

fn parse(json: &str) -> TopNFlowResponse {
    serde_json::from_str(json).expect("Failed to parse response fixture")
}

#[test]
fn test_formats_buckets_into_edges() {
    let request = uni_source_request(0, 10, 50);
    let data = format_parsed(&request, &parse(UNI_SOURCE_RESPONSE_JSON));

    assert_eq!(data.edges.len(), 4);
    assert_eq!(data.total_count, 9);

    let first = &data.edges[0];
    assert_eq!(first.node.id, "10.0.0.1");
    assert_eq!(first.node.flow_target, FlowTarget::Source);
    assert_eq!(first.node.endpoint.ip, "10.0.0.1");
    assert_eq!(first.node.endpoint.domain, vec!["a.example.com", "b.example.com"]);
    assert_eq!(first.node.endpoint.count, 3);
    assert_eq!(first.node.network.bytes, 5000);
    assert_eq!(first.node.network.packets, 50);
    assert_eq!(first.node.network.direction, vec!["outbound"]);
    assert_eq!(first.cursor.value, "10.0.0.1");
    assert!(first.cursor.tiebreaker.is_none());

    // A null metric reads as zero.
    assert_eq!(data.edges[3].node.network.bytes, 0);
    assert_eq!(data.edges[2].node.network.direction, vec!["inbound", "internal"]);
}

#[test]
fn test_cursor_start_skips_earlier_buckets() {
    let request = uni_source_request(2, 4, 50);
    let data = format_parsed(&request, &parse(UNI_SOURCE_RESPONSE_JSON));

    let ips: Vec<_> = data.edges.iter().map(|e| e.node.endpoint.ip.as_str()).collect();
    assert_eq!(ips, vec!["10.0.0.3", "10.0.0.4"]);

    let past_end = uni_source_request(10, 20, 50);
    assert!(format_parsed(&past_end, &parse(UNI_SOURCE_RESPONSE_JSON)).edges.is_empty());
}

#[test]
fn test_query_size_marks_the_end_of_the_page() {
    // cursor_start 1 with query_size 2 is a one-row page, even when more buckets came back.
    let request = uni_source_request(1, 2, 50);
    let data = format_parsed(&request, &parse(UNI_SOURCE_RESPONSE_JSON));

    let ips: Vec<_> = data.edges.iter().map(|e| e.node.endpoint.ip.as_str()).collect();
    assert_eq!(ips, vec!["10.0.0.2"]);

    let inverted = uni_source_request(3, 2, 50);
    assert!(format_parsed(&inverted, &parse(UNI_SOURCE_RESPONSE_JSON)).edges.is_empty());
}

#[test]
fn test_fake_total_count_caps_the_pager() {
    let capped = format_parsed(&uni_source_request(0, 10, 5), &parse(UNI_SOURCE_RESPONSE_JSON));
    assert_eq!(capped.page_info.fake_total_count, 5);
    assert!(capped.page_info.show_more_pages_indicator);

    let uncapped = format_parsed(&uni_source_request(0, 10, 50), &parse(UNI_SOURCE_RESPONSE_JSON));
    assert_eq!(uncapped.page_info.fake_total_count, 9);
    assert!(!uncapped.page_info.show_more_pages_indicator);
}

#[test]
fn test_reads_the_aggregation_matching_the_direction() {
    // The fixture only has `top_uni_flow`; a bi-directional request sees no buckets.
    let request = create_request(FlowDirection::BiDirectional, FlowTarget::Source);
    let data = format_parsed(&request, &parse(UNI_SOURCE_RESPONSE_JSON));
    assert!(data.edges.is_empty());
    assert_eq!(data.total_count, 9);
}

#[test]
fn test_empty_response_formats_to_nothing() {
    let request = create_client_request();
    let data = format_parsed(&request, &parse(r#"{"took": 1}"#));
    assert!(data.edges.is_empty());
    assert_eq!(data.total_count, 0);
    assert!(!data.page_info.show_more_pages_indicator);
}

#[test]
fn test_format_response_fills_inspect() {
    let request = uni_source_request(0, 10, 50);
    let query = QueryBuilder::default().build(&request).unwrap();
    let data = format_response(&request, &query, UNI_SOURCE_RESPONSE_JSON).unwrap();

    assert_eq!(data.inspect.dsl, vec![inspect_dsl(&query).unwrap()]);
    assert_eq!(data.inspect.response.len(), 1);
    assert!(data.inspect.response[0].contains("top_uni_flow"));
}

#[test]
fn test_invalid_response_json_is_an_error() {
    let request = create_client_request();
    let query = QueryBuilder::default().build(&request).unwrap();
    let result = format_response(&request, &query, "{\"aggregations\": [");
    assert!(matches!(result, Err(ResponseError::JsonParseError(_))));
}
