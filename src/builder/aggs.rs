use crate::dsl::{
    Aggregations, CardinalityAgg, DirectionalAgg, DomainAgg, DomainSubAggs, FieldRef, MaxAgg,
    SumAgg, Terms, TermsAgg, TermsOrder, TopFlowAgg, TopFlowSubAggs,
};
use crate::taxonomy::{Direction, FlowDirection, FlowSort, FlowTarget, SortField};

/// The per-bucket metric used to order top-N buckets.
pub fn sort_order_key(sort: FlowSort) -> TermsOrder {
    match sort.field {
        SortField::Bytes => TermsOrder::Bytes(sort.direction),
        SortField::Packets => TermsOrder::Packets(sort.direction),
        SortField::IpCount => TermsOrder::IpCount(sort.direction),
    }
}

pub(super) fn count_agg(flow_target: FlowTarget) -> CardinalityAgg {
    CardinalityAgg {
        cardinality: FieldRef::new(flow_target.field("ip")),
    }
}

pub(super) fn aggregations(
    flow_direction: FlowDirection,
    flow_target: FlowTarget,
    sort: FlowSort,
    query_size: usize,
) -> Aggregations {
    Aggregations {
        top_n_flow_count: count_agg(flow_target),
        top_flow: directional_agg(flow_direction, flow_target, sort, query_size),
    }
}

fn directional_agg(
    flow_direction: FlowDirection,
    flow_target: FlowTarget,
    sort: FlowSort,
    query_size: usize,
) -> DirectionalAgg {
    match flow_direction {
        FlowDirection::UniDirectional => DirectionalAgg::Uni(top_flow_agg(
            flow_target,
            sort,
            query_size,
            "network.bytes".to_string(),
            "network.packets".to_string(),
        )),
        FlowDirection::BiDirectional => DirectionalAgg::Bi(top_flow_agg(
            flow_target,
            sort,
            query_size,
            flow_target.field("bytes"),
            flow_target.field("packets"),
        )),
    }
}

fn top_flow_agg(
    flow_target: FlowTarget,
    sort: FlowSort,
    query_size: usize,
    bytes_field: String,
    packets_field: String,
) -> TopFlowAgg {
    TopFlowAgg {
        terms: Terms {
            field: flow_target.field("ip"),
            size: Some(query_size),
            order: Some(sort_order_key(sort)),
        },
        aggs: TopFlowSubAggs {
            bytes: SumAgg {
                sum: FieldRef::new(bytes_field),
            },
            direction: TermsAgg::field("network.direction"),
            domain: domain_agg(flow_target),
            ip_count: CardinalityAgg {
                cardinality: FieldRef::new(flow_target.opposite().field("ip")),
            },
            packets: SumAgg {
                sum: FieldRef::new(packets_field),
            },
        },
    }
}

fn domain_agg(flow_target: FlowTarget) -> DomainAgg {
    DomainAgg {
        terms: Terms {
            field: flow_target.field("domain"),
            size: None,
            order: Some(TermsOrder::Timestamp(Direction::Desc)),
        },
        aggs: DomainSubAggs {
            timestamp: MaxAgg {
                max: FieldRef::new("@timestamp"),
            },
        },
    }
}
