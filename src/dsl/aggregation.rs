use crate::taxonomy::Direction;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRef {
    pub field: String,
}

impl FieldRef {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardinalityAgg {
    pub cardinality: FieldRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SumAgg {
    pub sum: FieldRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaxAgg {
    pub max: FieldRef,
}

/// A single-key bucket order, e.g. `{"packets": "desc"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TermsOrder {
    Bytes(Direction),
    Packets(Direction),
    IpCount(Direction),
    Timestamp(Direction),
}

impl TermsOrder {
    pub fn key(&self) -> &'static str {
        match self {
            TermsOrder::Bytes(_) => "bytes",
            TermsOrder::Packets(_) => "packets",
            TermsOrder::IpCount(_) => "ip_count",
            TermsOrder::Timestamp(_) => "timestamp",
        }
    }

    pub fn direction(&self) -> Direction {
        match *self {
            TermsOrder::Bytes(d)
            | TermsOrder::Packets(d)
            | TermsOrder::IpCount(d)
            | TermsOrder::Timestamp(d) => d,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Terms {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<TermsOrder>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermsAgg {
    pub terms: Terms,
}

impl TermsAgg {
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            terms: Terms {
                field: field.into(),
                size: None,
                order: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainSubAggs {
    pub timestamp: MaxAgg,
}

/// Latest observed domains per bucket, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainAgg {
    pub terms: Terms,
    pub aggs: DomainSubAggs,
}

/// Metrics computed for every top-N bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopFlowSubAggs {
    pub bytes: SumAgg,
    pub direction: TermsAgg,
    pub domain: DomainAgg,
    pub ip_count: CardinalityAgg,
    pub packets: SumAgg,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopFlowAgg {
    pub terms: Terms,
    pub aggs: TopFlowSubAggs,
}

/// The directional bucket aggregation. Exactly one is present per query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DirectionalAgg {
    #[serde(rename = "top_uni_flow")]
    Uni(TopFlowAgg),
    #[serde(rename = "top_bi_flow")]
    Bi(TopFlowAgg),
}

impl DirectionalAgg {
    pub const UNI_KEY: &'static str = "top_uni_flow";
    pub const BI_KEY: &'static str = "top_bi_flow";

    pub fn key(&self) -> &'static str {
        match self {
            DirectionalAgg::Uni(_) => Self::UNI_KEY,
            DirectionalAgg::Bi(_) => Self::BI_KEY,
        }
    }

    pub fn top_flow(&self) -> &TopFlowAgg {
        match self {
            DirectionalAgg::Uni(agg) | DirectionalAgg::Bi(agg) => agg,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregations {
    pub top_n_flow_count: CardinalityAgg,
    #[serde(flatten)]
    pub top_flow: DirectionalAgg,
}
