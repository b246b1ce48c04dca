use serde::Deserialize;

/// The subset of a search response that a top-N flow query produces.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopNFlowResponse {
    #[serde(default)]
    pub aggregations: Option<ResponseAggregations>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseAggregations {
    #[serde(default)]
    pub top_n_flow_count: Option<MetricValue>,
    #[serde(default)]
    pub top_uni_flow: Option<BucketList<FlowBucket>>,
    #[serde(default)]
    pub top_bi_flow: Option<BucketList<FlowBucket>>,
}

/// A single-value metric result. The engine sends `null` for empty buckets.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MetricValue {
    #[serde(default)]
    pub value: Option<f64>,
}

impl MetricValue {
    pub fn as_count(metric: Option<&MetricValue>) -> u64 {
        metric
            .and_then(|m| m.value)
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(|v| v.round() as u64)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BucketList<B> {
    #[serde(default = "Vec::new")]
    pub buckets: Vec<B>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyBucket {
    pub key: String,
    #[serde(default)]
    pub doc_count: u64,
}

/// One top-N bucket with its sub-aggregation results.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowBucket {
    pub key: String,
    #[serde(default)]
    pub doc_count: u64,
    #[serde(default)]
    pub bytes: Option<MetricValue>,
    #[serde(default)]
    pub packets: Option<MetricValue>,
    #[serde(default)]
    pub ip_count: Option<MetricValue>,
    #[serde(default)]
    pub direction: Option<BucketList<KeyBucket>>,
    #[serde(default)]
    pub domain: Option<BucketList<KeyBucket>>,
}

impl FlowBucket {
    pub fn direction_keys(&self) -> impl Iterator<Item = &str> {
        self.direction
            .iter()
            .flat_map(|list| list.buckets.iter().map(|b| b.key.as_str()))
    }

    pub fn domain_keys(&self) -> impl Iterator<Item = &str> {
        self.domain
            .iter()
            .flat_map(|list| list.buckets.iter().map(|b| b.key.as_str()))
    }
}
