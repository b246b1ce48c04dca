//! The closed field taxonomy for network flows.
//!
//! Every enum here is matched exhaustively wherever it is consumed. Adding a
//! variant is a compile error until every mapping that depends on it is updated.
//! Text decoding goes through `FromStr`, which is the only place an unknown name
//! can surface, as [`QueryBuildError::TaxonomyViolation`].

use crate::error::QueryBuildError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The endpoint role around which traffic is aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum FlowTarget {
    Source,
    Destination,
    Client,
    Server,
}

impl FlowTarget {
    pub const ALL: [FlowTarget; 4] = [
        FlowTarget::Source,
        FlowTarget::Destination,
        FlowTarget::Client,
        FlowTarget::Server,
    ];

    /// The field prefix used in the flow schema, e.g. `source` in `source.ip`.
    pub fn as_str(self) -> &'static str {
        match self {
            FlowTarget::Source => "source",
            FlowTarget::Destination => "destination",
            FlowTarget::Client => "client",
            FlowTarget::Server => "server",
        }
    }

    /// The other end of the flow: source <-> destination, client <-> server.
    pub fn opposite(self) -> FlowTarget {
        match self {
            FlowTarget::Source => FlowTarget::Destination,
            FlowTarget::Destination => FlowTarget::Source,
            FlowTarget::Client => FlowTarget::Server,
            FlowTarget::Server => FlowTarget::Client,
        }
    }

    /// Builds `{target}.{suffix}`.
    pub fn field(self, suffix: &str) -> String {
        format!("{}.{}", self.as_str(), suffix)
    }
}

/// Whether records carry single-ended or paired byte/packet counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum FlowDirection {
    #[serde(rename = "uniDirectional")]
    UniDirectional,
    #[serde(rename = "biDirectional")]
    BiDirectional,
}

impl FlowDirection {
    pub const ALL: [FlowDirection; 2] = [FlowDirection::UniDirectional, FlowDirection::BiDirectional];

    pub fn as_str(self) -> &'static str {
        match self {
            FlowDirection::UniDirectional => "uniDirectional",
            FlowDirection::BiDirectional => "biDirectional",
        }
    }
}

/// Sort direction, serialized as the engine expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Asc, Direction::Desc];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// The metric the top-N buckets are ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum SortField {
    #[serde(rename = "bytes")]
    Bytes,
    #[serde(rename = "packets")]
    Packets,
    #[serde(rename = "ipCount")]
    IpCount,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Bytes, SortField::Packets, SortField::IpCount];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Bytes => "bytes",
            SortField::Packets => "packets",
            SortField::IpCount => "ipCount",
        }
    }
}

/// A sort specification for the top-N buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowSort {
    pub field: SortField,
    pub direction: Direction,
}

fn violation(taxonomy: &'static str, value: &str) -> QueryBuildError {
    QueryBuildError::TaxonomyViolation {
        taxonomy,
        value: value.to_string(),
    }
}

/// Implements `FromStr`, `TryFrom<String>` and `Display` from the enum's `ALL` table,
/// so the accepted names always match what `as_str` emits.
macro_rules! impl_taxonomy_text {
    ( $( ($ty:ident, $taxonomy:expr) ),* $(,)? ) => {
        $(
            impl FromStr for $ty {
                type Err = QueryBuildError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $ty::ALL
                        .into_iter()
                        .find(|variant| variant.as_str() == s)
                        .ok_or_else(|| violation($taxonomy, s))
                }
            }

            impl TryFrom<String> for $ty {
                type Error = QueryBuildError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_taxonomy_text! {
    (FlowTarget, "flow target"),
    (FlowDirection, "flow direction"),
    (Direction, "sort direction"),
    (SortField, "sort field"),
}
