use crate::dsl::FilterClause;
use crate::taxonomy::{FlowDirection, FlowTarget};

/// Uni-directional records only carry one side, so paired records are excluded.
pub(super) fn uni_directional_must_not(flow_direction: FlowDirection) -> Option<Vec<FilterClause>> {
    match flow_direction {
        FlowDirection::UniDirectional => Some(vec![FilterClause::exists("destination.bytes")]),
        FlowDirection::BiDirectional => None,
    }
}

/// Bi-directional records must carry byte counts for both ends of the target's pair.
pub(super) fn bi_directional_filters(
    flow_direction: FlowDirection,
    flow_target: FlowTarget,
) -> Vec<FilterClause> {
    match (flow_direction, flow_target) {
        (FlowDirection::UniDirectional, _) => Vec::new(),
        (FlowDirection::BiDirectional, FlowTarget::Source | FlowTarget::Destination) => vec![
            FilterClause::exists("source.bytes"),
            FilterClause::exists("destination.bytes"),
        ],
        (FlowDirection::BiDirectional, FlowTarget::Client | FlowTarget::Server) => vec![
            FilterClause::exists("client.bytes"),
            FilterClause::exists("server.bytes"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_target_pairs_with_client() {
        let fields: Vec<_> = bi_directional_filters(FlowDirection::BiDirectional, FlowTarget::Server)
            .iter()
            .filter_map(|c| c.exists_field().map(str::to_string))
            .collect();
        assert_eq!(fields, vec!["client.bytes", "server.bytes"]);
    }

    #[test]
    fn uni_directional_adds_no_existence_filters() {
        for target in FlowTarget::ALL {
            assert!(bi_directional_filters(FlowDirection::UniDirectional, target).is_empty());
        }
        assert!(uni_directional_must_not(FlowDirection::BiDirectional).is_none());
    }
}
