use std::fmt;
use std::fmt::Display;

use rota_scheduling_environment::OrganizationId;
use rota_scheduling_environment::StableId;
use rota_scheduling_environment::calendar::DutyDate;
use rota_scheduling_environment::member::MemberId;
use serde::Deserialize;
use serde::Serialize;

/// Name of the external ranking algorithm the provider should run. Opaque
/// to the engine; it is only forwarded.
#[derive(Eq, PartialEq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct RankingAlgorithm(pub String);

impl RankingAlgorithm {
    pub fn new(algorithm: impl Into<String>) -> Self {
        RankingAlgorithm(algorithm.into())
    }
}

impl Display for RankingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request for `computeTurnOrder`. Field names follow the provider's wire
/// format; dates travel as `YYYY-MM-DD` strings.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TurnOrderRequest {
    pub stable_id: StableId,
    pub organization_id: OrganizationId,
    pub algorithm: RankingAlgorithm,
    pub member_ids: Vec<MemberId>,
    pub selection_start_date: DutyDate,
    pub selection_end_date: DutyDate,
}

/// One entry of the returned turn order. Turns without a member identifier
/// do occur and are dropped before distribution.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub member_id: Option<MemberId>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TurnOrderResponse {
    pub turns: Vec<Turn>,
}

impl TurnOrderResponse {
    /// The usable priority order: identifiers in turn order, turns without
    /// an identifier filtered out.
    pub fn member_ids(self) -> Vec<MemberId> {
        self.turns
            .into_iter()
            .filter_map(|turn| turn.member_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_request_serializes_with_wire_names() {
        let request = TurnOrderRequest {
            stable_id: StableId::new("s1"),
            organization_id: OrganizationId::new("o1"),
            algorithm: RankingAlgorithm::new("least-recently-served"),
            member_ids: vec![MemberId::new("u1"), MemberId::new("u2")],
            selection_start_date: DutyDate::from_str("2024-03-04").unwrap(),
            selection_end_date: DutyDate::from_str("2024-03-10").unwrap(),
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["stableId"], "s1");
        assert_eq!(json["organizationId"], "o1");
        assert_eq!(json["selectionStartDate"], "2024-03-04");
        assert_eq!(json["selectionEndDate"], "2024-03-10");
    }

    #[test]
    fn test_turns_without_member_ids_are_dropped() {
        let response: TurnOrderResponse = serde_json::from_str(
            r#"{"turns":[{"memberId":"u1"},{"memberId":null},{"memberId":"u2"}]}"#,
        )
        .unwrap();

        assert_eq!(response.member_ids(), vec![
            MemberId::new("u1"),
            MemberId::new("u2")
        ]);
    }
}
