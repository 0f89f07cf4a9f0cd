use rota_scheduling_environment::calendar::DutyDate;
use rota_scheduling_environment::member::MemberId;
use tracing::Level;
use tracing::event;

use crate::AssignmentMap;

/// Distribution for the ranked path. Dates go around the externally
/// computed turn order cyclically. Availability rules and per-period caps
/// are NOT re-checked here; the provider owns fairness on this path and
/// the asymmetry with the greedy path is deliberate.
pub fn distribute_round_robin(turn_order: &[MemberId], dates: &[DutyDate]) -> AssignmentMap {
    let mut assignments = AssignmentMap::new();

    if turn_order.is_empty() {
        event!(Level::TRACE, "empty turn order, nothing to distribute");
        return assignments;
    }

    for (index, duty_date) in dates.iter().enumerate() {
        let member_id = &turn_order[index % turn_order.len()];
        assignments.insert(*duty_date, member_id.clone());
    }

    assignments
}
