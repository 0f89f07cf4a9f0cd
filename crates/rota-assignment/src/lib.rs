pub mod eligibility;
pub mod greedy;
pub mod options;
mod orchestrator;
pub mod round_robin;
pub mod scoring;
pub mod tracking;
pub mod turn_order;

use std::collections::BTreeMap;

use rota_scheduling_environment::calendar::DutyDate;
use rota_scheduling_environment::member::MemberId;

pub use self::options::AssignmentOptions;
pub use self::options::AssignmentStrategy;
pub use self::orchestrator::generate_assignments;
pub use self::turn_order::TurnOrderProvider;

/// The produced assignment: exactly one member per covered date. Dates for
/// which no eligible member existed are absent entirely, so a map smaller
/// than the requested date list is a normal outcome, not a failure.
pub type AssignmentMap = BTreeMap<DutyDate, MemberId>;
