use serde::Deserialize;
use serde::Serialize;

/// Per-period assignment caps. An absent cap means unlimited for that
/// period. The week/month counters the caps are compared against live with
/// the engine, not here.
#[derive(Eq, PartialEq, Debug, Serialize, Deserialize, Clone, Default)]
pub struct AssignmentLimits {
    pub max_shifts_per_week: Option<u32>,
    pub max_shifts_per_month: Option<u32>,
}

impl AssignmentLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn week_cap_reached(&self, shifts_this_week: u32) -> bool {
        self.max_shifts_per_week
            .is_some_and(|cap| shifts_this_week >= cap)
    }

    pub fn month_cap_reached(&self, shifts_this_month: u32) -> bool {
        self.max_shifts_per_month
            .is_some_and(|cap| shifts_this_month >= cap)
    }
}
