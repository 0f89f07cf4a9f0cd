pub mod availability;
pub mod limits;

use std::fmt;
use std::fmt::Display;

use serde::Deserialize;
use serde::Serialize;

use self::availability::Availability;
use self::availability::WeekdayRule;
use self::limits::AssignmentLimits;

#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct MemberId(pub String);

impl MemberId {
    pub fn new(member_id: impl Into<String>) -> Self {
        MemberId(member_id.into())
    }
}

impl Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate for duty assignment. Read-only during a scheduling run; the
/// running counters live with the engine and are rebuilt on every run.
///
/// `historical_points` is the carried-over fairness score, set externally
/// before each run. Lower means the member is owed duties.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Member {
    pub id: MemberId,
    pub historical_points: f64,
    pub availability: Availability,
    pub limits: AssignmentLimits,
}

impl Member {
    pub fn builder(id: MemberId) -> MemberBuilder {
        MemberBuilder {
            id,
            historical_points: 0.0,
            availability: Availability::default(),
            limits: AssignmentLimits::default(),
        }
    }
}

pub struct MemberBuilder {
    id: MemberId,
    historical_points: f64,
    availability: Availability,
    limits: AssignmentLimits,
}

impl MemberBuilder {
    pub fn build(self) -> Member {
        Member {
            id: self.id,
            historical_points: self.historical_points,
            availability: self.availability,
            limits: self.limits,
        }
    }

    pub fn historical_points(mut self, historical_points: f64) -> Self {
        self.historical_points = historical_points;
        self
    }

    pub fn never_available(mut self, rule: WeekdayRule) -> Self {
        self.availability.never_available.push(rule);
        self
    }

    pub fn preferred_time(mut self, rule: WeekdayRule) -> Self {
        self.availability.preferred_times.push(rule);
        self
    }

    pub fn limits(mut self, limits: AssignmentLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn max_shifts_per_week(mut self, cap: u32) -> Self {
        self.limits.max_shifts_per_week = Some(cap);
        self
    }

    pub fn max_shifts_per_month(mut self, cap: u32) -> Self {
        self.limits.max_shifts_per_month = Some(cap);
        self
    }
}
