use std::fmt;
use std::fmt::Display;

use chrono::NaiveTime;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::EnumIter;

/// The recurring care tasks a stable hands out to its members.
#[derive(PartialEq, Eq, Hash, Serialize, Deserialize, Debug, Clone, Copy, EnumIter)]
pub enum DutyKind {
    MorningFeeding,
    EveningFeeding,
    Mucking,
    Turnout,
    BringIn,
    NightCheck,
}

impl Display for DutyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DutyKind::MorningFeeding => write!(f, "morning feeding"),
            DutyKind::EveningFeeding => write!(f, "evening feeding"),
            DutyKind::Mucking => write!(f, "mucking"),
            DutyKind::Turnout => write!(f, "turnout"),
            DutyKind::BringIn => write!(f, "bring in"),
            DutyKind::NightCheck => write!(f, "night check"),
        }
    }
}

/// One duty to be scheduled over a window of dates: what it is, when one
/// instance starts, and how many fairness points one instance is worth.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DutySpecification {
    pub kind: DutyKind,
    pub start_time: NaiveTime,
    pub points_value: f64,
}

impl DutySpecification {
    pub fn new(kind: DutyKind, start_time: NaiveTime, points_value: f64) -> Self {
        Self {
            kind,
            start_time,
            points_value,
        }
    }
}
