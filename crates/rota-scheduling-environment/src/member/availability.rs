use anyhow::Result;
use anyhow::ensure;
use chrono::NaiveTime;
use chrono::Weekday;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de;

/// A time-of-day window with an inclusive start and an exclusive end. A
/// slot whose end lies before its start wraps past midnight.
#[derive(Eq, PartialEq, Debug, Serialize, Deserialize, Clone)]
pub struct TimeSlot {
    #[serde(deserialize_with = "deserialize_slot_time")]
    pub start: NaiveTime,
    #[serde(deserialize_with = "deserialize_slot_time")]
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        ensure!(
            start != end,
            "the duration of a time slot has to be non-zero"
        );
        Ok(Self { start, end })
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.start > self.end {
            self.start <= time || time < self.end
        } else {
            self.start <= time && time < self.end
        }
    }
}

fn deserialize_slot_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let time_str: String = Deserialize::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&time_str, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&time_str, "%H:%M:%S"))
        .map_err(de::Error::custom)
}

/// A weekly recurring rule: one weekday and the time slots it covers on
/// that weekday.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WeekdayRule {
    pub weekday: Weekday,
    pub slots: Vec<TimeSlot>,
}

impl WeekdayRule {
    pub fn new(weekday: Weekday, slots: Vec<TimeSlot>) -> Self {
        Self { weekday, slots }
    }

    pub fn covers(&self, weekday: Weekday, start_time: NaiveTime) -> bool {
        self.weekday == weekday && self.slots.iter().any(|slot| slot.contains(start_time))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Availability {
    pub never_available: Vec<WeekdayRule>,
    pub preferred_times: Vec<WeekdayRule>,
}

impl Availability {
    /// Whether a duty starting at `start_time` on `weekday` may be assigned
    /// at all. Members without restrictions are the common case.
    pub fn is_available(&self, weekday: Weekday, start_time: NaiveTime) -> bool {
        if self.never_available.is_empty() {
            return true;
        }

        !self
            .never_available
            .iter()
            .any(|rule| rule.covers(weekday, start_time))
    }

    /// Preferred times never exclude anybody. They only feed the scoring
    /// bonus.
    pub fn prefers(&self, weekday: Weekday, start_time: NaiveTime) -> bool {
        self.preferred_times
            .iter()
            .any(|rule| rule.covers(weekday, start_time))
    }
}
