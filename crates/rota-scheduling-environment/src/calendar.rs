use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

use anyhow::Context;
use anyhow::Result;
use chrono::Datelike;
use chrono::NaiveDate;
use chrono::NaiveTime;
use chrono::Weekday;
use serde::Deserialize;
use serde::Serialize;

/// A single calendar date carrying one duty instance. Serialized as
/// `YYYY-MM-DD` everywhere a date crosses the crate boundary.
#[derive(Eq, PartialEq, Hash, Clone, Copy, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct DutyDate(NaiveDate);

impl DutyDate {
    pub fn new(date: NaiveDate) -> Self {
        DutyDate(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The one day-of-week convention of the whole system: chrono's ISO
    /// `Weekday`, Monday first. The availability rules and the boundary
    /// detection in the scheduler both resolve weekdays through here.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }
}

impl Display for DutyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DutyDate {
    type Err = anyhow::Error;

    fn from_str(duty_date: &str) -> Result<Self> {
        NaiveDate::parse_from_str(duty_date, "%Y-%m-%d")
            .map(DutyDate)
            .with_context(|| format!("{duty_date} is not a valid YYYY-MM-DD duty date"))
    }
}

/// ISO week-and-year comparison. The last days of December can belong to
/// week 1 of the next ISO year and the first days of January to week 52/53
/// of the previous one.
pub fn same_iso_week(first: &DutyDate, second: &DutyDate) -> bool {
    first.0.iso_week() == second.0.iso_week()
}

pub fn same_calendar_month(first: &DutyDate, second: &DutyDate) -> bool {
    first.0.year() == second.0.year() && first.0.month() == second.0.month()
}

pub fn parse_start_time(start_time: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(start_time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(start_time, "%H:%M:%S"))
        .with_context(|| format!("{start_time} is not a valid HH:MM start time"))
}
