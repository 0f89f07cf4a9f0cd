use chrono::NaiveTime;
use rota_scheduling_environment::calendar::DutyDate;
use rota_scheduling_environment::member::Member;

use crate::tracking::TrackingState;

/// Hard availability constraint for one date. Preferred times play no part
/// here; they only enter through the scorer.
pub fn is_member_available(member: &Member, date: &DutyDate, start_time: NaiveTime) -> bool {
    member.availability.is_available(date.weekday(), start_time)
}

/// Whether the member has exhausted a per-week or per-month cap. The two
/// checks are independent; either one on its own disqualifies.
pub fn has_reached_limits(member: &Member, tracking: &TrackingState) -> bool {
    member.limits.week_cap_reached(tracking.shifts_this_week)
        || member.limits.month_cap_reached(tracking.shifts_this_month)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::Weekday;
    use rota_scheduling_environment::member::MemberId;
    use rota_scheduling_environment::member::availability::TimeSlot;
    use rota_scheduling_environment::member::availability::WeekdayRule;

    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_unrestricted_member_is_available() {
        let member = Member::builder(MemberId::new("m-1")).build();
        let monday = DutyDate::from_str("2024-03-04").unwrap();

        assert!(is_member_available(&member, &monday, hm(7, 0)));
    }

    #[test]
    fn test_never_available_slot_excludes_member() {
        let member = Member::builder(MemberId::new("m-1"))
            .never_available(WeekdayRule::new(Weekday::Mon, vec![
                TimeSlot::new(hm(6, 0), hm(9, 0)).unwrap(),
            ]))
            .build();
        let monday = DutyDate::from_str("2024-03-04").unwrap();
        let tuesday = DutyDate::from_str("2024-03-05").unwrap();

        assert!(!is_member_available(&member, &monday, hm(7, 0)));
        assert!(is_member_available(&member, &tuesday, hm(7, 0)));
        assert!(is_member_available(&member, &monday, hm(9, 0)));
    }

    #[test]
    fn test_either_cap_disqualifies() {
        let member = Member::builder(MemberId::new("m-1"))
            .max_shifts_per_week(1)
            .max_shifts_per_month(3)
            .build();

        let tracking = TrackingState {
            shifts_this_week: 1,
            shifts_this_month: 0,
            ..TrackingState::default()
        };
        assert!(has_reached_limits(&member, &tracking));

        let tracking = TrackingState {
            shifts_this_week: 0,
            shifts_this_month: 3,
            ..TrackingState::default()
        };
        assert!(has_reached_limits(&member, &tracking));

        assert!(!has_reached_limits(&member, &TrackingState::default()));
    }
}
