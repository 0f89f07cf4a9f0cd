use chrono::NaiveTime;
use rota_scheduling_environment::calendar::DutyDate;
use rota_scheduling_environment::member::Member;

use crate::tracking::TrackingState;

/// Fairness score of one eligible member for one date. Lower wins. Pure:
/// the winner's state mutation happens in the scheduler loop, never here.
pub fn fairness_score(
    member: &Member,
    tracking: &TrackingState,
    date: &DutyDate,
    start_time: NaiveTime,
    preference_bonus: f64,
) -> f64 {
    let bonus = if member.availability.prefers(date.weekday(), start_time) {
        preference_bonus
    } else {
        0.0
    };

    member.historical_points + tracking.session_points + bonus
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
    fn test_score_adds_historical_and_session_points() {
        let member = Member::builder(MemberId::new("m-1"))
            .historical_points(5.0)
            .build();
        let tracking = TrackingState {
            session_points: 10.0,
            ..TrackingState::default()
        };
        let monday = DutyDate::from_str("2024-03-04").unwrap();

        assert_eq!(
            fairness_score(&member, &tracking, &monday, hm(7, 0), -2.0),
            15.0
        );
    }

    #[test]
    fn test_preferred_slot_earns_the_bonus() {
        let member = Member::builder(MemberId::new("m-1"))
            .historical_points(5.0)
            .preferred_time(WeekdayRule::new(Weekday::Mon, vec![
                TimeSlot::new(hm(6, 0), hm(9, 0)).unwrap(),
            ]))
            .build();
        let monday = DutyDate::from_str("2024-03-04").unwrap();
        let tuesday = DutyDate::from_str("2024-03-05").unwrap();
        let tracking = TrackingState::default();

        assert_eq!(fairness_score(&member, &tracking, &monday, hm(7, 0), -2.0), 3.0);
        assert_eq!(fairness_score(&member, &tracking, &tuesday, hm(7, 0), -2.0), 5.0);
        assert_eq!(fairness_score(&member, &tracking, &monday, hm(10, 0), -2.0), 5.0);
    }
}
