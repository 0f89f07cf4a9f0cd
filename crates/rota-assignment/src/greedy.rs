use std::collections::HashMap;

use chrono::NaiveTime;
use itertools::Itertools;
use rota_scheduling_environment::calendar;
use rota_scheduling_environment::calendar::DutyDate;
use rota_scheduling_environment::member::Member;
use rota_scheduling_environment::member::MemberId;
use tracing::Level;
use tracing::event;

use crate::AssignmentMap;
use crate::eligibility::has_reached_limits;
use crate::eligibility::is_member_available;
use crate::scoring::fairness_score;
use crate::tracking::TrackingState;

/// The legacy fairness path: per-date greedy selection with no lookahead
/// and no backtracking. The per-member tracking map lives inside `assign`,
/// so concurrent runs never share state.
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    pub start_time: NaiveTime,
    pub points_value: f64,
    pub preference_bonus: f64,
}

impl GreedyScheduler {
    pub fn new(start_time: NaiveTime, points_value: f64, preference_bonus: f64) -> Self {
        Self {
            start_time,
            points_value,
            preference_bonus,
        }
    }

    /// Assigns each date to the lowest-scoring eligible member. Dates have
    /// to arrive in chronological order; the week and month boundary
    /// resets depend on it. A date without any eligible member is skipped,
    /// never forced.
    pub fn assign(&self, dates: &[DutyDate], members: &[Member]) -> AssignmentMap {
        // Explicit, stable iteration order. Scoring ties go to the first
        // candidate seen, so the outcome must not depend on how the
        // upstream roster query happened to sort.
        let mut roster: Vec<&Member> = members.iter().collect();
        roster.sort_by(|first, second| first.id.cmp(&second.id));

        let mut tracking: HashMap<MemberId, TrackingState> = roster
            .iter()
            .map(|member| (member.id.clone(), TrackingState::default()))
            .collect();

        let mut assignments = AssignmentMap::new();
        let mut previous_date: Option<DutyDate> = None;

        for date in dates {
            reset_counters_on_boundaries(previous_date.as_ref(), date, &mut tracking);
            previous_date = Some(*date);

            let eligible: Vec<&Member> = roster
                .iter()
                .copied()
                .filter(|member| is_member_available(member, date, self.start_time))
                .filter(|member| !has_reached_limits(member, &tracking[&member.id]))
                .collect();

            if eligible.is_empty() {
                event!(Level::TRACE, %date, "no eligible member, date skipped");
                continue;
            }

            // position_min_by returns the first of equally minimal scores,
            // which is exactly the tie-break contract.
            let position = eligible
                .iter()
                .position_min_by(|first, second| {
                    let first_score = fairness_score(
                        first,
                        &tracking[&first.id],
                        date,
                        self.start_time,
                        self.preference_bonus,
                    );
                    let second_score = fairness_score(
                        second,
                        &tracking[&second.id],
                        date,
                        self.start_time,
                        self.preference_bonus,
                    );
                    first_score.total_cmp(&second_score)
                })
                .expect("the eligible set was checked to be non-empty");
            let selected = eligible[position];

            event!(Level::DEBUG, %date, member_id = %selected.id, "duty assigned");

            assignments.insert(*date, selected.id.clone());
            tracking
                .entry(selected.id.clone())
                .or_default()
                .record_assignment(self.points_value, *date);
        }

        assignments
    }
}

/// Boundary resets apply to every tracked member, not only the one that
/// was assigned last. Skipped dates still advance the boundary detection.
fn reset_counters_on_boundaries(
    previous_date: Option<&DutyDate>,
    date: &DutyDate,
    tracking: &mut HashMap<MemberId, TrackingState>,
) {
    let Some(previous_date) = previous_date else {
        return;
    };

    if !calendar::same_iso_week(previous_date, date) {
        for state in tracking.values_mut() {
            state.reset_week();
        }
        event!(Level::TRACE, %date, "week boundary, weekly counters reset");
    }

    if !calendar::same_calendar_month(previous_date, date) {
        for state in tracking.values_mut() {
            state.reset_month();
        }
        event!(Level::TRACE, %date, "month boundary, monthly counters reset");
    }
}
