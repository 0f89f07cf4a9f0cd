use rota_configuration::scoring::DEFAULT_PREFERENCE_BONUS;
use rota_contracts::turn_order::RankingAlgorithm;
use rota_scheduling_environment::OrganizationId;
use rota_scheduling_environment::StableId;
use rota_scheduling_environment::calendar::DutyDate;
use serde::Deserialize;
use serde::Serialize;

/// Caller-supplied knobs for one run. Everything is optional; what is
/// present decides which strategy runs.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AssignmentOptions {
    pub algorithm: Option<RankingAlgorithm>,
    pub stable_id: Option<StableId>,
    pub organization_id: Option<OrganizationId>,
    pub start_date: Option<DutyDate>,
    pub end_date: Option<DutyDate>,
    pub preference_bonus: Option<f64>,
}

/// The date window handed to the turn-order provider.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SelectionWindow {
    pub start: DutyDate,
    pub end: DutyDate,
}

/// The two fairness models, resolved exactly once at the entry point. The
/// ranked path activates only on the full conjunction of algorithm, stable
/// and organization; every partial combination falls open to legacy
/// scoring rather than erroring.
#[derive(Debug, Clone)]
pub enum AssignmentStrategy {
    LegacyScoring {
        preference_bonus: f64,
    },
    RankedRoundRobin {
        algorithm: RankingAlgorithm,
        stable_id: StableId,
        organization_id: OrganizationId,
        window: SelectionWindow,
    },
}

impl AssignmentStrategy {
    /// Window fields that are not given fall back to the first and last
    /// entry of the chronological date list. With no dates and no explicit
    /// window there is nothing the provider could rank, so the resolution
    /// falls through to legacy scoring, which maps an empty input to an
    /// empty result.
    pub fn resolve(options: AssignmentOptions, dates: &[DutyDate]) -> AssignmentStrategy {
        let AssignmentOptions {
            algorithm,
            stable_id,
            organization_id,
            start_date,
            end_date,
            preference_bonus,
        } = options;

        let window = match (start_date, end_date, dates.first(), dates.last()) {
            (Some(start), Some(end), _, _) => Some(SelectionWindow { start, end }),
            (start, end, Some(first), Some(last)) => Some(SelectionWindow {
                start: start.unwrap_or(*first),
                end: end.unwrap_or(*last),
            }),
            _ => None,
        };

        match (algorithm, stable_id, organization_id, window) {
            (Some(algorithm), Some(stable_id), Some(organization_id), Some(window)) => {
                AssignmentStrategy::RankedRoundRobin {
                    algorithm,
                    stable_id,
                    organization_id,
                    window,
                }
            }
            _ => AssignmentStrategy::LegacyScoring {
                preference_bonus: preference_bonus.unwrap_or(DEFAULT_PREFERENCE_BONUS),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn ranked_options() -> AssignmentOptions {
        AssignmentOptions {
            algorithm: Some(RankingAlgorithm::new("least-recently-served")),
            stable_id: Some(StableId::new("s1")),
            organization_id: Some(OrganizationId::new("o1")),
            ..AssignmentOptions::default()
        }
    }

    fn march_dates() -> Vec<DutyDate> {
        vec![
            DutyDate::from_str("2024-03-04").unwrap(),
            DutyDate::from_str("2024-03-05").unwrap(),
            DutyDate::from_str("2024-03-06").unwrap(),
        ]
    }

    #[test]
    fn test_full_conjunction_activates_the_ranked_path() {
        let strategy = AssignmentStrategy::resolve(ranked_options(), &march_dates());

        let AssignmentStrategy::RankedRoundRobin { window, .. } = strategy else {
            panic!("expected the ranked strategy");
        };
        assert_eq!(window, SelectionWindow {
            start: DutyDate::from_str("2024-03-04").unwrap(),
            end: DutyDate::from_str("2024-03-06").unwrap(),
        });
    }

    #[test]
    fn test_partial_combinations_fall_open_to_legacy() {
        let mut no_algorithm = ranked_options();
        no_algorithm.algorithm = None;
        let mut no_stable = ranked_options();
        no_stable.stable_id = None;
        let mut no_organization = ranked_options();
        no_organization.organization_id = None;

        for options in [no_algorithm, no_stable, no_organization] {
            let strategy = AssignmentStrategy::resolve(options, &march_dates());

            assert!(matches!(strategy, AssignmentStrategy::LegacyScoring {
                preference_bonus
            } if preference_bonus == DEFAULT_PREFERENCE_BONUS));
        }
    }

    #[test]
    fn test_explicit_window_wins_over_the_date_list() {
        let mut options = ranked_options();
        options.start_date = Some(DutyDate::from_str("2024-02-01").unwrap());
        options.end_date = Some(DutyDate::from_str("2024-03-31").unwrap());

        let strategy = AssignmentStrategy::resolve(options, &march_dates());

        let AssignmentStrategy::RankedRoundRobin { window, .. } = strategy else {
            panic!("expected the ranked strategy");
        };
        assert_eq!(window.start, DutyDate::from_str("2024-02-01").unwrap());
        assert_eq!(window.end, DutyDate::from_str("2024-03-31").unwrap());
    }

    #[test]
    fn test_ranked_configuration_without_dates_falls_open_to_legacy() {
        let strategy = AssignmentStrategy::resolve(ranked_options(), &[]);

        assert!(matches!(strategy, AssignmentStrategy::LegacyScoring { .. }));
    }

    #[test]
    fn test_explicit_preference_bonus_is_kept() {
        let options = AssignmentOptions {
            preference_bonus: Some(-5.0),
            ..AssignmentOptions::default()
        };

        let strategy = AssignmentStrategy::resolve(options, &march_dates());

        assert!(matches!(strategy, AssignmentStrategy::LegacyScoring {
            preference_bonus
        } if preference_bonus == -5.0));
    }
}
