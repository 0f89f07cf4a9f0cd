use anyhow::Context;
use anyhow::Result;
use chrono::NaiveTime;
use rota_contracts::turn_order::TurnOrderRequest;
use rota_scheduling_environment::calendar::DutyDate;
use rota_scheduling_environment::member::Member;
use tracing::Level;
use tracing::event;

use crate::AssignmentMap;
use crate::greedy::GreedyScheduler;
use crate::options::AssignmentOptions;
use crate::options::AssignmentStrategy;
use crate::round_robin::distribute_round_robin;
use crate::turn_order::TurnOrderProvider;

/// Entry point of the engine. Resolves the strategy once, then either runs
/// the greedy fairness scorer locally or asks the external provider for a
/// turn order and distributes it round-robin.
pub async fn generate_assignments<P>(
    provider: &P,
    dates: &[DutyDate],
    members: &[Member],
    start_time: NaiveTime,
    points_value: f64,
    options: AssignmentOptions,
) -> Result<AssignmentMap>
where
    P: TurnOrderProvider + Sync,
{
    match AssignmentStrategy::resolve(options, dates) {
        AssignmentStrategy::LegacyScoring { preference_bonus } => {
            let scheduler = GreedyScheduler::new(start_time, points_value, preference_bonus);
            Ok(scheduler.assign(dates, members))
        }
        AssignmentStrategy::RankedRoundRobin {
            algorithm,
            stable_id,
            organization_id,
            window,
        } => {
            let request = TurnOrderRequest {
                stable_id: stable_id.clone(),
                organization_id,
                algorithm: algorithm.clone(),
                member_ids: members.iter().map(|member| member.id.clone()).collect(),
                selection_start_date: window.start,
                selection_end_date: window.end,
            };

            let turn_order = provider
                .compute_turn_order(request)
                .await
                .with_context(|| {
                    format!("no turn order for stable {stable_id} from algorithm {algorithm}")
                })?
                .member_ids();

            event!(
                Level::DEBUG,
                turn_order_len = turn_order.len(),
                "turn order received"
            );

            Ok(distribute_round_robin(&turn_order, dates))
        }
    }
}
