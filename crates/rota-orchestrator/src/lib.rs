pub mod logging;

use std::sync::Arc;

use anyhow::Result;
use arc_swap::ArcSwap;
use rota_assignment::AssignmentMap;
use rota_assignment::AssignmentOptions;
use rota_assignment::TurnOrderProvider;
use rota_configuration::SystemConfigurations;
use rota_scheduling_environment::RosterEnvironment;
use rota_scheduling_environment::calendar::DutyDate;
use rota_scheduling_environment::duty::DutySpecification;
use tracing::Level;
use tracing::event;
use tracing::instrument;

pub use self::logging::LogHandles;
pub use self::logging::setup_logging;

/// Owns the loaded configurations and the external turn-order provider,
/// and exposes the one entry point request handlers call into.
pub struct Orchestrator<P> {
    pub system_configurations: Arc<ArcSwap<SystemConfigurations>>,
    pub turn_order_provider: P,
}

impl<P> Orchestrator<P>
where
    P: TurnOrderProvider + Sync,
{
    pub fn new(
        system_configurations: Arc<ArcSwap<SystemConfigurations>>,
        turn_order_provider: P,
    ) -> Self {
        Self {
            system_configurations,
            turn_order_provider,
        }
    }

    /// Produces the date to member map for one duty over one window of
    /// dates. Dates the engine could not cover are absent from the map;
    /// the consumer treats those as needing manual assignment.
    #[instrument(level = "info", skip_all)]
    pub async fn generate_assignments(
        &self,
        roster: &RosterEnvironment,
        duty: &DutySpecification,
        dates: &[DutyDate],
        mut options: AssignmentOptions,
    ) -> Result<AssignmentMap> {
        if options.preference_bonus.is_none() {
            let configurations = self.system_configurations.load();
            options.preference_bonus = Some(configurations.scoring.preference_bonus);
        }

        let assignments = rota_assignment::generate_assignments(
            &self.turn_order_provider,
            dates,
            &roster.members,
            duty.start_time,
            duty.points_value,
            options,
        )
        .await?;

        event!(
            Level::INFO,
            duty = %duty.kind,
            requested_dates = dates.len(),
            assigned_dates = assignments.len(),
            "assignment run finished"
        );

        Ok(assignments)
    }
}
