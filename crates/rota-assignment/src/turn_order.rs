use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use rota_contracts::turn_order::TurnOrderRequest;
use rota_contracts::turn_order::TurnOrderResponse;

/// The external ranking collaborator behind `computeTurnOrder`. The one
/// asynchronous boundary of the engine; everything else is a pure
/// in-memory computation.
///
/// Implementations must return the same order for identical requests;
/// reproducibility of ranked assignments depends on it. Errors propagate
/// to the caller untouched. The engine never falls back to the greedy path
/// on a provider failure, because that would silently change fairness
/// semantics.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TurnOrderProvider {
    async fn compute_turn_order(&self, request: TurnOrderRequest) -> Result<TurnOrderResponse>;
}
