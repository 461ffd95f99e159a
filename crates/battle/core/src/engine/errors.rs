use crate::env::OracleError;
use crate::skills::SelectError;
use crate::state::CombatantId;

/// Failure while executing one combatant's tick.
///
/// A failed tick aborts the simulation; there is no degraded skill choice or
/// partial-result recovery, since rerunning the same deterministic
/// computation would reproduce the same failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TickError {
    #[error("skill selection failed for combatant {actor}: {source}")]
    Select {
        actor: CombatantId,
        source: SelectError,
    },
}

/// Top-level simulation failure, surfaced synchronously to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Tick(#[from] TickError),
}
