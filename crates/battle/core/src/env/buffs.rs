//! Buff rule-table rows and oracle interface.

use std::sync::Arc;

use crate::state::{BuffGroupId, BuffRank, BuffRowId};
use crate::stats::StatModifiers;

/// Static rule-table row describing one timed status effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffRow {
    pub id: BuffRowId,
    pub name: String,

    /// Mutually exclusive slot: a combatant holds at most one active buff
    /// per group.
    pub group: BuffGroupId,
    /// Priority within the group; higher ranks are never displaced by lower.
    pub rank: BuffRank,
    /// Lifetime in owner ticks.
    pub duration: u32,
    pub modifiers: StatModifiers,
}

impl BuffRow {
    /// Minimal row for unit tests and fixtures.
    pub fn test_row(id: u16, group: u16, rank: u16, duration: u32) -> Self {
        Self {
            id: BuffRowId(id),
            name: format!("test-buff-{id}"),
            group: BuffGroupId(group),
            rank: BuffRank(rank),
            duration,
            modifiers: StatModifiers::NONE,
        }
    }
}

/// Oracle providing buff rows by identifier.
pub trait BuffOracle: Send + Sync {
    /// Returns the row for the given identifier, if present.
    fn row(&self, id: BuffRowId) -> Option<Arc<BuffRow>>;
}
