//! Append-only combat event log.
//!
//! The log is the sole externally consumed artifact of a simulation run:
//! events are appended in tick order, never mutated in place, never
//! reordered. Every event owns value snapshots of the combatants it
//! references, so the log stays valid history no matter how the live state
//! evolves afterwards.

mod snapshot;

pub use snapshot::CombatantSnapshot;

use crate::combat::StrikeOutcome;
use crate::state::{CombatantId, SkillRowId};

/// Per-target record inside a *skill-used* event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeRecord {
    pub target: CombatantId,
    pub outcome: StrikeOutcome,
    /// Damage dealt (None on a dodge).
    pub damage: Option<u32>,
    /// Target's current HP immediately after the strike.
    pub hp_after: u32,
}

/// One immutable entry of the combat log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    /// A combatant used a skill; carries the computed outcome per target.
    SkillUsed {
        actor: CombatantSnapshot,
        skill: SkillRowId,
        strikes: Vec<StrikeRecord>,
    },

    /// Expired buffs were removed from a combatant at the end of its tick.
    BuffsRemoved { owner: CombatantSnapshot },

    /// A combatant's HP reached zero; the snapshot is taken at time of death.
    Dead { combatant: CombatantSnapshot },
}

/// Ordered, append-only sequence of combat events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLog {
    events: Vec<CombatEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Only the engine appends; consumers read.
    pub(crate) fn push(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombatEvent> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// SHA-256 commitment over the serialized event sequence.
    ///
    /// Two byte-identical replays produce the same digest, which is what the
    /// surrounding result-recording layer compares. Order matters: the hash
    /// runs sequentially over events.
    #[cfg(feature = "serde")]
    pub fn digest(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        for event in &self.events {
            // bincode serialization is deterministic and consistent
            if let Ok(bytes) = bincode::serialize(event) {
                hasher.update(&bytes);
            }
        }

        hasher.finalize().into()
    }
}
