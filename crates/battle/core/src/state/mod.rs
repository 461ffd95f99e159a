//! Simulation state types.

mod combatant;
mod common;

pub use combatant::{CombatantBuilder, CombatantState};
pub use common::{
    BuffGroupId, BuffRank, BuffRowId, Chance, CharacterRowId, CombatantId, Element, LifeState,
    Side, SizeClass, SkillRowId,
};
