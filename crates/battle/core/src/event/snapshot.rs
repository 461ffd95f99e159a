//! Value snapshots of combatants for the event log.

use std::sync::Arc;

use crate::buffs::Buff;
use crate::env::CharacterRow;
use crate::skills::Skill;
use crate::state::{CombatantId, LifeState, Side};
use crate::stats::StatBlock;

/// Independent, owned copy of a combatant's state at event-log time.
///
/// Stats and buffs are value copies (buffs in group order), so later mutation
/// of the live combatant never retroactively changes logged history. The
/// character row and skill rows are immutable and therefore shared by
/// reference.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSnapshot {
    pub id: CombatantId,
    pub side: Side,
    pub life: LifeState,
    pub row: Arc<CharacterRow>,
    pub stats: StatBlock,
    pub buffs: Vec<Buff>,
    pub skills: Vec<Skill>,
}
