//! Skill rule-table rows and oracle interface.

use std::sync::Arc;

use crate::state::{BuffRowId, Chance, Element, SkillRowId};

/// Which living opponents a skill strikes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Targeting {
    /// The first living combatant in the user's target list.
    #[default]
    FirstEnemy,
    /// Every living combatant in the user's target list.
    AllEnemies,
}

/// Who receives a buff granted by a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuffRecipient {
    /// The combatant using the skill.
    User,
    /// Every target the strike connected with (dodges excluded).
    StruckTargets,
}

/// Buff granted as a side effect of using a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffGrant {
    pub buff: BuffRowId,
    pub recipient: BuffRecipient,
}

/// Static rule-table row describing one skill.
///
/// The per-combatant activation chance is rolled once from
/// `[chance_min, chance_max]` when the skill is instantiated; the row itself
/// never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillRow {
    pub id: SkillRowId,
    pub name: String,
    pub element: Element,
    pub power: u32,
    pub chance_min: Chance,
    pub chance_max: Chance,
    pub targeting: Targeting,
    pub buff: Option<BuffGrant>,
}

impl SkillRow {
    /// Guaranteed single-target strike for tests and fixtures: always
    /// eligible, neutral element, no buff grant.
    pub fn basic_attack(id: u16, power: u32) -> Self {
        Self {
            id: SkillRowId(id),
            name: format!("basic-attack-{id}"),
            element: Element::Neutral,
            power,
            chance_min: Chance::CERTAIN,
            chance_max: Chance::CERTAIN,
            targeting: Targeting::FirstEnemy,
            buff: None,
        }
    }
}

/// Oracle providing skill rows by identifier.
pub trait SkillOracle: Send + Sync {
    /// Returns the row for the given identifier, if present.
    fn row(&self, id: SkillRowId) -> Option<Arc<SkillRow>>;
}
