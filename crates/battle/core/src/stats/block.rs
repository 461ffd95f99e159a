//! Mutable stat state of a live combatant.

use crate::buffs::BuffSet;

use super::core::BaseStats;
use super::modifiers::StatModifiers;

/// Base stats plus the summed modifiers of the active buff set, with the one
/// piece of freely mutating state: current HP.
///
/// Invariant: `0 <= current_hp <= hp()` at every observable point. The
/// modifier sum is recomputed only through [`StatBlock::set_buffs`], so two
/// calls with the same buff set always produce the same readable values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    base: BaseStats,
    modifiers: StatModifiers,
    current_hp: u32,
}

impl StatBlock {
    /// Create a stat block with no modifiers and full health.
    pub fn new(base: BaseStats) -> Self {
        Self {
            base,
            modifiers: StatModifiers::NONE,
            current_hp: base.hp,
        }
    }

    pub fn base(&self) -> &BaseStats {
        &self.base
    }

    pub fn level(&self) -> u32 {
        self.base.level
    }

    /// Maximum health including buff modifiers.
    pub fn hp(&self) -> u32 {
        StatModifiers::apply(self.modifiers.hp, self.base.hp)
    }

    pub fn atk(&self) -> u32 {
        StatModifiers::apply(self.modifiers.atk, self.base.atk)
    }

    pub fn def(&self) -> u32 {
        StatModifiers::apply(self.modifiers.def, self.base.def)
    }

    pub fn cri(&self) -> u32 {
        StatModifiers::apply(self.modifiers.cri, self.base.cri)
    }

    pub fn dog(&self) -> u32 {
        StatModifiers::apply(self.modifiers.dog, self.base.dog)
    }

    pub fn spd(&self) -> u32 {
        StatModifiers::apply(self.modifiers.spd, self.base.spd)
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// Reapply the modifiers of every active buff.
    ///
    /// Current HP is clamped to the (possibly lowered) new maximum.
    pub fn set_buffs(&mut self, buffs: &BuffSet) {
        self.modifiers = buffs.modifier_total();
        self.current_hp = self.current_hp.min(self.hp());
    }

    /// Restore health, saturating at the current maximum. Over-heal is not an
    /// error.
    pub fn heal(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_add(amount).min(self.hp());
    }

    /// Reduce current HP, clamped at zero. Returns the new current HP.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.current_hp = self.current_hp.saturating_sub(amount);
        self.current_hp
    }
}
