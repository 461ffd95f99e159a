//! Per-combatant skill registry and weighted random selection.

use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::config::SimConfig;
use crate::env::{BuffRecipient, BuffRow, RngSource, SkillRow, Targeting};
use crate::state::{Chance, Element, SkillRowId};

/// Zero skills survived the eligibility draws.
///
/// A correctly configured combatant always holds a guaranteed fallback skill,
/// so reaching this in practice indicates a data-configuration defect; it is
/// surfaced, never swallowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("no eligible skill after selection draws")]
    NoEligibleSkill,
}

/// One skill as held by a combatant: an activation chance rolled at
/// instantiation plus shared references to the static rows.
///
/// Skills are immutable once assigned; cloning shares the rows.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    chance: Chance,
    row: Arc<SkillRow>,
    /// Buff row pre-resolved at construction so ticks never perform table
    /// lookups.
    buff: Option<Arc<BuffRow>>,
}

impl Skill {
    pub fn new(chance: Chance, row: Arc<SkillRow>, buff: Option<Arc<BuffRow>>) -> Self {
        Self { chance, row, buff }
    }

    pub fn chance(&self) -> Chance {
        self.chance
    }

    pub fn row(&self) -> &Arc<SkillRow> {
        &self.row
    }

    pub fn row_id(&self) -> SkillRowId {
        self.row.id
    }

    pub fn power(&self) -> u32 {
        self.row.power
    }

    pub fn element(&self) -> Element {
        self.row.element
    }

    pub fn targeting(&self) -> Targeting {
        self.row.targeting
    }

    /// The buff this skill grants on use, with its recipient.
    pub fn granted_buff(&self) -> Option<(&Arc<BuffRow>, BuffRecipient)> {
        match (&self.buff, self.row.buff) {
            (Some(row), Some(grant)) => Some((row, grant.recipient)),
            _ => None,
        }
    }
}

/// Ordered collection of a combatant's available skills.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillBook {
    skills: ArrayVec<Skill, { SimConfig::MAX_SKILLS }>,
}

impl SkillBook {
    /// Creates an empty skill book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a skill. An absent skill is a silent no-op, as is an addition
    /// past capacity.
    pub fn add(&mut self, skill: Option<Skill>) {
        let Some(skill) = skill else {
            return;
        };
        if !self.skills.is_full() {
            self.skills.push(skill);
        }
    }

    /// Weighted random selection.
    ///
    /// Draw order is part of the reproducibility contract:
    /// 1. one eligibility draw in `[0, Chance::SCALE)` per skill, in book
    ///    order; a skill survives iff its chance strictly exceeds the draw;
    /// 2. eligible skills sort by ascending chance, ties by ascending row id;
    /// 3. one index draw in `[0, eligible_len)` picks the winner.
    pub fn select(&self, rng: &mut (impl RngSource + ?Sized)) -> Result<&Skill, SelectError> {
        let mut eligible: Vec<&Skill> = Vec::with_capacity(self.skills.len());
        for skill in &self.skills {
            let draw = rng.next_range(Chance::SCALE);
            if skill.chance().exceeds(draw) {
                eligible.push(skill);
            }
        }

        if eligible.is_empty() {
            return Err(SelectError::NoEligibleSkill);
        }

        eligible.sort_by_key(|skill| (skill.chance(), skill.row_id()));

        let index = rng.next_range(eligible.len() as u32) as usize;
        Ok(eligible[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
