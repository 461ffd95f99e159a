//! Live combatant state and its construction from rule-table rows.

use std::sync::Arc;

use crate::buffs::{Buff, BuffSet};
use crate::env::{BattleEnv, CharacterRow, OracleError, RngSource};
use crate::event::CombatantSnapshot;
use crate::skills::{Skill, SkillBook};
use crate::state::{Chance, CharacterRowId, CombatantId, LifeState, Side, SkillRowId};
use crate::stats::{BaseStats, StatBlock};

/// One combatant's mutable state.
///
/// The rule-table row is shared by reference and never mutates; everything
/// else is derived state owned by the simulation. The target list holds
/// lookup keys into the simulation's combatant set, never owned combatants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantState {
    pub id: CombatantId,
    pub side: Side,
    pub life: LifeState,
    pub row: Arc<CharacterRow>,
    pub stats: StatBlock,
    pub skills: SkillBook,
    pub buffs: BuffSet,
    /// Opposing combatants in roster order; resolved per tick against the
    /// live set, so dead entries are skipped rather than removed.
    pub targets: Vec<CombatantId>,
    /// Skill used this tick, cleared at the start of the next one.
    pub last_used: Option<SkillRowId>,
}

impl CombatantState {
    /// Construct a combatant from its rule-table row.
    ///
    /// Rolls every base stat from the row's ranges, then instantiates the
    /// guaranteed default skill followed by the listed extras, rolling each
    /// activation chance. Draw order (stats in declaration order, then skills
    /// in listed order) is part of the reproducibility contract.
    ///
    /// All row lookups happen here: a missing skill or buff row fails the
    /// construction immediately and is never retried.
    pub fn from_row(
        id: CombatantId,
        side: Side,
        character: CharacterRowId,
        env: &BattleEnv<'_>,
        rng: &mut (impl RngSource + ?Sized),
    ) -> Result<Self, OracleError> {
        let row = env
            .characters()
            .row(character)
            .ok_or(OracleError::CharacterRowNotFound(character))?;

        let base = BaseStats::new(
            row.level.roll(rng),
            row.hp.roll(rng),
            row.atk.roll(rng),
            row.def.roll(rng),
            row.cri.roll(rng),
            row.dog.roll(rng),
            row.spd.roll(rng),
        );

        let mut skills = SkillBook::new();
        skills.add(Some(Self::instantiate_skill(row.default_skill, env, rng)?));
        for &skill_id in &row.skills {
            skills.add(Some(Self::instantiate_skill(skill_id, env, rng)?));
        }

        Ok(Self {
            id,
            side,
            life: LifeState::Alive,
            row,
            stats: StatBlock::new(base),
            skills,
            buffs: BuffSet::empty(),
            targets: Vec::new(),
            last_used: None,
        })
    }

    /// Resolve a skill row and roll its activation chance.
    fn instantiate_skill(
        id: SkillRowId,
        env: &BattleEnv<'_>,
        rng: &mut (impl RngSource + ?Sized),
    ) -> Result<Skill, OracleError> {
        let row = env
            .skills()
            .row(id)
            .ok_or(OracleError::SkillRowNotFound(id))?;

        let chance = Chance(rng.next_between(row.chance_min.0, row.chance_max.0));

        let buff = match row.buff {
            Some(grant) => Some(
                env.buffs()
                    .row(grant.buff)
                    .ok_or(OracleError::BuffRowNotFound(grant.buff))?,
            ),
            None => None,
        };

        Ok(Skill::new(chance, row, buff))
    }

    /// Builder for fixtures with fixed stats and hand-picked skills.
    pub fn builder(id: CombatantId, side: Side) -> CombatantBuilder {
        CombatantBuilder::new(id, side)
    }

    pub fn is_alive(&self) -> bool {
        self.life == LifeState::Alive
    }

    /// Tick step 1: drop the previous tick's skill reference.
    pub fn begin_turn(&mut self) {
        self.last_used = None;
    }

    /// Tick step 2: age every active buff by one turn.
    pub fn age_buffs(&mut self) {
        self.buffs.reduce_durations();
    }

    /// Guarded buff addition; recomputes stats only when the buff was
    /// actually stored.
    pub fn add_buff(&mut self, buff: Buff) -> bool {
        let stored = self.buffs.add(buff);
        if stored {
            self.stats.set_buffs(&self.buffs);
        }
        stored
    }

    /// Tick step 5: drop expired buffs, reverting their stat contribution.
    /// Returns whether anything was removed.
    pub fn expire_buffs(&mut self) -> bool {
        let removed = self.buffs.remove_expired();
        if removed {
            self.stats.set_buffs(&self.buffs);
        }
        removed
    }

    /// Terminal transition; the combatant is skipped from here on.
    pub fn mark_dead(&mut self) {
        self.life = LifeState::Dead;
    }

    /// Capture an owned value snapshot for the event log.
    pub fn snapshot(&self) -> CombatantSnapshot {
        CombatantSnapshot {
            id: self.id,
            side: self.side,
            life: self.life,
            row: Arc::clone(&self.row),
            stats: self.stats.clone(),
            buffs: self.buffs.iter().cloned().collect(),
            skills: self.skills.iter().cloned().collect(),
        }
    }
}

/// Builder for constructing combatants without rule-table oracles.
///
/// Used by tests and fixtures that need exact stats instead of rolled ranges.
pub struct CombatantBuilder {
    id: CombatantId,
    side: Side,
    row: Option<Arc<CharacterRow>>,
    base: Option<BaseStats>,
    skills: Vec<Skill>,
}

impl CombatantBuilder {
    pub fn new(id: CombatantId, side: Side) -> Self {
        Self {
            id,
            side,
            row: None,
            base: None,
            skills: Vec::new(),
        }
    }

    pub fn row(mut self, row: Arc<CharacterRow>) -> Self {
        self.row = Some(row);
        self
    }

    pub fn base_stats(mut self, base: BaseStats) -> Self {
        self.base = Some(base);
        self
    }

    pub fn skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn build(self) -> CombatantState {
        let row = self
            .row
            .unwrap_or_else(|| Arc::new(CharacterRow::test_row(self.id.0 as u16)));
        let base = self.base.unwrap_or_default();

        let mut skills = SkillBook::new();
        for skill in self.skills {
            skills.add(Some(skill));
        }

        CombatantState {
            id: self.id,
            side: self.side,
            life: LifeState::Alive,
            row,
            stats: StatBlock::new(base),
            skills,
            buffs: BuffSet::empty(),
            targets: Vec::new(),
            last_used: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::BuffRow;
    use crate::stats::StatModifiers;

    fn buff(group: u16, rank: u16, duration: u32, atk: i32) -> Buff {
        Buff::from_row(Arc::new(BuffRow {
            modifiers: StatModifiers {
                atk,
                ..StatModifiers::NONE
            },
            ..BuffRow::test_row(group, group, rank, duration)
        }))
    }

    #[test]
    fn snapshot_is_immune_to_later_mutation() {
        let mut combatant = CombatantState::builder(CombatantId(0), Side::Home)
            .base_stats(BaseStats::new(1, 80, 12, 3, 0, 0, 9))
            .build();

        let snapshot = combatant.snapshot();
        combatant.stats.take_damage(50);
        combatant.add_buff(buff(1, 1, 3, 5));
        combatant.mark_dead();

        assert_eq!(snapshot.stats.current_hp(), 80);
        assert!(snapshot.buffs.is_empty());
        assert_eq!(snapshot.life, LifeState::Alive);
    }

    #[test]
    fn snapshot_shares_the_row_by_reference() {
        let combatant = CombatantState::builder(CombatantId(0), Side::Home).build();
        let snapshot = combatant.snapshot();

        assert!(Arc::ptr_eq(&combatant.row, &snapshot.row));
    }

    #[test]
    fn stored_buff_recomputes_stats() {
        let mut combatant = CombatantState::builder(CombatantId(0), Side::Home)
            .base_stats(BaseStats::new(1, 100, 10, 5, 0, 0, 10))
            .build();

        assert!(combatant.add_buff(buff(1, 5, 3, 4)));
        assert_eq!(combatant.stats.atk(), 14);

        // Lower rank rejected: stats untouched.
        assert!(!combatant.add_buff(buff(1, 2, 3, 100)));
        assert_eq!(combatant.stats.atk(), 14);
    }

    #[test]
    fn expire_buffs_reverts_contribution() {
        let mut combatant = CombatantState::builder(CombatantId(0), Side::Home)
            .base_stats(BaseStats::new(1, 100, 10, 5, 0, 0, 10))
            .build();

        combatant.add_buff(buff(1, 5, 1, 4));
        combatant.age_buffs();
        assert!(combatant.expire_buffs());

        assert_eq!(combatant.stats.atk(), 10);
        assert!(combatant.buffs.is_empty());
        assert!(!combatant.expire_buffs());
    }
}
