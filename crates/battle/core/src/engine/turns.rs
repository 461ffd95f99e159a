//! Round loop and terminal condition.

use crate::state::Side;

use super::Simulation;
use super::errors::SimError;

/// Terminal result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    /// The opposing side was wiped out.
    Victory { winner: Side },
    /// Both sides wiped simultaneously, or the round ceiling was exhausted.
    Draw,
}

impl Simulation<'_> {
    /// Drive the battle to its terminal outcome.
    ///
    /// Each round ticks every combatant in the fixed order; the terminal
    /// condition is re-checked after every tick so a wiped side ends the
    /// battle mid-round. Exhausting the round ceiling resolves to a draw,
    /// which guarantees termination for rosters that cannot finish each
    /// other off.
    pub fn run(&mut self) -> Result<BattleOutcome, SimError> {
        if let Some(outcome) = self.outcome() {
            return Ok(outcome);
        }

        while self.rounds_taken < self.max_rounds {
            self.rounds_taken += 1;
            let order = self.order.clone();
            for actor in order {
                self.tick(actor)?;
                if let Some(outcome) = self.outcome() {
                    return Ok(outcome);
                }
            }
        }

        Ok(BattleOutcome::Draw)
    }

    /// Derived terminal-outcome query over current combatant state.
    ///
    /// `None` while both sides still have living members. A draw by round
    /// ceiling is reported by [`Simulation::run`]'s return value, not here:
    /// this query only inspects who is left standing.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        let home_alive = self.side_alive(Side::Home);
        let away_alive = self.side_alive(Side::Away);

        match (home_alive, away_alive) {
            (true, true) => None,
            (true, false) => Some(BattleOutcome::Victory { winner: Side::Home }),
            (false, true) => Some(BattleOutcome::Victory { winner: Side::Away }),
            (false, false) => Some(BattleOutcome::Draw),
        }
    }

    fn side_alive(&self, side: Side) -> bool {
        self.combatants
            .values()
            .any(|c| c.side == side && c.is_alive())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::SimConfig;
    use crate::engine::{SimError, TickError};
    use crate::env::{
        BattleEnv, BuffGrant, BuffOracle, BuffRecipient, BuffRow, CharacterOracle, CharacterRow,
        CombatParams, ElementChart, SkillOracle, SkillRow, TablesOracle, Targeting,
    };
    use crate::event::CombatEvent;
    use crate::skills::{SelectError, Skill};
    use crate::state::{
        BuffRowId, Chance, CharacterRowId, CombatantId, CombatantState, SkillRowId,
    };
    use crate::stats::{BaseStats, StatModifiers};

    struct NoRows;

    impl CharacterOracle for NoRows {
        fn row(&self, _id: CharacterRowId) -> Option<Arc<CharacterRow>> {
            None
        }
    }

    impl SkillOracle for NoRows {
        fn row(&self, _id: SkillRowId) -> Option<Arc<SkillRow>> {
            None
        }
    }

    impl BuffOracle for NoRows {
        fn row(&self, _id: BuffRowId) -> Option<Arc<BuffRow>> {
            None
        }
    }

    struct StandardTables;

    impl TablesOracle for StandardTables {
        fn combat(&self) -> CombatParams {
            CombatParams::standard()
        }

        fn elements(&self) -> ElementChart {
            ElementChart::standard()
        }
    }

    static NO_ROWS: NoRows = NoRows;
    static TABLES: StandardTables = StandardTables;
    static CONFIG: SimConfig = SimConfig { max_rounds: 50 };
    static SHORT_CONFIG: SimConfig = SimConfig { max_rounds: 3 };

    fn env(config: &'static SimConfig) -> BattleEnv<'static> {
        BattleEnv::new(&NO_ROWS, &NO_ROWS, &NO_ROWS, &TABLES, config)
    }

    fn guaranteed_strike(id: u16, power: u32) -> Skill {
        Skill::new(
            Chance::CERTAIN,
            Arc::new(SkillRow::basic_attack(id, power)),
            None,
        )
    }

    fn fighter(id: u32, side: Side, hp: u32, atk: u32, skill: Skill) -> CombatantState {
        CombatantState::builder(CombatantId(id), side)
            .base_stats(BaseStats::new(1, hp, atk, 0, 0, 0, 10))
            .skill(skill)
            .build()
    }

    #[test]
    fn lethal_strike_logs_use_then_death() {
        let roster = vec![
            fighter(0, Side::Home, 100, 10, guaranteed_strike(0, 10)),
            fighter(1, Side::Away, 5, 10, guaranteed_strike(0, 10)),
        ];
        let mut simulation = Simulation::with_combatants(env(&CONFIG), roster, 42);

        let outcome = simulation.run().unwrap();
        assert_eq!(outcome, BattleOutcome::Victory { winner: Side::Home });

        // The defender died inside the first tick: one use, one death.
        let events: Vec<_> = simulation.log().iter().collect();
        assert_eq!(events.len(), 2);
        match events[0] {
            CombatEvent::SkillUsed { actor, strikes, .. } => {
                assert_eq!(actor.id, CombatantId(0));
                assert_eq!(strikes.len(), 1);
                assert_eq!(strikes[0].target, CombatantId(1));
                assert_eq!(strikes[0].damage, Some(20));
                assert_eq!(strikes[0].hp_after, 0);
            }
            other => panic!("expected skill use first, got {other:?}"),
        }
        match events[1] {
            CombatEvent::Dead { combatant } => {
                assert_eq!(combatant.id, CombatantId(1));
                assert_eq!(combatant.stats.current_hp(), 0);
            }
            other => panic!("expected death second, got {other:?}"),
        }
    }

    #[test]
    fn dead_combatants_are_skipped() {
        let roster = vec![
            fighter(0, Side::Home, 100, 10, guaranteed_strike(0, 10)),
            fighter(1, Side::Away, 5, 10, guaranteed_strike(0, 10)),
        ];
        let mut simulation = Simulation::with_combatants(env(&CONFIG), roster, 42);

        simulation.tick(CombatantId(0)).unwrap();
        assert!(!simulation.combatant(CombatantId(1)).unwrap().is_alive());

        // A dead combatant's tick is a silent no-op: no draws, no events.
        let events_before = simulation.log().len();
        simulation.tick(CombatantId(1)).unwrap();
        assert_eq!(simulation.log().len(), events_before);
    }

    #[test]
    fn unknown_combatant_tick_is_a_silent_skip() {
        let roster = vec![fighter(0, Side::Home, 100, 10, guaranteed_strike(0, 10))];
        let mut simulation = Simulation::with_combatants(env(&CONFIG), roster, 1);

        simulation.tick(CombatantId(99)).unwrap();
        assert!(simulation.log().is_empty());
    }

    #[test]
    fn same_seed_produces_identical_logs() {
        let build = || {
            vec![
                fighter(0, Side::Home, 60, 7, guaranteed_strike(0, 5)),
                fighter(1, Side::Home, 50, 9, guaranteed_strike(1, 3)),
                fighter(2, Side::Away, 70, 8, guaranteed_strike(0, 5)),
                fighter(3, Side::Away, 40, 6, guaranteed_strike(2, 8)),
            ]
        };

        let mut first = Simulation::with_combatants(env(&CONFIG), build(), 0xFEED);
        let mut second = Simulation::with_combatants(env(&CONFIG), build(), 0xFEED);

        assert_eq!(first.run().unwrap(), second.run().unwrap());
        assert_eq!(first.log(), second.log());
        #[cfg(feature = "serde")]
        assert_eq!(first.log().digest(), second.log().digest());
    }

    #[test]
    fn round_ceiling_resolves_to_draw() {
        // Chip damage only: nobody dies before the ceiling.
        let roster = vec![
            fighter(0, Side::Home, 1000, 0, guaranteed_strike(0, 0)),
            fighter(1, Side::Away, 1000, 0, guaranteed_strike(0, 0)),
        ];
        let mut simulation = Simulation::with_combatants(env(&SHORT_CONFIG), roster, 7);

        assert_eq!(simulation.run().unwrap(), BattleOutcome::Draw);
        assert_eq!(simulation.rounds(), 3);
        // Ceiling draws are not visible to the state-derived query.
        assert_eq!(simulation.outcome(), None);
    }

    #[test]
    fn empty_side_resolves_immediately() {
        let roster = vec![fighter(0, Side::Home, 100, 10, guaranteed_strike(0, 10))];
        let mut simulation = Simulation::with_combatants(env(&CONFIG), roster, 1);

        assert_eq!(
            simulation.run().unwrap(),
            BattleOutcome::Victory { winner: Side::Home }
        );
        assert!(simulation.log().is_empty());
    }

    #[test]
    fn selection_failure_surfaces() {
        let never = Skill::new(
            Chance::NEVER,
            Arc::new(SkillRow::basic_attack(0, 10)),
            None,
        );
        let roster = vec![
            fighter(0, Side::Home, 100, 10, never),
            fighter(1, Side::Away, 100, 10, guaranteed_strike(0, 10)),
        ];
        let mut simulation = Simulation::with_combatants(env(&CONFIG), roster, 3);

        let error = simulation.run().unwrap_err();
        assert_eq!(
            error,
            SimError::Tick(TickError::Select {
                actor: CombatantId(0),
                source: SelectError::NoEligibleSkill,
            })
        );
    }

    #[test]
    fn area_skill_strikes_targets_in_roster_order() {
        let mut sweep_row = SkillRow::basic_attack(0, 10);
        sweep_row.targeting = Targeting::AllEnemies;
        let sweep = Skill::new(Chance::CERTAIN, Arc::new(sweep_row), None);

        let roster = vec![
            fighter(0, Side::Home, 100, 10, sweep),
            fighter(1, Side::Away, 200, 0, guaranteed_strike(0, 0)),
            fighter(2, Side::Away, 200, 0, guaranteed_strike(0, 0)),
        ];
        let mut simulation = Simulation::with_combatants(env(&CONFIG), roster, 5);

        simulation.tick(CombatantId(0)).unwrap();
        match simulation.log().iter().next().unwrap() {
            CombatEvent::SkillUsed { strikes, .. } => {
                let targets: Vec<_> = strikes.iter().map(|s| s.target).collect();
                assert_eq!(targets, vec![CombatantId(1), CombatantId(2)]);
            }
            other => panic!("expected skill use, got {other:?}"),
        }
    }

    #[test]
    fn granted_buff_expires_with_event() {
        let buff_row = Arc::new(BuffRow {
            modifiers: StatModifiers {
                atk: 5,
                ..StatModifiers::NONE
            },
            ..BuffRow::test_row(9, 1, 1, 1)
        });
        let mut row = SkillRow::basic_attack(0, 0);
        row.buff = Some(BuffGrant {
            buff: buff_row.id,
            recipient: BuffRecipient::User,
        });
        let rallying = Skill::new(Chance::CERTAIN, Arc::new(row), Some(Arc::clone(&buff_row)));

        let roster = vec![
            fighter(0, Side::Home, 1000, 0, rallying),
            fighter(1, Side::Away, 1000, 0, guaranteed_strike(0, 0)),
        ];
        let mut simulation = Simulation::with_combatants(env(&CONFIG), roster, 8);

        // First tick grants the buff (remaining 1, not yet expired).
        simulation.tick(CombatantId(0)).unwrap();
        let user = simulation.combatant(CombatantId(0)).unwrap();
        assert_eq!(user.buffs.len(), 1);
        assert_eq!(user.stats.atk(), 5);

        // Second tick ages it to zero and removes it at step 5.
        simulation.tick(CombatantId(0)).unwrap();
        let user = simulation.combatant(CombatantId(0)).unwrap();
        assert!(user.buffs.is_empty());
        assert_eq!(user.stats.atk(), 0);

        let removal = simulation
            .log()
            .iter()
            .find(|event| matches!(event, CombatEvent::BuffsRemoved { .. }));
        match removal {
            Some(CombatEvent::BuffsRemoved { owner }) => {
                assert_eq!(owner.id, CombatantId(0));
                assert!(owner.buffs.is_empty());
            }
            other => panic!("expected a buff removal event, got {other:?}"),
        }
    }
}
