//! Simulation context and turn execution.
//!
//! [`Simulation`] is the authoritative owner of everything a battle needs:
//! the combatant set, the caller-specified tick order, the seeded random
//! source, and the event log. Combatants influence each other only through
//! the context (their target lists are lookup keys into its set), and the
//! outside world reads results only through the log and the terminal-outcome
//! query.

mod errors;
mod tick;
mod turns;

pub use errors::{SimError, TickError};
pub use turns::BattleOutcome;

use std::collections::BTreeMap;

use crate::env::{BattleEnv, PcgRng};
use crate::event::EventLog;
use crate::state::{CharacterRowId, CombatantId, CombatantState, Side};

/// One roster slot: which side the combatant fights for and which rule-table
/// row it is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    pub side: Side,
    pub character: CharacterRowId,
}

impl RosterEntry {
    pub const fn new(side: Side, character: CharacterRowId) -> Self {
        Self { side, character }
    }
}

/// A single battle simulation, created once per battle and discarded after
/// the caller extracts the event log.
pub struct Simulation<'a> {
    env: BattleEnv<'a>,
    combatants: BTreeMap<CombatantId, CombatantState>,
    /// Fixed tick order (roster order); the reproducibility contract orders
    /// the log by this sequence round after round.
    order: Vec<CombatantId>,
    rng: PcgRng,
    log: EventLog,
    rounds_taken: u32,
    max_rounds: u32,
}

impl<'a> Simulation<'a> {
    /// Build a simulation from rule-table rows.
    ///
    /// Combatant identifiers are assigned from roster order, which also
    /// becomes the tick order. Every rule-table lookup happens here; a
    /// missing row fails the construction immediately.
    pub fn new(env: BattleEnv<'a>, roster: &[RosterEntry], seed: u64) -> Result<Self, SimError> {
        let mut rng = PcgRng::from_seed(seed);

        let mut combatants = BTreeMap::new();
        let mut order = Vec::with_capacity(roster.len());
        for (index, entry) in roster.iter().enumerate() {
            let id = CombatantId(index as u32);
            let combatant =
                CombatantState::from_row(id, entry.side, entry.character, &env, &mut rng)?;
            combatants.insert(id, combatant);
            order.push(id);
        }

        let mut simulation = Self {
            max_rounds: env.config().max_rounds(),
            env,
            combatants,
            order,
            rng,
            log: EventLog::new(),
            rounds_taken: 0,
        };
        simulation.assign_targets();
        Ok(simulation)
    }

    /// Build a simulation from prebuilt combatants, bypassing the rule
    /// tables. Tick order follows the given order; target lists are filled
    /// the same way as [`Simulation::new`].
    pub fn with_combatants(
        env: BattleEnv<'a>,
        roster: Vec<CombatantState>,
        seed: u64,
    ) -> Self {
        let order: Vec<CombatantId> = roster.iter().map(|c| c.id).collect();
        let combatants = roster.into_iter().map(|c| (c.id, c)).collect();

        let mut simulation = Self {
            max_rounds: env.config().max_rounds(),
            env,
            combatants,
            order,
            rng: PcgRng::from_seed(seed),
            log: EventLog::new(),
            rounds_taken: 0,
        };
        simulation.assign_targets();
        simulation
    }

    /// Point every combatant at the opposing side, in tick order. Targets
    /// stay listed after death; liveness is resolved per tick.
    fn assign_targets(&mut self) {
        let order = self.order.clone();
        for id in &order {
            let Some(side) = self.combatants.get(id).map(|c| c.side) else {
                continue;
            };
            let targets: Vec<CombatantId> = order
                .iter()
                .filter(|other| {
                    self.combatants
                        .get(*other)
                        .is_some_and(|c| c.side != side)
                })
                .copied()
                .collect();
            if let Some(combatant) = self.combatants.get_mut(id) {
                combatant.targets = targets;
            }
        }
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&CombatantState> {
        self.combatants.get(&id)
    }

    /// Iterate combatants in identifier order.
    pub fn combatants(&self) -> impl Iterator<Item = &CombatantState> {
        self.combatants.values()
    }

    /// Completed rounds so far.
    pub fn rounds(&self) -> u32 {
        self.rounds_taken
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Extract the finished event log, consuming the simulation.
    pub fn into_log(self) -> EventLog {
        self.log
    }
}
