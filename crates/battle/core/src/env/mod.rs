//! Traits describing read-only reference data.
//!
//! Oracles expose static rule tables (characters, skills, buffs, balance
//! parameters) and runtime configuration. The [`BattleEnv`] aggregate bundles
//! them so the engine can access everything it needs without hard coupling to
//! concrete implementations. Rule tables are injected at construction, never
//! reached through ambient globals.

mod buffs;
mod characters;
mod config;
mod error;
mod rng;
mod skills;
mod tables;

pub use buffs::{BuffOracle, BuffRow};
pub use characters::{CharacterOracle, CharacterRow};
pub use config::ConfigOracle;
pub use error::OracleError;
pub use rng::{PcgRng, RngSource};
pub use skills::{BuffGrant, BuffRecipient, SkillOracle, SkillRow, Targeting};
pub use tables::{CombatParams, ElementChart, TablesOracle};

/// Aggregates the read-only oracles required by the simulation.
#[derive(Clone, Copy)]
pub struct BattleEnv<'a> {
    characters: &'a dyn CharacterOracle,
    skills: &'a dyn SkillOracle,
    buffs: &'a dyn BuffOracle,
    tables: &'a dyn TablesOracle,
    config: &'a dyn ConfigOracle,
}

impl<'a> BattleEnv<'a> {
    pub fn new(
        characters: &'a dyn CharacterOracle,
        skills: &'a dyn SkillOracle,
        buffs: &'a dyn BuffOracle,
        tables: &'a dyn TablesOracle,
        config: &'a dyn ConfigOracle,
    ) -> Self {
        Self {
            characters,
            skills,
            buffs,
            tables,
            config,
        }
    }

    pub fn characters(&self) -> &'a dyn CharacterOracle {
        self.characters
    }

    pub fn skills(&self) -> &'a dyn SkillOracle {
        self.skills
    }

    pub fn buffs(&self) -> &'a dyn BuffOracle {
        self.buffs
    }

    pub fn tables(&self) -> &'a dyn TablesOracle {
        self.tables
    }

    pub fn config(&self) -> &'a dyn ConfigOracle {
        self.config
    }
}
