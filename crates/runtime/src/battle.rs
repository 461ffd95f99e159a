//! Battle runner: assembles oracles and drives simulations.

use std::path::Path;

use battle_core::{BattleEnv, RosterEntry, SimConfig, Simulation};
use battle_content::{
    BuffCatalogLoader, CharacterCatalogLoader, RulesLoader, SkillCatalogLoader, TablesLoader,
};
use tracing::{debug, info};

use crate::error::{Result, RuntimeError};
use crate::oracle::{BuffOracleImpl, CharacterOracleImpl, SkillOracleImpl, TablesOracleImpl};
use crate::report::BattleReport;

/// File names expected inside a content directory.
const CHARACTERS_FILE: &str = "characters.ron";
const SKILLS_FILE: &str = "skills.ron";
const BUFFS_FILE: &str = "buffs.ron";
const BALANCE_FILE: &str = "balance.toml";
const RULES_FILE: &str = "rules.toml";

/// Owns one set of oracles and runs any number of independent battles
/// against them. Each run constructs its own [`Simulation`] with its own
/// random source and combatant set, so concurrent battles share nothing
/// mutable.
#[derive(Debug)]
pub struct BattleRunner {
    characters: CharacterOracleImpl,
    skills: SkillOracleImpl,
    buffs: BuffOracleImpl,
    tables: TablesOracleImpl,
    rules: SimConfig,
}

impl BattleRunner {
    pub fn new(
        characters: CharacterOracleImpl,
        skills: SkillOracleImpl,
        buffs: BuffOracleImpl,
        tables: TablesOracleImpl,
        rules: SimConfig,
    ) -> Self {
        Self {
            characters,
            skills,
            buffs,
            tables,
            rules,
        }
    }

    /// Load every catalog and table from a content directory.
    ///
    /// Expects `characters.ron`, `skills.ron`, `buffs.ron`, `balance.toml`
    /// and `rules.toml` at the directory root.
    pub fn from_content(dir: &Path) -> Result<Self> {
        let characters =
            CharacterCatalogLoader::load(&dir.join(CHARACTERS_FILE)).map_err(load_err)?;
        let skills = SkillCatalogLoader::load(&dir.join(SKILLS_FILE)).map_err(load_err)?;
        let buffs = BuffCatalogLoader::load(&dir.join(BUFFS_FILE)).map_err(load_err)?;
        let tables = TablesLoader::load(&dir.join(BALANCE_FILE)).map_err(load_err)?;
        let rules = RulesLoader::load(&dir.join(RULES_FILE)).map_err(load_err)?;

        info!(
            characters = characters.len(),
            skills = skills.len(),
            buffs = buffs.len(),
            "content loaded from {}",
            dir.display()
        );

        Ok(Self::new(
            CharacterOracleImpl::from_rows(characters),
            SkillOracleImpl::from_rows(skills),
            BuffOracleImpl::from_rows(buffs),
            TablesOracleImpl::from(tables),
            rules,
        ))
    }

    /// Create with the fixed test catalogs.
    pub fn test_runner() -> Self {
        Self::new(
            CharacterOracleImpl::test_characters(),
            SkillOracleImpl::test_skills(),
            BuffOracleImpl::test_buffs(),
            TablesOracleImpl::standard(),
            SimConfig::default(),
        )
    }

    /// Run one battle to its terminal outcome and package the result.
    pub fn run(&self, roster: &[RosterEntry], seed: u64) -> Result<BattleReport> {
        info!(seed, combatants = roster.len(), "battle starting");

        let env = BattleEnv::new(
            &self.characters,
            &self.skills,
            &self.buffs,
            &self.tables,
            &self.rules,
        );

        let mut simulation = Simulation::new(env, roster, seed)?;
        let outcome = simulation.run()?;
        let rounds = simulation.rounds();

        debug!(events = simulation.log().len(), rounds, "log extracted");
        info!(?outcome, rounds, "battle finished");

        Ok(BattleReport::new(seed, rounds, outcome, simulation.into_log()))
    }
}

fn load_err(error: impl std::fmt::Display) -> RuntimeError {
    RuntimeError::ContentLoad(error.to_string())
}
