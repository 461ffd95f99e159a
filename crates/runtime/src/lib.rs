//! Host-side harness for deterministic battle simulations.
//!
//! This crate wires loaded content into the battle-core oracle traits,
//! drives a simulation to its terminal outcome, and packages the event log
//! into an externally consumable [`BattleReport`]. Observability lives here:
//! the core stays silent, the runtime traces battle boundaries and rounds.

pub mod battle;
pub mod error;
pub mod oracle;
pub mod report;

pub use battle::BattleRunner;
pub use error::{Result, RuntimeError};
pub use oracle::{BuffOracleImpl, CharacterOracleImpl, SkillOracleImpl, TablesOracleImpl};
pub use report::BattleReport;
