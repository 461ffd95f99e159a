//! Data-driven battle content definitions and loaders.
//!
//! This crate provides loaders for the static rule tables consumed by the
//! simulation oracles:
//! - Character catalogs (data-driven via RON)
//! - Skill catalogs (data-driven via RON)
//! - Buff catalogs (data-driven via RON)
//! - Balance tables (data-driven via TOML)
//! - Simulation rules (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in simulation
//! state. All loaders use battle-core types directly with serde for RON/TOML
//! deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BalanceTable, BuffCatalogLoader, CharacterCatalogLoader, RulesLoader, SkillCatalogLoader,
    TablesLoader,
};
