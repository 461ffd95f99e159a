//! Content loaders for reading rule tables from files.
//!
//! RON carries the entity catalogs (characters, skills, buffs); TOML carries
//! the balance tables and simulation rules. Loaders validate identifier
//! uniqueness so a catalog can be handed to an oracle as-is.

pub mod catalog;
pub mod config;
pub mod tables;

pub use catalog::{BuffCatalogLoader, CharacterCatalogLoader, SkillCatalogLoader};
pub use config::RulesLoader;
pub use tables::{BalanceTable, TablesLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
