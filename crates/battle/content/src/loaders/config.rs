//! Simulation rules loader.

use std::path::Path;

use battle_core::SimConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for simulation rules from TOML files.
///
/// ```toml
/// max_rounds = 50
/// ```
pub struct RulesLoader;

impl RulesLoader {
    /// Load simulation rules.
    pub fn load(path: &Path) -> LoadResult<SimConfig> {
        let content = read_file(path)?;

        let config: SimConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse simulation rules TOML: {}", e))?;

        if config.max_rounds == 0 {
            anyhow::bail!(
                "Simulation rules {}: max_rounds must be non-zero",
                path.display()
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn rules_parse_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        fs::write(&path, "max_rounds = 24\n").unwrap();

        let config = RulesLoader::load(&path).unwrap();
        assert_eq!(config.max_rounds, 24);
    }

    #[test]
    fn zero_round_ceiling_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        fs::write(&path, "max_rounds = 0\n").unwrap();

        assert!(RulesLoader::load(&path).is_err());
    }
}
