//! Balance table loader.

use std::path::Path;

use battle_core::{CombatParams, ElementChart};

use crate::loaders::{LoadResult, read_file};

/// Combined balance tables as stored in one TOML file.
///
/// ```toml
/// [combat]
/// def_divisor = 2
/// crit_multiplier = 2
/// min_damage = 1
///
/// [elements]
/// advantage = 150
/// disadvantage = 75
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BalanceTable {
    pub combat: CombatParams,
    pub elements: ElementChart,
}

impl Default for BalanceTable {
    fn default() -> Self {
        Self {
            combat: CombatParams::standard(),
            elements: ElementChart::standard(),
        }
    }
}

/// Loader for balance tables from TOML files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load balance tables.
    pub fn load(path: &Path) -> LoadResult<BalanceTable> {
        let content = read_file(path)?;

        let table: BalanceTable = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse balance table TOML: {}", e))?;

        if table.combat.def_divisor == 0 {
            anyhow::bail!("Balance table {}: def_divisor must be non-zero", path.display());
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn balance_table_parses_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("balance.toml");
        fs::write(
            &path,
            r#"
[combat]
def_divisor = 4
crit_multiplier = 3
min_damage = 0

[elements]
advantage = 120
disadvantage = 90
"#,
        )
        .unwrap();

        let table = TablesLoader::load(&path).unwrap();
        assert_eq!(table.combat.def_divisor, 4);
        assert_eq!(table.combat.crit_multiplier, 3);
        assert_eq!(table.elements.advantage, 120);
    }

    #[test]
    fn zero_divisor_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("balance.toml");
        fs::write(
            &path,
            r#"
[combat]
def_divisor = 0
crit_multiplier = 2
min_damage = 1

[elements]
advantage = 150
disadvantage = 75
"#,
        )
        .unwrap();

        let error = TablesLoader::load(&path).unwrap_err();
        assert!(error.to_string().contains("def_divisor"));
    }
}
