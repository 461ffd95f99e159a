//! Entity catalog loaders.
//!
//! Each catalog is a RON sequence of battle-core row types. Loaders reject
//! duplicate identifiers so downstream oracles can index rows without
//! last-one-wins surprises.

use std::collections::BTreeSet;
use std::path::Path;

use battle_core::{BuffRow, CharacterRow, SkillRow};

use crate::loaders::{LoadResult, read_file};

/// Loader for the character catalog from RON files.
pub struct CharacterCatalogLoader;

impl CharacterCatalogLoader {
    /// Load a character catalog.
    ///
    /// RON format: `Vec<CharacterRow>`
    pub fn load(path: &Path) -> LoadResult<Vec<CharacterRow>> {
        let content = read_file(path)?;

        let rows: Vec<CharacterRow> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for row in &rows {
            if !seen.insert(row.id) {
                anyhow::bail!("Duplicate character row id {} in {}", row.id, path.display());
            }
        }

        Ok(rows)
    }
}

/// Loader for the skill catalog from RON files.
pub struct SkillCatalogLoader;

impl SkillCatalogLoader {
    /// Load a skill catalog.
    ///
    /// RON format: `Vec<SkillRow>`
    pub fn load(path: &Path) -> LoadResult<Vec<SkillRow>> {
        let content = read_file(path)?;

        let rows: Vec<SkillRow> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for row in &rows {
            if !seen.insert(row.id) {
                anyhow::bail!("Duplicate skill row id {} in {}", row.id, path.display());
            }
            if row.chance_min > row.chance_max {
                anyhow::bail!(
                    "Skill row {}: chance_min exceeds chance_max in {}",
                    row.id,
                    path.display()
                );
            }
        }

        Ok(rows)
    }
}

/// Loader for the buff catalog from RON files.
pub struct BuffCatalogLoader;

impl BuffCatalogLoader {
    /// Load a buff catalog.
    ///
    /// RON format: `Vec<BuffRow>`
    pub fn load(path: &Path) -> LoadResult<Vec<BuffRow>> {
        let content = read_file(path)?;

        let rows: Vec<BuffRow> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse buff catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for row in &rows {
            if !seen.insert(row.id) {
                anyhow::bail!("Duplicate buff row id {} in {}", row.id, path.display());
            }
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{Chance, CharacterRowId, SkillRowId};
    use std::fs;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn character_catalog_round_trips_through_ron() {
        let rows = vec![CharacterRow::test_row(1), CharacterRow::test_row(2)];
        let encoded = ron::to_string(&rows).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "characters.ron", &encoded);

        let loaded = CharacterCatalogLoader::load(&path).unwrap();
        assert_eq!(loaded, rows);
        assert_eq!(loaded[0].id, CharacterRowId(1));
    }

    #[test]
    fn duplicate_character_ids_are_rejected() {
        let rows = vec![CharacterRow::test_row(1), CharacterRow::test_row(1)];
        let encoded = ron::to_string(&rows).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "characters.ron", &encoded);

        let error = CharacterCatalogLoader::load(&path).unwrap_err();
        assert!(error.to_string().contains("Duplicate character row id"));
    }

    #[test]
    fn skill_catalog_round_trips_through_ron() {
        let rows = vec![
            SkillRow::basic_attack(0, 10),
            SkillRow::basic_attack(1, 25),
        ];
        let encoded = ron::to_string(&rows).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "skills.ron", &encoded);

        let loaded = SkillCatalogLoader::load(&path).unwrap();
        assert_eq!(loaded, rows);
        assert_eq!(loaded[1].id, SkillRowId(1));
    }

    #[test]
    fn inverted_chance_range_is_rejected() {
        let mut row = SkillRow::basic_attack(0, 10);
        row.chance_min = Chance::CERTAIN;
        row.chance_max = Chance::from_percent(10);
        let encoded = ron::to_string(&vec![row]).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "skills.ron", &encoded);

        let error = SkillCatalogLoader::load(&path).unwrap_err();
        assert!(error.to_string().contains("chance_min exceeds chance_max"));
    }

    #[test]
    fn buff_catalog_round_trips_through_ron() {
        let rows = vec![
            battle_core::BuffRow::test_row(1, 1, 5, 3),
            battle_core::BuffRow::test_row(2, 2, 1, 2),
        ];
        let encoded = ron::to_string(&rows).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "buffs.ron", &encoded);

        let loaded = BuffCatalogLoader::load(&path).unwrap();
        assert_eq!(loaded, rows);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.ron");

        let error = CharacterCatalogLoader::load(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to read file"));
    }
}
