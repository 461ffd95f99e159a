//! Character catalog implementing [`battle_core::CharacterOracle`].

use std::collections::HashMap;
use std::sync::Arc;

use battle_core::{
    CharacterOracle, CharacterRow, CharacterRowId, Element, SizeClass, SkillRowId, StatRange,
};

/// CharacterOracle implementation backed by an in-memory catalog.
#[derive(Debug)]
pub struct CharacterOracleImpl {
    rows: HashMap<CharacterRowId, Arc<CharacterRow>>,
}

impl CharacterOracleImpl {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Add a character row.
    pub fn add_row(&mut self, row: CharacterRow) {
        self.rows.insert(row.id, Arc::new(row));
    }

    /// Build from a loaded catalog.
    pub fn from_rows(rows: Vec<CharacterRow>) -> Self {
        let mut oracle = Self::new();
        for row in rows {
            oracle.add_row(row);
        }
        oracle
    }

    /// Create with a small fixed roster of test characters.
    ///
    /// Skill and buff identifiers refer to the fixtures in
    /// [`super::SkillOracleImpl::test_skills`] and
    /// [`super::BuffOracleImpl::test_buffs`].
    pub fn test_characters() -> Self {
        let mut oracle = Self::new();

        // Row 1: baseline melee fighter
        oracle.add_row(CharacterRow {
            id: CharacterRowId(1),
            name: "militia-recruit".into(),
            attack_element: Element::Neutral,
            defense_element: Element::Neutral,
            level: StatRange::new(1, 3),
            hp: StatRange::new(40, 60),
            atk: StatRange::new(8, 12),
            def: StatRange::new(2, 4),
            cri: StatRange::new(5, 10),
            dog: StatRange::new(5, 10),
            spd: StatRange::new(8, 12),
            attack_range: 1,
            size: SizeClass::Medium,
            run_speed: 4,
            default_skill: SkillRowId(0),
            skills: vec![SkillRowId(1)],
        });

        // Row 2: fire attacker with a self-buffing shout
        oracle.add_row(CharacterRow {
            id: CharacterRowId(2),
            name: "ember-duelist".into(),
            attack_element: Element::Fire,
            defense_element: Element::Fire,
            level: StatRange::new(2, 4),
            hp: StatRange::new(50, 70),
            atk: StatRange::new(10, 14),
            def: StatRange::new(1, 3),
            cri: StatRange::new(10, 15),
            dog: StatRange::new(5, 8),
            spd: StatRange::new(10, 14),
            attack_range: 1,
            size: SizeClass::Medium,
            run_speed: 5,
            default_skill: SkillRowId(0),
            skills: vec![SkillRowId(1), SkillRowId(2)],
        });

        // Row 3: earth tank with an armor-shattering sweep
        oracle.add_row(CharacterRow {
            id: CharacterRowId(3),
            name: "stone-warden".into(),
            attack_element: Element::Earth,
            defense_element: Element::Earth,
            level: StatRange::new(2, 4),
            hp: StatRange::new(80, 100),
            atk: StatRange::new(6, 9),
            def: StatRange::new(6, 10),
            cri: StatRange::new(2, 5),
            dog: StatRange::new(2, 5),
            spd: StatRange::new(5, 8),
            attack_range: 1,
            size: SizeClass::Large,
            run_speed: 3,
            default_skill: SkillRowId(0),
            skills: vec![SkillRowId(3)],
        });

        oracle
    }
}

impl Default for CharacterOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterOracle for CharacterOracleImpl {
    fn row(&self, id: CharacterRowId) -> Option<Arc<CharacterRow>> {
        self.rows.get(&id).cloned()
    }
}
