//! Skill catalog implementing [`battle_core::SkillOracle`].

use std::collections::HashMap;
use std::sync::Arc;

use battle_core::{
    BuffGrant, BuffRecipient, BuffRowId, Chance, Element, SkillOracle, SkillRow, SkillRowId,
    Targeting,
};

/// SkillOracle implementation backed by an in-memory catalog.
#[derive(Debug)]
pub struct SkillOracleImpl {
    rows: HashMap<SkillRowId, Arc<SkillRow>>,
}

impl SkillOracleImpl {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Add a skill row.
    pub fn add_row(&mut self, row: SkillRow) {
        self.rows.insert(row.id, Arc::new(row));
    }

    /// Build from a loaded catalog.
    pub fn from_rows(rows: Vec<SkillRow>) -> Self {
        let mut oracle = Self::new();
        for row in rows {
            oracle.add_row(row);
        }
        oracle
    }

    /// Create with basic test skills.
    pub fn test_skills() -> Self {
        let mut oracle = Self::new();

        // Skill 0: guaranteed fallback strike
        oracle.add_row(SkillRow::basic_attack(0, 10));

        // Skill 1: hard single-target hit, fire
        oracle.add_row(SkillRow {
            id: SkillRowId(1),
            name: "crushing-blow".into(),
            element: Element::Fire,
            power: 25,
            chance_min: Chance::from_percent(30),
            chance_max: Chance::from_percent(60),
            targeting: Targeting::FirstEnemy,
            buff: None,
        });

        // Skill 2: weak hit that rallies the user
        oracle.add_row(SkillRow {
            id: SkillRowId(2),
            name: "rallying-cry".into(),
            element: Element::Neutral,
            power: 5,
            chance_min: Chance::from_percent(40),
            chance_max: Chance::from_percent(40),
            targeting: Targeting::FirstEnemy,
            buff: Some(BuffGrant {
                buff: BuffRowId(1),
                recipient: BuffRecipient::User,
            }),
        });

        // Skill 3: sweep that cracks every struck target's guard
        oracle.add_row(SkillRow {
            id: SkillRowId(3),
            name: "armor-shatter".into(),
            element: Element::Earth,
            power: 15,
            chance_min: Chance::from_percent(25),
            chance_max: Chance::from_percent(45),
            targeting: Targeting::AllEnemies,
            buff: Some(BuffGrant {
                buff: BuffRowId(2),
                recipient: BuffRecipient::StruckTargets,
            }),
        });

        oracle
    }
}

impl Default for SkillOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillOracle for SkillOracleImpl {
    fn row(&self, id: SkillRowId) -> Option<Arc<SkillRow>> {
        self.rows.get(&id).cloned()
    }
}
