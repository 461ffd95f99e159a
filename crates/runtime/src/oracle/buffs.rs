//! Buff catalog implementing [`battle_core::BuffOracle`].

use std::collections::HashMap;
use std::sync::Arc;

use battle_core::{
    BuffGroupId, BuffOracle, BuffRank, BuffRow, BuffRowId, StatModifiers,
};

/// BuffOracle implementation backed by an in-memory catalog.
#[derive(Debug)]
pub struct BuffOracleImpl {
    rows: HashMap<BuffRowId, Arc<BuffRow>>,
}

impl BuffOracleImpl {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Add a buff row.
    pub fn add_row(&mut self, row: BuffRow) {
        self.rows.insert(row.id, Arc::new(row));
    }

    /// Build from a loaded catalog.
    pub fn from_rows(rows: Vec<BuffRow>) -> Self {
        let mut oracle = Self::new();
        for row in rows {
            oracle.add_row(row);
        }
        oracle
    }

    /// Create with basic test buffs.
    pub fn test_buffs() -> Self {
        let mut oracle = Self::new();

        // Buff 1: offense up, short
        oracle.add_row(BuffRow {
            id: BuffRowId(1),
            name: "battle-focus".into(),
            group: BuffGroupId(1),
            rank: BuffRank(5),
            duration: 2,
            modifiers: StatModifiers {
                atk: 5,
                ..StatModifiers::NONE
            },
        });

        // Buff 2: guard cracked
        oracle.add_row(BuffRow {
            id: BuffRowId(2),
            name: "sundered-guard".into(),
            group: BuffGroupId(2),
            rank: BuffRank(3),
            duration: 2,
            modifiers: StatModifiers {
                def: -3,
                ..StatModifiers::NONE
            },
        });

        oracle
    }
}

impl Default for BuffOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl BuffOracle for BuffOracleImpl {
    fn row(&self, id: BuffRowId) -> Option<Arc<BuffRow>> {
        self.rows.get(&id).cloned()
    }
}
