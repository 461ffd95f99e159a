//! Balance tables implementing [`battle_core::TablesOracle`].

use battle_core::{CombatParams, ElementChart, TablesOracle};
use battle_content::BalanceTable;

/// TablesOracle implementation holding one set of balance parameters.
#[derive(Debug, Clone, Copy)]
pub struct TablesOracleImpl {
    combat: CombatParams,
    elements: ElementChart,
}

impl TablesOracleImpl {
    pub fn new(combat: CombatParams, elements: ElementChart) -> Self {
        Self { combat, elements }
    }

    /// Create with the standard balance values.
    pub fn standard() -> Self {
        Self::new(CombatParams::standard(), ElementChart::standard())
    }
}

impl Default for TablesOracleImpl {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<BalanceTable> for TablesOracleImpl {
    fn from(table: BalanceTable) -> Self {
        Self::new(table.combat, table.elements)
    }
}

impl TablesOracle for TablesOracleImpl {
    fn combat(&self) -> CombatParams {
        self.combat
    }

    fn elements(&self) -> ElementChart {
        self.elements
    }
}
