use crate::state::Element;

/// Oracle providing balance tables.
///
/// This oracle defines tunable combat mechanics like damage reduction and the
/// elemental advantage chart. It does NOT define entity data (use
/// `CharacterOracle`, `SkillOracle`, `BuffOracle` for that).
pub trait TablesOracle: Send + Sync {
    fn combat(&self) -> CombatParams;
    fn elements(&self) -> ElementChart;
}

/// Tunable parameters of the damage formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatParams {
    /// Defense contributes `DEF / def_divisor` flat reduction.
    pub def_divisor: u32,
    /// Critical strikes multiply final damage by this factor.
    pub crit_multiplier: u32,
    /// Floor applied to every connecting strike.
    pub min_damage: u32,
}

impl CombatParams {
    pub const fn standard() -> Self {
        Self {
            def_divisor: 2,
            crit_multiplier: 2,
            min_damage: 1,
        }
    }
}

impl Default for CombatParams {
    fn default() -> Self {
        Self::standard()
    }
}

/// Elemental damage chart, expressed as percentages of base damage.
///
/// The advantage relation itself is the fixed cycle on [`Element`]; the chart
/// only tunes how strongly it bites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementChart {
    /// Percentage when the attack element beats the defense element.
    pub advantage: u32,
    /// Percentage when the defense element beats the attack element.
    pub disadvantage: u32,
}

impl ElementChart {
    pub const fn standard() -> Self {
        Self {
            advantage: 150,
            disadvantage: 75,
        }
    }

    /// Damage percentage for an attack of `attack` element landing on a
    /// defender of `defense` element (100 = neutral).
    pub fn percent(&self, attack: Element, defense: Element) -> u32 {
        if attack.beats(defense) {
            self.advantage
        } else if defense.beats(attack) {
            self.disadvantage
        } else {
            100
        }
    }
}

impl Default for ElementChart {
    fn default() -> Self {
        Self::standard()
    }
}
