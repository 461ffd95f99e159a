/// Simulation configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Hard ceiling on simulated rounds; exhausting it resolves the battle
    /// to a draw.
    pub max_rounds: u32,
}

impl SimConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum skills per combatant (guaranteed fallback included).
    pub const MAX_SKILLS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_ROUNDS: u32 = 50;

    pub fn new() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
        }
    }

    pub fn with_max_rounds(max_rounds: u32) -> Self {
        Self { max_rounds }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::env::ConfigOracle for SimConfig {
    fn max_rounds(&self) -> u32 {
        self.max_rounds
    }
}
