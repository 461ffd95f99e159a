use crate::config::SimConfig;

/// Oracle providing runtime-tunable simulation rules.
pub trait ConfigOracle: Send + Sync {
    /// Hard ceiling on the number of rounds; once exhausted, the battle
    /// resolves to a draw. Guarantees termination even for rosters that
    /// cannot damage each other.
    fn max_rounds(&self) -> u32 {
        SimConfig::DEFAULT_MAX_ROUNDS
    }
}
