//! Externally consumable record of one finished battle.

use battle_core::{BattleOutcome, EventLog};

/// Everything downstream consumers need from a battle: the inputs that make
/// it replayable (seed), the terminal result, the full event log, and a
/// SHA-256 commitment over the log for deterministic-result recording.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BattleReport {
    pub seed: u64,
    pub rounds: u32,
    pub outcome: BattleOutcome,
    /// Hex-encoded SHA-256 digest of the serialized event log. Two replays
    /// of the same battle produce the same digest.
    pub digest: String,
    pub log: EventLog,
}

impl BattleReport {
    pub fn new(seed: u64, rounds: u32, outcome: BattleOutcome, log: EventLog) -> Self {
        let digest = hex::encode(log.digest());
        Self {
            seed,
            rounds,
            outcome,
            digest,
            log,
        }
    }

    /// Pretty-printed JSON for display or auditing.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
