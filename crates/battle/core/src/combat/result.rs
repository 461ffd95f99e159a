//! Strike result types and resolution.

use crate::env::CombatParams;

use super::damage::calculate_damage;

/// Outcome of one strike against one target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrikeOutcome {
    /// The target dodged; no damage, no side effects.
    Dodged,
    /// The strike connected.
    Hit,
    /// The strike connected as a critical hit.
    Critical,
}

/// Resolved result of one strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeResult {
    pub outcome: StrikeOutcome,
    /// Damage dealt (None on a dodge).
    pub damage: Option<u32>,
}

/// Resolve a complete strike from already-performed check draws.
///
/// A dodge wins over a critical: the strike misses entirely and deals no
/// damage.
///
/// # Arguments
///
/// * `power` - The skill's power value
/// * `atk` - Attacker's effective ATK
/// * `def` - Defender's effective DEF
/// * `element_percent` - Elemental chart percentage (100 = neutral)
/// * `is_critical` - Result of the critical check
/// * `is_dodged` - Result of the dodge check
/// * `params` - Balance parameters
pub fn resolve_strike(
    power: u32,
    atk: u32,
    def: u32,
    element_percent: u32,
    is_critical: bool,
    is_dodged: bool,
    params: &CombatParams,
) -> StrikeResult {
    if is_dodged {
        return StrikeResult {
            outcome: StrikeOutcome::Dodged,
            damage: None,
        };
    }

    let damage = calculate_damage(power, atk, def, element_percent, is_critical, params);

    StrikeResult {
        outcome: if is_critical {
            StrikeOutcome::Critical
        } else {
            StrikeOutcome::Hit
        },
        damage: Some(damage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dodge_wins_over_critical() {
        let result = resolve_strike(10, 10, 0, 100, true, true, &CombatParams::standard());
        assert_eq!(result.outcome, StrikeOutcome::Dodged);
        assert_eq!(result.damage, None);
    }

    #[test]
    fn connecting_strike_carries_damage() {
        let result = resolve_strike(10, 10, 0, 100, false, false, &CombatParams::standard());
        assert_eq!(result.outcome, StrikeOutcome::Hit);
        assert_eq!(result.damage, Some(20));
    }

    #[test]
    fn critical_strike_doubles() {
        let result = resolve_strike(10, 10, 0, 100, true, false, &CombatParams::standard());
        assert_eq!(result.outcome, StrikeOutcome::Critical);
        assert_eq!(result.damage, Some(40));
    }
}
