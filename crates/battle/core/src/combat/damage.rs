//! Damage calculation.

use crate::env::CombatParams;

/// Calculate damage for a connecting strike.
///
/// # Formula
///
/// ```text
/// base_damage = skill_power + ATK
/// reduced     = base_damage - (DEF / def_divisor)
/// scaled      = reduced × element_percent / 100
/// final       = max(scaled, min_damage)
///
/// if critical:
///     final *= crit_multiplier
/// ```
///
/// Integer arithmetic throughout; intermediate subtraction saturates at zero
/// before the floor is applied.
///
/// # Arguments
///
/// * `power` - The skill's power value
/// * `atk` - Attacker's effective ATK
/// * `def` - Defender's effective DEF
/// * `element_percent` - Elemental chart percentage (100 = neutral)
/// * `is_critical` - Whether the strike is a critical hit
/// * `params` - Balance parameters
pub fn calculate_damage(
    power: u32,
    atk: u32,
    def: u32,
    element_percent: u32,
    is_critical: bool,
    params: &CombatParams,
) -> u32 {
    let base_damage = power + atk;

    let def_reduction = def / params.def_divisor.max(1);
    let reduced = base_damage.saturating_sub(def_reduction);

    let scaled = (reduced as u64 * element_percent as u64 / 100) as u32;

    let mut final_damage = scaled.max(params.min_damage);
    if is_critical {
        final_damage *= params.crit_multiplier;
    }

    final_damage
}
