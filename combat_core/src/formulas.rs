//! Combat formulas - Resistance mitigation, penetration, crit, attack timing
//!
//! All functions here are pure and total over their documented domain.
//!
//! Mitigation formula:
//! - resistance >= 0: multiplier = 100 / (100 + resistance)
//! - resistance < 0:  multiplier = 2 - 100 / (100 - resistance)
//!
//! The negative branch keeps the multiplier finite as resistance
//! approaches -100 and caps amplification below 2x.

use self::constants::{BASE_CRIT_DAMAGE_MULTIPLIER, MAX_LEVEL, MIN_LEVEL};

/// Combat calculation constants
pub mod constants {
    /// Minimum champion level
    pub const MIN_LEVEL: u8 = 1;

    /// Maximum champion level
    pub const MAX_LEVEL: u8 = 18;

    /// Base critical strike damage multiplier (175% of normal damage)
    pub const BASE_CRIT_DAMAGE_MULTIPLIER: f64 = 1.75;

    /// Hard cap on final attack speed (attacks per second)
    pub const ATTACK_SPEED_CAP: f64 = 2.5;

    /// Critical strike chance cap
    pub const CRIT_CHANCE_CAP: f64 = 1.0;
}

/// Calculate the damage multiplier for a given resistance value
///
/// Returns 1.0 at zero resistance, 0.5 at 100, and more than 1.0 for
/// negative resistance (amplified damage).
pub fn damage_multiplier(resistance: f64) -> f64 {
    if resistance >= 0.0 {
        100.0 / (100.0 + resistance)
    } else {
        2.0 - 100.0 / (100.0 - resistance)
    }
}

/// Calculate effective resistance after penetration
///
/// Percent penetration applies before flat penetration. The result may
/// be negative; callers must not clamp it, negative effective
/// resistance amplifies damage through [`damage_multiplier`].
pub fn effective_resistance(base_resistance: f64, percent_pen: f64, flat_pen: f64) -> f64 {
    base_resistance * (1.0 - percent_pen) - flat_pen
}

/// Critical strike damage multiplier, including any bonus crit damage
/// from items or runes (as a decimal, e.g. 0.15 for +15%)
pub fn critical_damage_multiplier(bonus_crit_damage: f64) -> f64 {
    BASE_CRIT_DAMAGE_MULTIPLIER + bonus_crit_damage
}

/// Seconds between basic attacks for a final attack speed
///
/// Returns positive infinity for a non-positive attack speed, which
/// signals "cannot attack" to the simulation.
pub fn attack_interval(attack_speed: f64) -> f64 {
    if attack_speed <= 0.0 {
        f64::INFINITY
    } else {
        1.0 / attack_speed
    }
}

/// Convert lethality to flat armor penetration
///
/// Conversion efficiency scales with attacker level: 60% at level 1 up
/// to 100% at level 18. Levels outside [1,18] are clamped.
pub fn lethality_penetration(lethality: f64, attacker_level: u8) -> f64 {
    let level = attacker_level.clamp(MIN_LEVEL, MAX_LEVEL) as f64;
    lethality * (0.6 + 0.4 * level / MAX_LEVEL as f64)
}
