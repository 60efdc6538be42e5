//! Base stat derivation from per-level growth data

use crate::formulas::constants::{MAX_LEVEL, MIN_LEVEL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stat derivation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatError {
    #[error("champion level {0} is outside the valid range 1-18")]
    InvalidLevel(u8),
}

/// Raw level-1 values and per-level growth rates for one champion.
///
/// Loaded once per champion definition and treated as read-only. Field
/// names follow the Data Dragon convention; `attack_speed_per_level`
/// is a percent growth of the level-1 attack rate, not a flat delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthStats {
    pub hp: f64,
    pub hp_per_level: f64,
    #[serde(default)]
    pub mp: f64,
    #[serde(default)]
    pub mp_per_level: f64,
    pub attack_damage: f64,
    pub attack_damage_per_level: f64,
    pub armor: f64,
    pub armor_per_level: f64,
    pub magic_resist: f64,
    pub magic_resist_per_level: f64,
    /// Base attack rate at level 1 (attacks per second)
    pub attack_speed: f64,
    /// Percent growth per level of the attack rate (e.g. 3.33 = +3.33%/level)
    pub attack_speed_per_level: f64,
    #[serde(default)]
    pub hp_regen: f64,
    #[serde(default)]
    pub hp_regen_per_level: f64,
    #[serde(default)]
    pub mp_regen: f64,
    #[serde(default)]
    pub mp_regen_per_level: f64,
    /// Base critical strike chance as a decimal (almost always zero)
    #[serde(default)]
    pub crit: f64,
    #[serde(default)]
    pub crit_per_level: f64,
    pub move_speed: f64,
    pub attack_range: f64,
}

/// Level-specific base stat snapshot derived from [`GrowthStats`].
///
/// Immutable once computed. `attack_speed_level1` is retained alongside
/// the level-scaled rate because modifier resolution anchors attack
/// speed multipliers on the level-1 value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub level: u8,
    pub health: f64,
    pub mana: f64,
    pub attack_damage: f64,
    /// Base ability power; zero unless the champion definition says otherwise
    pub ability_power: f64,
    pub armor: f64,
    pub magic_resist: f64,
    /// Level-scaled attack rate
    pub attack_speed: f64,
    /// Level-1 attack rate, the multiplicative anchor for attack speed bonuses
    pub attack_speed_level1: f64,
    pub crit_chance: f64,
    pub health_regen: f64,
    pub mana_regen: f64,
    pub move_speed: f64,
    pub attack_range: f64,
}

/// Derive a champion's base stats at a given level.
///
/// Linear attributes scale as `base + per_level * (level - 1)`; the
/// attack rate uses percent growth of the level-1 rate. Movement speed
/// and attack range are level-invariant.
pub fn derive_base_stats(growth: &GrowthStats, level: u8) -> Result<BaseStats, StatError> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(StatError::InvalidLevel(level));
    }

    let steps = (level - 1) as f64;
    let linear = |base: f64, per_level: f64| base + per_level * steps;

    Ok(BaseStats {
        level,
        health: linear(growth.hp, growth.hp_per_level),
        mana: linear(growth.mp, growth.mp_per_level),
        attack_damage: linear(growth.attack_damage, growth.attack_damage_per_level),
        ability_power: 0.0,
        armor: linear(growth.armor, growth.armor_per_level),
        magic_resist: linear(growth.magic_resist, growth.magic_resist_per_level),
        attack_speed: growth.attack_speed * (1.0 + growth.attack_speed_per_level / 100.0 * steps),
        attack_speed_level1: growth.attack_speed,
        crit_chance: linear(growth.crit, growth.crit_per_level),
        health_regen: linear(growth.hp_regen, growth.hp_regen_per_level),
        mana_regen: linear(growth.mp_regen, growth.mp_regen_per_level),
        move_speed: growth.move_speed,
        attack_range: growth.attack_range,
    })
}
