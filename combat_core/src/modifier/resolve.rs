//! Final stat resolution - base stats + aggregated modifiers

use super::AggregatedModifiers;
use crate::formulas::constants::{ATTACK_SPEED_CAP, CRIT_CHANCE_CAP};
use crate::stats::BaseStats;
use serde::{Deserialize, Serialize};

/// Fully-resolved combat statistics for one champion build.
///
/// Immutable once produced. Percent-like fields are decimals;
/// `bonus_attack_damage` is final AD minus base AD, for consumers that
/// scale off bonus AD only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinalStats {
    pub health: f64,
    pub mana: f64,
    pub attack_damage: f64,
    pub bonus_attack_damage: f64,
    pub ability_power: f64,
    pub armor: f64,
    pub magic_resist: f64,
    /// Attacks per second, capped at 2.5
    pub attack_speed: f64,
    /// Decimal, capped at 1.0
    pub crit_chance: f64,
    /// Bonus crit damage on top of the 175% base multiplier
    pub crit_bonus_damage: f64,
    pub lethality: f64,
    pub flat_armor_pen: f64,
    pub percent_armor_pen: f64,
    pub flat_magic_pen: f64,
    pub percent_magic_pen: f64,
    pub movement_speed: f64,
    pub ability_haste: f64,
    /// Derived from ability haste: haste / (100 + haste)
    pub cooldown_reduction: f64,
    pub heal_shield_power: f64,
    pub health_regen: f64,
    pub mana_regen: f64,
}

/// Round to a fixed number of decimal places
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Resolve base stats and aggregated modifiers into final stats.
///
/// Per stat family the rule is `(base + flat) x (1 + percent)`, with
/// the exceptions documented on each step below. Rounding happens once
/// here, never mid-computation.
///
/// Adaptive force routing runs before anything else and is a one-shot
/// decision: the comparison uses the flat AD and flat AP bonuses
/// accumulated in the same aggregation pass, falling back to base AD
/// versus base AP when neither has a flat bonus. Ties go to attack
/// damage.
pub fn resolve(base: &BaseStats, aggregated: &AggregatedModifiers) -> FinalStats {
    let mut flat_ad = aggregated.flat_attack_damage;
    let mut flat_ap = aggregated.flat_ability_power;

    if aggregated.adaptive_force > 0.0 {
        let favors_attack_damage = if flat_ad == 0.0 && flat_ap == 0.0 {
            base.attack_damage >= base.ability_power
        } else {
            flat_ad >= flat_ap
        };
        if favors_attack_damage {
            flat_ad += aggregated.adaptive_force;
        } else {
            flat_ap += aggregated.adaptive_force;
        }
    }

    let attack_damage =
        (base.attack_damage + flat_ad) * (1.0 + aggregated.percent_attack_damage);
    let bonus_attack_damage = attack_damage - base.attack_damage;
    let ability_power =
        (base.ability_power + flat_ap) * (1.0 + aggregated.percent_ability_power);

    // Attack speed anchors on the level-1 rate: level growth and item
    // percentages stack additively inside one multiplier.
    let attack_speed = if base.attack_speed_level1 > 0.0 {
        let level_factor = base.attack_speed / base.attack_speed_level1 - 1.0;
        (base.attack_speed_level1 * (1.0 + level_factor + aggregated.percent_attack_speed))
            .min(ATTACK_SPEED_CAP)
    } else {
        0.0
    };

    let crit_chance = (base.crit_chance + aggregated.crit_chance).min(CRIT_CHANCE_CAP);

    let cooldown_reduction = aggregated.ability_haste / (100.0 + aggregated.ability_haste);

    FinalStats {
        health: round_to(
            (base.health + aggregated.flat_health) * (1.0 + aggregated.percent_health),
            1,
        ),
        mana: round_to(
            (base.mana + aggregated.flat_mana) * (1.0 + aggregated.percent_mana),
            1,
        ),
        attack_damage: round_to(attack_damage, 1),
        bonus_attack_damage: round_to(bonus_attack_damage, 1),
        ability_power: round_to(ability_power, 1),
        armor: round_to(
            (base.armor + aggregated.flat_armor) * (1.0 + aggregated.percent_armor),
            1,
        ),
        magic_resist: round_to(
            (base.magic_resist + aggregated.flat_magic_resist)
                * (1.0 + aggregated.percent_magic_resist),
            1,
        ),
        attack_speed: round_to(attack_speed, 3),
        crit_chance: round_to(crit_chance, 4),
        crit_bonus_damage: round_to(aggregated.crit_bonus_damage, 4),
        lethality: round_to(aggregated.lethality, 1),
        flat_armor_pen: round_to(aggregated.flat_armor_pen, 1),
        percent_armor_pen: round_to(aggregated.percent_armor_pen, 4),
        flat_magic_pen: round_to(aggregated.flat_magic_pen, 1),
        percent_magic_pen: round_to(aggregated.percent_magic_pen, 4),
        movement_speed: round_to(
            (base.move_speed + aggregated.flat_move_speed)
                * (1.0 + aggregated.percent_move_speed),
            1,
        ),
        ability_haste: round_to(aggregated.ability_haste, 1),
        cooldown_reduction: round_to(cooldown_reduction, 4),
        heal_shield_power: round_to(aggregated.heal_shield_power, 4),
        health_regen: round_to(base.health_regen * (1.0 + aggregated.percent_health_regen), 3),
        mana_regen: round_to(base.mana_regen * (1.0 + aggregated.percent_mana_regen), 3),
    }
}
