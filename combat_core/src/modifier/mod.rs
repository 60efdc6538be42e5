//! Modifier aggregation and final stat resolution

mod resolve;

pub use resolve::{resolve, FinalStats};

use crate::types::{ModifierSet, StatKind};

/// Keyed sum of every modifier source on a build.
///
/// Collected from all equipped items and runes before resolution.
/// `adaptive_force` stays unresolved here; it is routed into flat
/// attack damage or flat ability power by [`resolve`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedModifiers {
    // === Resources ===
    pub flat_health: f64,
    pub percent_health: f64,
    pub flat_mana: f64,
    pub percent_mana: f64,

    // === Offense ===
    pub flat_attack_damage: f64,
    pub percent_attack_damage: f64,
    pub flat_ability_power: f64,
    pub percent_ability_power: f64,
    pub percent_attack_speed: f64,
    pub crit_chance: f64,
    pub crit_bonus_damage: f64,

    // === Penetration ===
    pub lethality: f64,
    pub flat_armor_pen: f64,
    pub percent_armor_pen: f64,
    pub flat_magic_pen: f64,
    pub percent_magic_pen: f64,

    // === Defense ===
    pub flat_armor: f64,
    pub percent_armor: f64,
    pub flat_magic_resist: f64,
    pub percent_magic_resist: f64,

    // === Utility ===
    pub flat_move_speed: f64,
    pub percent_move_speed: f64,
    pub ability_haste: f64,
    pub heal_shield_power: f64,
    pub percent_health_regen: f64,
    pub percent_mana_regen: f64,

    /// Summed adaptive force, not yet routed to AD or AP
    pub adaptive_force: f64,
}

impl AggregatedModifiers {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        AggregatedModifiers::default()
    }

    /// Apply one contribution to the accumulator
    pub fn apply(&mut self, kind: StatKind, value: f64) {
        match kind {
            StatKind::FlatHealth => self.flat_health += value,
            StatKind::PercentHealth => self.percent_health += value,
            StatKind::FlatMana => self.flat_mana += value,
            StatKind::PercentMana => self.percent_mana += value,
            StatKind::FlatAttackDamage => self.flat_attack_damage += value,
            StatKind::PercentAttackDamage => self.percent_attack_damage += value,
            StatKind::FlatAbilityPower => self.flat_ability_power += value,
            StatKind::PercentAbilityPower => self.percent_ability_power += value,
            StatKind::PercentAttackSpeed => self.percent_attack_speed += value,
            StatKind::CritChance => self.crit_chance += value,
            StatKind::CritBonusDamage => self.crit_bonus_damage += value,
            StatKind::Lethality => self.lethality += value,
            StatKind::FlatArmorPenetration => self.flat_armor_pen += value,
            StatKind::PercentArmorPenetration => self.percent_armor_pen += value,
            StatKind::FlatMagicPenetration => self.flat_magic_pen += value,
            StatKind::PercentMagicPenetration => self.percent_magic_pen += value,
            StatKind::FlatArmor => self.flat_armor += value,
            StatKind::PercentArmor => self.percent_armor += value,
            StatKind::FlatMagicResist => self.flat_magic_resist += value,
            StatKind::PercentMagicResist => self.percent_magic_resist += value,
            StatKind::FlatMovementSpeed => self.flat_move_speed += value,
            StatKind::PercentMovementSpeed => self.percent_move_speed += value,
            StatKind::AbilityHaste => self.ability_haste += value,
            StatKind::HealShieldPower => self.heal_shield_power += value,
            StatKind::PercentHealthRegen => self.percent_health_regen += value,
            StatKind::PercentManaRegen => self.percent_mana_regen += value,
            StatKind::AdaptiveForce => self.adaptive_force += value,
        }
    }

    /// Merge an entire modifier set into the accumulator
    pub fn merge_set(&mut self, set: &ModifierSet) {
        for (kind, value) in set.iter() {
            self.apply(*kind, *value);
        }
    }
}

/// Keyed sum across all supplied modifier sources.
///
/// Commutative and associative: splitting the sources into batches and
/// merging the batches yields the same accumulator as one call.
pub fn aggregate(sources: &[ModifierSet]) -> AggregatedModifiers {
    let mut aggregated = AggregatedModifiers::new();
    for source in sources {
        aggregated.merge_set(source);
    }
    aggregated
}
