//! Core stat vocabulary - the closed set of modifier keys

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A stat modifier key that an item or rune can contribute to.
///
/// Flat modifiers add to the base value before percent multipliers;
/// percent modifiers are decimals (0.10 = 10%). `AdaptiveForce` is a
/// special key that is routed into flat attack damage or flat ability
/// power at resolution time, never applied directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    FlatHealth,
    PercentHealth,
    FlatMana,
    PercentMana,
    FlatAttackDamage,
    PercentAttackDamage,
    FlatAbilityPower,
    PercentAbilityPower,
    FlatArmor,
    PercentArmor,
    FlatMagicResist,
    PercentMagicResist,
    PercentAttackSpeed,
    CritChance,
    CritBonusDamage,
    Lethality,
    FlatArmorPenetration,
    PercentArmorPenetration,
    FlatMagicPenetration,
    PercentMagicPenetration,
    FlatMovementSpeed,
    PercentMovementSpeed,
    AbilityHaste,
    HealShieldPower,
    PercentHealthRegen,
    PercentManaRegen,
    AdaptiveForce,
}

impl StatKind {
    /// Get all stat kinds
    pub fn all() -> &'static [StatKind] {
        &[
            StatKind::FlatHealth,
            StatKind::PercentHealth,
            StatKind::FlatMana,
            StatKind::PercentMana,
            StatKind::FlatAttackDamage,
            StatKind::PercentAttackDamage,
            StatKind::FlatAbilityPower,
            StatKind::PercentAbilityPower,
            StatKind::FlatArmor,
            StatKind::PercentArmor,
            StatKind::FlatMagicResist,
            StatKind::PercentMagicResist,
            StatKind::PercentAttackSpeed,
            StatKind::CritChance,
            StatKind::CritBonusDamage,
            StatKind::Lethality,
            StatKind::FlatArmorPenetration,
            StatKind::PercentArmorPenetration,
            StatKind::FlatMagicPenetration,
            StatKind::PercentMagicPenetration,
            StatKind::FlatMovementSpeed,
            StatKind::PercentMovementSpeed,
            StatKind::AbilityHaste,
            StatKind::HealShieldPower,
            StatKind::PercentHealthRegen,
            StatKind::PercentManaRegen,
            StatKind::AdaptiveForce,
        ]
    }

    /// Whether this kind is a percent-like decimal rather than a flat amount
    pub fn is_percent(&self) -> bool {
        matches!(
            self,
            StatKind::PercentHealth
                | StatKind::PercentMana
                | StatKind::PercentAttackDamage
                | StatKind::PercentAbilityPower
                | StatKind::PercentArmor
                | StatKind::PercentMagicResist
                | StatKind::PercentAttackSpeed
                | StatKind::CritChance
                | StatKind::CritBonusDamage
                | StatKind::PercentArmorPenetration
                | StatKind::PercentMagicPenetration
                | StatKind::PercentMovementSpeed
                | StatKind::HealShieldPower
                | StatKind::PercentHealthRegen
                | StatKind::PercentManaRegen
        )
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The stat contributions of a single source (one item, or the stat
/// shards of one rune). Keys are not unique across sources; duplicate
/// keys sum during aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierSet(HashMap<StatKind, f64>);

impl ModifierSet {
    /// Create an empty modifier set
    pub fn new() -> Self {
        ModifierSet::default()
    }

    /// Add a contribution, summing with any existing value for the key
    pub fn add(&mut self, kind: StatKind, value: f64) {
        *self.0.entry(kind).or_insert(0.0) += value;
    }

    /// Builder-style add, for test and data construction
    pub fn with(mut self, kind: StatKind, value: f64) -> Self {
        self.add(kind, value);
        self
    }

    /// Get the magnitude for a key (zero if absent)
    pub fn get(&self, kind: StatKind) -> f64 {
        self.0.get(&kind).copied().unwrap_or(0.0)
    }

    /// Iterate over all contributions
    pub fn iter(&self) -> impl Iterator<Item = (&StatKind, &f64)> {
        self.0.iter()
    }

    /// Merge another set into this one, summing shared keys
    pub fn merge(&mut self, other: &ModifierSet) {
        for (kind, value) in other.iter() {
            self.add(*kind, *value);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(StatKind, f64)> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = (StatKind, f64)>>(iter: I) -> Self {
        let mut set = ModifierSet::new();
        for (kind, value) in iter {
            set.add(kind, value);
        }
        set
    }
}
