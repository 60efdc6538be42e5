//! Game data loading - champion growth tables and item/rune modifiers
//!
//! Data handles here are caller-owned; nothing in the crate caches
//! loaded tables behind module state.

use crate::stats::GrowthStats;
use crate::types::ModifierSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Game data loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("champion not found: {0}")]
    ChampionNotFound(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: T = toml::from_str(&content)?;
    Ok(value)
}

/// Parse a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let value: T = toml::from_str(content)?;
    Ok(value)
}

/// Load a JSON file and deserialize it
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: T = serde_json::from_str(&content)?;
    Ok(value)
}

/// Parse a JSON string and deserialize it
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let value: T = serde_json::from_str(content)?;
    Ok(value)
}

/// Champion name to growth data, loaded from a TOML table:
///
/// ```toml
/// [champions.ashe]
/// hp = 610.0
/// hp_per_level = 101.0
/// # ...
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChampionRoster {
    champions: HashMap<String, GrowthStats>,
}

impl ChampionRoster {
    /// Load a roster from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        load_toml(path)
    }

    /// Parse a roster from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        parse_toml(content)
    }

    /// Look up growth data; unknown champions propagate as
    /// [`ConfigError::ChampionNotFound`]
    pub fn growth(&self, name: &str) -> Result<&GrowthStats, ConfigError> {
        self.champions
            .get(name)
            .ok_or_else(|| ConfigError::ChampionNotFound(name.to_string()))
    }

    pub fn insert(&mut self, name: impl Into<String>, growth: GrowthStats) {
        self.champions.insert(name.into(), growth);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.champions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}

/// Item or rune id to its stat contribution, loaded from JSON:
///
/// ```json
/// { "items": { "long_sword": { "flat_attack_damage": 10.0 } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemCatalog {
    items: HashMap<String, ModifierSet>,
}

impl ItemCatalog {
    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        load_json(path)
    }

    /// Parse a catalog from a JSON string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        parse_json(content)
    }

    /// Stat contribution for an id. Unknown ids contribute an empty
    /// set so one bad source never fails a whole aggregation.
    pub fn modifiers(&self, id: &str) -> ModifierSet {
        self.items.get(id).cloned().unwrap_or_default()
    }

    /// Direct lookup, `None` for unknown ids
    pub fn get(&self, id: &str) -> Option<&ModifierSet> {
        self.items.get(id)
    }

    pub fn insert(&mut self, id: impl Into<String>, modifiers: ModifierSet) {
        self.items.insert(id.into(), modifiers);
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatKind;

    #[test]
    fn test_roster_parses_toml() {
        let roster = ChampionRoster::parse(
            r#"
            [champions.ashe]
            hp = 610.0
            hp_per_level = 101.0
            mp = 280.0
            mp_per_level = 35.0
            attack_damage = 59.0
            attack_damage_per_level = 2.95
            armor = 26.0
            armor_per_level = 4.6
            magic_resist = 30.0
            magic_resist_per_level = 1.3
            attack_speed = 0.658
            attack_speed_per_level = 3.33
            move_speed = 325.0
            attack_range = 600.0
            "#,
        )
        .unwrap();

        let growth = roster.growth("ashe").unwrap();
        assert!((growth.hp - 610.0).abs() < f64::EPSILON);
        assert!((growth.attack_speed - 0.658).abs() < f64::EPSILON);
        // omitted fields default to zero
        assert_eq!(growth.crit, 0.0);
        assert_eq!(growth.hp_regen, 0.0);
    }

    #[test]
    fn test_unknown_champion_is_not_found() {
        let roster = ChampionRoster::default();
        let err = roster.growth("teemo").unwrap_err();
        assert!(matches!(err, ConfigError::ChampionNotFound(ref name) if name == "teemo"));
    }

    #[test]
    fn test_catalog_parses_json() {
        let catalog = ItemCatalog::parse(
            r#"{
                "items": {
                    "long_sword": { "flat_attack_damage": 10.0 },
                    "zeal": { "percent_attack_speed": 0.15, "crit_chance": 0.15 }
                }
            }"#,
        )
        .unwrap();

        let zeal = catalog.modifiers("zeal");
        assert!((zeal.get(StatKind::PercentAttackSpeed) - 0.15).abs() < f64::EPSILON);
        assert!((zeal.get(StatKind::CritChance) - 0.15).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_item_degrades_to_empty_set() {
        let catalog = ItemCatalog::default();
        assert!(catalog.modifiers("mystery_trinket").is_empty());
        assert!(catalog.get("mystery_trinket").is_none());
    }

    #[test]
    fn test_malformed_item_key_fails_parse() {
        let result = ItemCatalog::parse(
            r#"{ "items": { "weird": { "flat_tenacity": 5.0 } } }"#,
        );
        assert!(result.is_err());
    }
}
