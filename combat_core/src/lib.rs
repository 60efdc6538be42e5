//! combat_core - Deterministic combat-math engine
//!
//! This library provides:
//! - GrowthStats -> BaseStats: level-scaled base stat derivation
//! - ModifierSet aggregation: summing item/rune stat contributions
//! - FinalStats resolution: flat-then-percent stacking, caps, adaptive force
//! - Simulation: fixed-interval basic attacks against a reference target

pub mod config;
pub mod formulas;
pub mod modifier;
pub mod simulation;
pub mod stats;
pub mod target;
pub mod types;

// Re-export core types for convenience
pub use config::{ChampionRoster, ConfigError, ItemCatalog};
pub use modifier::{aggregate, resolve, AggregatedModifiers, FinalStats};
pub use simulation::{run_simulation, SimulationOutcome, SimulationResult};
pub use stats::{derive_base_stats, BaseStats, GrowthStats, StatError};
pub use target::{Target, TargetInstance, TargetStats};
pub use types::{ModifierSet, StatKind};
