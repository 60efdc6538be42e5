//! Target - Immutable template plus per-simulation health counter

use serde::{Deserialize, Serialize};

/// Defensive stats of a reference target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetStats {
    pub hp: f64,
    pub armor: f64,
    pub magic_resist: f64,
}

/// An immutable target template. Every simulation run spawns its own
/// [`TargetInstance`] so repeated runs never observe residual damage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub stats: TargetStats,
}

impl Target {
    /// Create a new target template
    pub fn new(name: impl Into<String>, hp: f64, armor: f64, magic_resist: f64) -> Self {
        Target {
            name: name.into(),
            stats: TargetStats {
                hp,
                armor,
                magic_resist,
            },
        }
    }

    /// Spawn an independent live instance of this template
    pub fn spawn(&self) -> TargetInstance {
        TargetInstance {
            name: self.name.clone(),
            armor: self.stats.armor,
            magic_resist: self.stats.magic_resist,
            max_hp: self.stats.hp,
            current_hp: self.stats.hp,
        }
    }
}

/// A live target in one simulation run. Only `current_hp` mutates.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetInstance {
    pub name: String,
    pub armor: f64,
    pub magic_resist: f64,
    pub max_hp: f64,
    current_hp: f64,
}

impl TargetInstance {
    /// Remaining health, never negative
    pub fn current_hp(&self) -> f64 {
        self.current_hp
    }

    /// Apply damage, clamping health at zero
    pub fn take_damage(&mut self, amount: f64) {
        self.current_hp = (self.current_hp - amount).max(0.0);
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_copies_template() {
        let template = Target::new("training dummy", 1000.0, 100.0, 100.0);
        let instance = template.spawn();
        assert_eq!(instance.current_hp(), 1000.0);
        assert_eq!(instance.armor, 100.0);
        assert!(instance.is_alive());
    }

    #[test]
    fn test_hp_clamps_at_zero() {
        let mut instance = Target::new("dummy", 100.0, 0.0, 0.0).spawn();
        instance.take_damage(250.0);
        assert_eq!(instance.current_hp(), 0.0);
        assert!(!instance.is_alive());
    }

    #[test]
    fn test_runs_are_independent() {
        let template = Target::new("dummy", 500.0, 0.0, 0.0);
        let mut first = template.spawn();
        first.take_damage(500.0);
        assert!(!first.is_alive());

        // A later spawn from the same template starts fresh
        let second = template.spawn();
        assert_eq!(second.current_hp(), 500.0);
    }
}
