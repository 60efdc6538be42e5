//! Simulation engine - Fixed-interval basic attack loop against a target

use crate::formulas::{
    attack_interval, critical_damage_multiplier, damage_multiplier, effective_resistance,
    lethality_penetration,
};
use crate::modifier::FinalStats;
use crate::target::Target;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Terminal outcome of one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationOutcome {
    /// The target's health reached zero within the time budget
    TargetEliminated,
    /// The time budget ran out with the target still alive
    TimeLimitReached,
    /// Attack speed was zero or invalid; no attacks were possible
    CannotAttack,
}

/// Summary of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Elapsed time of the lethal attack; `None` unless the target died
    pub time_to_kill: Option<f64>,
    pub dps: f64,
    pub total_damage_dealt: f64,
    pub attack_count: u32,
    pub final_stats: FinalStats,
    pub target_initial_health: f64,
    pub target_final_health: f64,
    pub simulation_time_elapsed: f64,
    pub outcome: SimulationOutcome,
}

/// Run a basic-attack simulation against a fresh instance of the target
/// template until it dies or the time budget is exhausted.
///
/// The critical strike roll is the only nondeterminism; pass a seeded
/// RNG for reproducible runs.
pub fn run_simulation(
    final_stats: &FinalStats,
    target: &Target,
    attacker_level: u8,
    max_simulation_seconds: f64,
    rng: &mut impl Rng,
) -> SimulationResult {
    let mut instance = target.spawn();

    let interval = attack_interval(final_stats.attack_speed);
    if interval.is_infinite() {
        return SimulationResult {
            time_to_kill: None,
            dps: 0.0,
            total_damage_dealt: 0.0,
            attack_count: 0,
            final_stats: final_stats.clone(),
            target_initial_health: instance.max_hp,
            target_final_health: instance.current_hp(),
            simulation_time_elapsed: 0.0,
            outcome: SimulationOutcome::CannotAttack,
        };
    }

    // Lethality conversion and armor shred are build-static, so the
    // effective armor of a non-retaliating target is too.
    let flat_armor_pen = lethality_penetration(final_stats.lethality, attacker_level)
        + final_stats.flat_armor_pen;
    let effective_armor = effective_resistance(
        instance.armor,
        final_stats.percent_armor_pen,
        flat_armor_pen,
    );
    let mitigation = damage_multiplier(effective_armor);

    let mut current_time = 0.0;
    let mut total_damage = 0.0;
    let mut attack_count: u32 = 0;
    let mut time_to_kill = None;
    let mut outcome = SimulationOutcome::TimeLimitReached;

    while instance.is_alive() && current_time < max_simulation_seconds {
        let is_crit = rng.gen::<f64>() < final_stats.crit_chance;
        let raw_damage = if is_crit {
            final_stats.attack_damage
                * critical_damage_multiplier(final_stats.crit_bonus_damage)
        } else {
            final_stats.attack_damage
        };

        let mitigated = raw_damage * mitigation;
        instance.take_damage(mitigated);
        total_damage += mitigated;
        attack_count += 1;

        if !instance.is_alive() {
            time_to_kill = Some(current_time);
            outcome = SimulationOutcome::TargetEliminated;
            break;
        }

        current_time += interval;
    }

    // Guard the DPS divisor: a lethal first attack lands at t = 0.
    let elapsed_for_dps = match time_to_kill {
        Some(ttk) if ttk > 0.0 => ttk,
        _ => current_time.max(interval),
    };
    let dps = if total_damage > 0.0 {
        total_damage / elapsed_for_dps
    } else {
        0.0
    };

    SimulationResult {
        time_to_kill,
        dps,
        total_damage_dealt: total_damage,
        attack_count,
        final_stats: final_stats.clone(),
        target_initial_health: instance.max_hp,
        target_final_health: instance.current_hp(),
        simulation_time_elapsed: current_time,
        outcome,
    }
}

/// Run a simulation with the thread-local RNG
pub fn run_simulation_with_thread_rng(
    final_stats: &FinalStats,
    target: &Target,
    attacker_level: u8,
    max_simulation_seconds: f64,
) -> SimulationResult {
    let mut rng = rand::thread_rng();
    run_simulation(final_stats, target, attacker_level, max_simulation_seconds, &mut rng)
}
