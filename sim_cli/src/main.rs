//! sim_cli - Time-to-kill simulator over the combat_core pipeline
//!
//! Usage:
//!   sim_cli <champion> <level> [item_id ...] [--seed N] [--time SECONDS]
//!
//! Champions and items come from the bundled data files. Unknown item
//! ids contribute nothing but are reported.

use combat_core::{
    aggregate, derive_base_stats, resolve, run_simulation, ChampionRoster, ItemCatalog,
    ModifierSet, SimulationOutcome, Target,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;

const CHAMPIONS_TOML: &str = include_str!("../data/champions.toml");
const ITEMS_JSON: &str = include_str!("../data/items.json");

const DEFAULT_MAX_SECONDS: f64 = 180.0;
const DEFAULT_SEED: u64 = 0xC0FFEE;

struct Args {
    champion: String,
    level: u8,
    items: Vec<String>,
    seed: u64,
    max_seconds: f64,
}

fn parse_args() -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut seed = DEFAULT_SEED;
    let mut max_seconds = DEFAULT_MAX_SECONDS;

    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--seed" => {
                let value = argv.next().ok_or("--seed requires a value")?;
                seed = value.parse().map_err(|_| format!("bad seed: {value}"))?;
            }
            "--time" => {
                let value = argv.next().ok_or("--time requires a value")?;
                max_seconds = value.parse().map_err(|_| format!("bad time: {value}"))?;
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() < 2 {
        return Err("usage: sim_cli <champion> <level> [item_id ...] [--seed N] [--time SECONDS]"
            .to_string());
    }

    let champion = positional.remove(0);
    let level_arg = positional.remove(0);
    let level: u8 = level_arg
        .parse()
        .map_err(|_| format!("bad level: {level_arg}"))?;

    Ok(Args {
        champion,
        level,
        items: positional,
        seed,
        max_seconds,
    })
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let roster = match ChampionRoster::parse(CHAMPIONS_TOML) {
        Ok(roster) => roster,
        Err(err) => {
            eprintln!("bundled champion data is broken: {err}");
            return ExitCode::FAILURE;
        }
    };
    let catalog = match ItemCatalog::parse(ITEMS_JSON) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("bundled item data is broken: {err}");
            return ExitCode::FAILURE;
        }
    };

    let growth = match roster.growth(&args.champion) {
        Ok(growth) => growth,
        Err(err) => {
            eprintln!("{err}");
            let mut names: Vec<&str> = roster.names().collect();
            names.sort_unstable();
            eprintln!("known champions: {}", names.join(", "));
            return ExitCode::FAILURE;
        }
    };

    let base = match derive_base_stats(growth, args.level) {
        Ok(base) => base,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut sources: Vec<ModifierSet> = Vec::new();
    for id in &args.items {
        match catalog.get(id) {
            Some(modifiers) => sources.push(modifiers.clone()),
            None => eprintln!("warning: unknown item '{id}' contributes no stats"),
        }
    }

    let final_stats = resolve(&base, &aggregate(&sources));

    let target = Target::new("training dummy", 2500.0, 60.0, 60.0);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let result = run_simulation(&final_stats, &target, args.level, args.max_seconds, &mut rng);

    println!("=== {} (level {}) ===", args.champion, args.level);
    if args.items.is_empty() {
        println!("items: none");
    } else {
        println!("items: {}", args.items.join(", "));
    }
    println!();
    println!("Final stats:");
    println!("  Health:        {:>8.1}", final_stats.health);
    println!(
        "  Attack Damage: {:>8.1}  (bonus {:.1})",
        final_stats.attack_damage, final_stats.bonus_attack_damage
    );
    println!("  Ability Power: {:>8.1}", final_stats.ability_power);
    println!("  Armor:         {:>8.1}", final_stats.armor);
    println!("  Magic Resist:  {:>8.1}", final_stats.magic_resist);
    println!("  Attack Speed:  {:>8.3}", final_stats.attack_speed);
    println!("  Crit Chance:   {:>7.1}%", final_stats.crit_chance * 100.0);
    if final_stats.lethality > 0.0 || final_stats.percent_armor_pen > 0.0 {
        println!(
            "  Armor Pen:     {:>8.1} lethality, {:.0}% percent",
            final_stats.lethality,
            final_stats.percent_armor_pen * 100.0
        );
    }
    println!();
    println!(
        "Target: {} ({:.0} hp, {:.0} armor, {:.0} mr)",
        target.name, target.stats.hp, target.stats.armor, target.stats.magic_resist
    );
    println!();

    match result.outcome {
        SimulationOutcome::TargetEliminated => {
            println!(
                "Target eliminated in {:.2}s ({} attacks)",
                result.time_to_kill.unwrap_or(0.0),
                result.attack_count
            );
        }
        SimulationOutcome::TimeLimitReached => {
            println!(
                "Time limit reached after {:.0}s: {:.0}/{:.0} hp remaining",
                result.simulation_time_elapsed,
                result.target_final_health,
                result.target_initial_health
            );
        }
        SimulationOutcome::CannotAttack => {
            println!("Cannot attack: final attack speed is zero");
        }
    }
    println!(
        "Damage dealt: {:.1}  |  DPS: {:.1}",
        result.total_damage_dealt, result.dps
    );

    ExitCode::SUCCESS
}
