use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use tracing::{Level, info};
use wheel_core::{
    ConfigFile, GameConfig, InputJournal, ReplayResult, SamplingMode, Session, SessionRules,
    SpinOutcome, classify_zone, generate_with, load_config_from_file, replay_to_end,
    tier_for_zone,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Wheel configuration TOML; the built-in content is used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Log generation and session details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the zone kind and tier for a range of zones
    Zones {
        #[arg(long, default_value_t = 1)]
        from: u32,
        #[arg(long, default_value_t = 30)]
        to: u32,
    },
    /// Generate one wheel
    Generate {
        #[arg(short, long, default_value_t = 1)]
        zone: u32,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Fall back to the first pool entry instead of failing on a bad pool
        #[arg(long)]
        lenient: bool,
        #[arg(long)]
        json: bool,
    },
    /// Play a scripted session and report what it claimed
    Simulate {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 200)]
        spins: u32,
        /// Bank the run after a win at this zone or later
        #[arg(long, default_value_t = 10)]
        bank_at: u32,
        /// Pay to revive after a bomb while money allows
        #[arg(long)]
        revive: bool,
        /// Write the session's input journal as JSON
        #[arg(long)]
        journal_out: Option<PathBuf>,
    },
    /// Replay a journal JSON file and print the final state
    Replay {
        #[arg(short, long)]
        journal: PathBuf,
    },
    /// Print the active configuration as TOML
    DumpConfig,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Zones { from, to } => print_zones(&config, from, to),
        Command::Generate { zone, seed, lenient, json } => {
            print_wheel(&config, zone, seed, lenient, json)
        }
        Command::Simulate { seed, spins, bank_at, revive, journal_out } => {
            simulate(&config, seed, spins, bank_at, revive, journal_out.as_deref())
        }
        Command::Replay { journal } => replay(&config, &journal),
        Command::DumpConfig => {
            print!("{}", ConfigFile::from_config(&config).to_toml()?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::build_default());
    };
    let config = load_config_from_file(path)
        .with_context(|| format!("Failed to load config file: {}", path.display()))?;
    info!(path = %path.display(), "loaded wheel config");
    Ok(config)
}

fn print_zones(config: &GameConfig, from: u32, to: u32) -> Result<()> {
    for zone in from..=to {
        let kind = classify_zone(zone, config)?;
        let tier = tier_for_zone(zone, config)?;
        println!("{zone:>5}  {:<10}  {}", kind.label(), tier.name);
    }
    Ok(())
}

fn print_wheel(
    config: &GameConfig,
    zone: u32,
    seed: u64,
    lenient: bool,
    json: bool,
) -> Result<()> {
    let mode = if lenient { SamplingMode::FallbackToFirst } else { SamplingMode::Strict };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let wheel = generate_with(zone, config, &mut rng, mode)
        .with_context(|| format!("Failed to generate wheel for zone {zone}"))?;
    let views = config.catalog.describe(&wheel.slices);

    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    println!("Zone {} ({}, {} tier)", wheel.zone_index, wheel.zone_kind.label(), wheel.tier_name);
    for (slot, view) in views.iter().enumerate() {
        if view.is_bomb {
            println!("  [{slot}] BOMB");
        } else {
            println!("  [{slot}] {} x{}", view.display_name, view.amount);
        }
    }
    if wheel.fallback_draws > 0 {
        println!("  ({} slots used the fallback entry)", wheel.fallback_draws);
    }
    Ok(())
}

fn simulate(
    config: &GameConfig,
    seed: u64,
    spins: u32,
    bank_at: u32,
    revive: bool,
    journal_out: Option<&Path>,
) -> Result<()> {
    let mut session = Session::new(seed, config, SessionRules::default());
    session.start()?;

    let mut claimed: BTreeMap<String, u64> = BTreeMap::new();
    let (mut banked_runs, mut lost_runs, mut revives) = (0u32, 0u32, 0u32);
    let mut best_zone = session.zone();

    for _ in 0..spins {
        session.spin()?;
        match session.resolve_spin()? {
            SpinOutcome::Win(_) if session.zone() >= bank_at => {
                for view in config.catalog.describe(&session.exit_and_claim()?) {
                    *claimed.entry(view.id).or_default() += u64::from(view.amount);
                }
                banked_runs += 1;
                session.finish_claim()?;
            }
            SpinOutcome::Win(_) => session.continue_run()?,
            SpinOutcome::Lose(_) if revive && session.money() >= session.rules().revive_cost => {
                session.revive()?;
                revives += 1;
            }
            SpinOutcome::Lose(_) => {
                session.give_up()?;
                lost_runs += 1;
            }
        }
        best_zone = best_zone.max(session.zone());
    }

    println!("Simulated {spins} spins on seed {seed}.");
    println!("Banked runs: {banked_runs}, lost runs: {lost_runs}, revives: {revives}");
    println!("Deepest zone: {best_zone}, money left: {}", session.money());
    for (id, total) in &claimed {
        println!("  {id}: {total}");
    }
    println!("Snapshot Hash: {}", session.snapshot_hash());

    if let Some(path) = journal_out {
        fs::write(path, session.journal().to_json()?)
            .with_context(|| format!("Failed to write journal file: {}", path.display()))?;
        println!("Journal written to {}", path.display());
    }
    Ok(())
}

fn replay(config: &GameConfig, path: &Path) -> Result<()> {
    let journal_data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;
    let journal = InputJournal::from_json(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let result: ReplayResult =
        replay_to_end(config, &journal).context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Actions: {}", journal.actions.len());
    println!("Phase: {:?}", result.final_phase);
    println!(
        "Zone: {}, Money: {}, Spins: {}",
        result.final_zone, result.final_money, result.final_spins
    );
    println!("Snapshot Hash: {}", result.final_snapshot_hash);
    Ok(())
}
