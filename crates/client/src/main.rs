//! `duel-sim`: plays automated frontier duels and prints the results.
//!
//! ```bash
//! duel-sim --seed 7 --rounds 20 --bonus eagle_eye --weapon rifle
//! duel-sim --config duel.toml --catalog weapons.toml --weapon derringer
//! RUST_LOG=debug duel-sim --seed 7
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::Parser;
use duel_cli::{SimEnv, Simulation};
use duel_content::{CatalogLoader, ConfigLoader};
use duel_core::{BonusId, GameConfig, WeaponId, WeaponProfile};
use duel_runtime::seeded_rng;

/// Plays automated duels between an autopiloted gunslinger and a bandit
#[derive(Parser, Debug)]
#[command(name = "duel-sim")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Game configuration TOML (default: built-in balance)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extra weapon profiles TOML
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Random seed (default: DUEL_SEED, then entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Rounds to play
    #[arg(short, long, default_value = "1")]
    rounds: u32,

    /// Player bonus: tough, longshot, quickdraw, eagle_eye, gunslinger, desperado
    #[arg(short, long, default_value = "tough")]
    bonus: String,

    /// Player weapon: pistol, rifle, shotgun, or a catalog name
    #[arg(short, long, default_value = "pistol")]
    weapon: String,

    /// Player turns before a round is called a standoff
    #[arg(long, default_value_t = Simulation::DEFAULT_MAX_TURNS)]
    max_turns: u32,

    /// Print only the summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let env = SimEnv::from_env();

    let config = match &args.config {
        Some(path) => ConfigLoader::load(path)?,
        None => GameConfig::default(),
    };
    let catalog = match &args.catalog {
        Some(path) => CatalogLoader::load(path)?,
        None => Vec::new(),
    };

    let bonus = BonusId::from_str(&args.bonus)
        .with_context(|| format!("unknown bonus {:?}", args.bonus))?;
    let weapon = resolve_weapon(&args.weapon, &catalog)?;

    let simulation = Simulation::builder()
        .config(config)
        .bonus(bonus)
        .weapon(weapon)
        .max_turns(args.max_turns)
        .build()?;

    let (rng, seed) = seeded_rng(args.seed.or(env.seed));
    tracing::info!(
        seed,
        rounds = args.rounds,
        %bonus,
        weapon = simulation.weapon().name(),
        "starting simulation"
    );

    let summary = simulation.run(rng, args.rounds)?;

    if !args.quiet {
        for (index, round) in summary.rounds.iter().enumerate() {
            let result = match round.winner {
                Some(side) => format!("{side:?} wins"),
                None => "standoff".to_string(),
            };
            println!(
                "round {}: {result} after {} turns (player {} hp, bandit {} hp)",
                index + 1,
                round.turns,
                round.player_hp,
                round.enemy_hp
            );
            println!("{}\n", round.final_map);
        }
    }
    println!("seed:          {seed}");
    println!("{summary}");

    Ok(())
}

/// Canonical weapons first, then catalog entries by case-insensitive name.
fn resolve_weapon(name: &str, catalog: &[WeaponProfile]) -> Result<WeaponProfile> {
    if let Ok(id) = WeaponId::from_str(name) {
        return Ok(id.profile());
    }
    match catalog
        .iter()
        .find(|profile| profile.name().eq_ignore_ascii_case(name))
    {
        Some(profile) => Ok(profile.clone()),
        None => bail!("unknown weapon {name:?}"),
    }
}
