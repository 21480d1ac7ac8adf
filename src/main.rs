//! kata-bowling CLI - plays a short single-player tournament.

use anyhow::{Context, Result};
use clap::Parser;
use kata_bowling::core::{DEFAULT_TOTAL_PINS, DEFAULT_TURNS};
use kata_bowling::{GameConfig, PlayerIdAllocator, Tournament};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kata-bowling")]
#[command(about = "Bowling scoring kata: plays a few turns and prints the scores")]
struct Args {
    /// Player name
    #[arg(short, long, default_value = "kunal")]
    player: String,

    /// Number of turns to play
    #[arg(short, long, default_value_t = DEFAULT_TURNS)]
    turns: usize,

    /// Pins per frame
    #[arg(long, default_value_t = DEFAULT_TOTAL_PINS)]
    pins: u8,

    /// RNG seed (for deterministic runs)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise -v switches on per-knock debug output
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = GameConfig::default()
        .with_turns(args.turns)
        .with_total_pins(args.pins);
    config.seed = args.seed;

    let mut ids = PlayerIdAllocator::new();
    let mut tournament =
        Tournament::new(config, &mut ids, args.player).context("failed to set up tournament")?;

    let summary = tournament
        .run_with(|game| {
            if !args.json {
                println!("****************TURN_SCORE******************************");
                println!("{game}");
            }
        })
        .context("tournament aborted")?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
        println!("{json}");
    } else {
        println!("****************FINAL_SCORE******************************");
        println!("{}", tournament.game());
        println!("total: {}", summary.total_score);
    }

    Ok(())
}
