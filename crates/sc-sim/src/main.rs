//! Scratch ticket command-line driver
//!
//! Usage:
//!   scratchcard tiers                                  - List configured tiers
//!   scratchcard simulate --tier 5 --draws 1000000      - Batch draw statistics
//!   scratchcard play --tier 10 --tickets 20            - Play full sessions
//!
//! Pass `--catalog <file>` (JSON or YAML) to use a custom tier catalog.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use sc_prize::{PrizeEngine, TierCatalog};
use sc_sim::{SimConfig, play_session, simulate_tier};

#[derive(Parser)]
#[command(name = "scratchcard", about = "Scratch ticket prize tools", version)]
struct Cli {
    /// Tier catalog file (.json, .yaml or .yml)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured tiers with max prize and theoretical RTP
    Tiers,
    /// Draw many tickets and report empirical odds
    Simulate {
        /// Ticket price
        #[arg(short, long, default_value_t = 5.0)]
        tier: f64,
        /// Number of draws
        #[arg(short, long, default_value_t = 1_000_000)]
        draws: u64,
        /// RNG seed
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Parallel chunks (defaults to CPU count)
        #[arg(long)]
        chunks: Option<usize>,
    },
    /// Play full ticket lifecycles and print the session stats as JSON
    Play {
        /// Ticket price
        #[arg(short, long, default_value_t = 5.0)]
        tier: f64,
        /// Number of tickets
        #[arg(short = 'n', long, default_value_t = 10)]
        tickets: u64,
        /// RNG seed
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Also print every ticket
        #[arg(long)]
        history: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => TierCatalog::standard(),
    };
    let engine = Arc::new(PrizeEngine::new(catalog));

    match cli.command {
        Commands::Tiers => list_tiers(&engine),
        Commands::Simulate {
            tier,
            draws,
            seed,
            chunks,
        } => run_simulation(&engine, tier, draws, seed, chunks),
        Commands::Play {
            tier,
            tickets,
            seed,
            history,
        } => run_play(engine, tier, tickets, seed, history),
    }
}

fn load_catalog(path: &Path) -> Result<TierCatalog> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;

    let catalog = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => TierCatalog::from_json(&text),
        Some("yaml" | "yml") => TierCatalog::from_yaml(&text),
        _ => bail!("Unsupported catalog format: {}", path.display()),
    };

    catalog.with_context(|| format!("Invalid catalog {}", path.display()))
}

fn list_tiers(engine: &PrizeEngine) -> Result<()> {
    println!("{:<10} {:>8} {:>12} {:>8}", "Tier", "Prizes", "Max prize", "RTP");
    for tier in engine.tiers() {
        println!(
            "{:<10} {:>8} {:>12.2} {:>7.2}%",
            tier.label(),
            tier.payout_table().len(),
            tier.max_prize(),
            tier.rtp()
        );
    }
    Ok(())
}

fn run_simulation(
    engine: &PrizeEngine,
    value: f64,
    draws: u64,
    seed: u64,
    chunks: Option<usize>,
) -> Result<()> {
    let tier = engine
        .tier(value)
        .with_context(|| format!("No tier priced at {value}"))?;

    let mut config = SimConfig::new(draws, seed);
    if let Some(chunks) = chunks {
        config = config.with_chunks(chunks);
    }

    let report = simulate_tier(tier, &config).context("Simulation failed")?;

    println!("{}: {} draws (seed {})\n", tier.label(), report.draws, seed);
    println!("{:<22} {:>10} {:>12} {:>12}", "Outcome", "Amount", "Configured", "Observed");
    for (index, outcome) in tier.payout_table().iter().enumerate() {
        println!(
            "{:<22} {:>10.2} {:>11.4}% {:>11.4}%",
            outcome.message,
            outcome.amount,
            outcome.probability * 100.0,
            report.frequency(index) * 100.0
        );
    }
    println!();
    println!("RTP:      {:>7.2}% (theoretical {:.2}%)", report.rtp(), report.theoretical_rtp);
    println!("Hit rate: {:>7.2}%", report.hit_rate());
    Ok(())
}

fn run_play(
    engine: Arc<PrizeEngine>,
    value: f64,
    tickets: u64,
    seed: u64,
    history: bool,
) -> Result<()> {
    let session = play_session(engine, value, tickets, seed).context("Session failed")?;

    if history {
        println!("{}", serde_json::to_string_pretty(session.history())?);
    }
    println!("{}", serde_json::to_string_pretty(session.stats())?);
    Ok(())
}
