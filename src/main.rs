use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use grid_snake::autopilot::GreedyAutopilot;
use grid_snake::config::{GameConfig, GameMode};
use grid_snake::logging;
use grid_snake::score::{JsonFileLeaderboard, Leaderboard};
use grid_snake::session::GameSession;
use log::info;
use simplelog::LevelFilter;

/// Runs an unattended snake game steered by the greedy autopilot.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// World topology: `walls` or `pass-through`.
    #[arg(long, default_value_t = GameMode::Walls)]
    mode: GameMode,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks even if the game is still running.
    #[arg(long = "max-ticks")]
    max_ticks: Option<u64>,

    /// Wait the game's tick interval between steps.
    #[arg(long)]
    realtime: bool,

    /// JSON file with rule overrides.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name recorded on the leaderboard.
    #[arg(long, default_value = "autopilot")]
    player: String,

    /// Leaderboard file; defaults to the platform data directory.
    #[arg(long)]
    leaderboard: Option<PathBuf>,

    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log every food and lifecycle event.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::init(level, cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let leaderboard = match cli.leaderboard {
        Some(path) => JsonFileLeaderboard::new(path),
        None => JsonFileLeaderboard::at_default_path(),
    };
    info!("leaderboard at {}", leaderboard.path().display());

    let mut session = GameSession::new(config, cli.mode, cli.seed)
        .with_autopilot(Box::new(GreedyAutopilot))
        .with_leaderboard(Box::new(leaderboard.clone()), &cli.player);
    info!("starting {} game with seed {}", cli.mode, session.seed());

    let summary = session.run(cli.max_ticks, cli.realtime);
    println!(
        "{:?} after {} ticks: score {} (mode {}, seed {})",
        summary.status,
        summary.ticks,
        summary.score,
        cli.mode,
        session.seed()
    );

    if let Some(reason) = session.state().death_reason {
        println!("cause: {reason:?}");
    }

    let best = leaderboard.top(cli.mode, 5)?;
    for (rank, entry) in best.iter().enumerate() {
        println!("{:>2}. {:<16} {:>6}", rank + 1, entry.player, entry.score);
    }

    Ok(())
}
