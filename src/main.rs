//! The Wiki Game - CLI
//!
//! Word-chain puzzle with TUI, line-oriented and headless simulation modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use wiki_game::{
    chain::Session,
    commands::{AutoPolicy, SimulationConfig, run_simple, run_simulation},
    config::GameConfig,
    core::RandomLetters,
    generator::CaseRule,
    logging::{LogConfig, init_logging},
    output::print_simulation_result,
};

#[derive(Parser)]
#[command(
    name = "wiki_game",
    about = "The Wiki Game: grow chains from a start and an end letter until they meet",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for a reproducible challenge (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Strings offered in L1 and R3 on a new challenge
    #[arg(long, global = true, default_value = "6")]
    anchor_count: usize,

    /// Extensions generated per selected item
    #[arg(long, global = true, default_value = "4")]
    count_per_base: usize,

    /// Letters added per step
    #[arg(long, global = true, default_value = "1")]
    extra_chars: usize,

    /// Case of letters added on the left side: match-base (default), upper, lower
    #[arg(long, global = true, default_value = "match-base", value_parser = parse_case_rule)]
    left_case: CaseRule,

    /// Case of letters added on the right side: upper (default), match-base, lower
    #[arg(long, global = true, default_value = "upper", value_parser = parse_case_rule)]
    right_case: CaseRule,

    /// Case of the letters placed before the End letter: lower (default), upper, match-base
    #[arg(long, global = true, default_value = "lower", value_parser = parse_case_rule)]
    end_anchor_case: CaseRule,

    /// Log level or filter directive (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file (the TUI only logs when this is set)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented play without TUI)
    Simple,

    /// Play many challenges automatically and report how often the chains meet
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Auto-player policy: first (default), random, all
        #[arg(short, long, default_value = "first", value_parser = parse_policy)]
        policy: AutoPolicy,
    },
}

fn parse_case_rule(name: &str) -> Result<CaseRule, String> {
    CaseRule::from_name(name)
        .ok_or_else(|| format!("unknown case rule '{name}' (expected match-base, upper, lower)"))
}

fn parse_policy(name: &str) -> Result<AutoPolicy, String> {
    AutoPolicy::from_name(name)
        .ok_or_else(|| format!("unknown policy '{name}' (expected first, random, all)"))
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            anchor_count: self.anchor_count,
            count_per_base: self.count_per_base,
            extra_chars: self.extra_chars,
            left_case: self.left_case,
            right_case: self.right_case,
            end_anchor_case: self.end_anchor_case,
        }
    }

    fn log_config(&self, stderr: bool) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            file: self.log_file.clone(),
            stderr,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let game = cli.game_config();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    // The TUI owns the terminal, so it never logs to stderr
    let stderr = !matches!(command, Commands::Play);
    init_logging(&cli.log_config(stderr)).context("failed to initialize logging")?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, ?game, "starting");

    match command {
        Commands::Play => run_play_command(game, seed),
        Commands::Simple => run_simple_command(game, seed),
        Commands::Simulate { games, policy } => run_simulate_command(game, seed, *games, *policy),
    }
}

fn run_play_command(game: GameConfig, seed: u64) -> Result<()> {
    use wiki_game::interactive::{App, run_tui};

    let session = Session::new(game, RandomLetters::seeded(seed));
    run_tui(App::new(session))
}

fn run_simple_command(game: GameConfig, seed: u64) -> Result<()> {
    let mut session = Session::new(game, RandomLetters::seeded(seed));
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_simulate_command(game: GameConfig, seed: u64, games: usize, policy: AutoPolicy) -> Result<()> {
    println!(
        "Simulating {games} games with the '{}' policy (seed {seed})...",
        policy.name()
    );

    let config = SimulationConfig {
        games,
        seed,
        policy,
        game,
        show_progress: true,
    };
    let result = run_simulation(&config)?;
    print_simulation_result(&result);
    Ok(())
}
