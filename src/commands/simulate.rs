//! Simulate command
//!
//! Plays many challenges headlessly with an automatic player and collects
//! match statistics. Games run in parallel, each with its own seeded source.

use crate::chain::{MatchResult, Session};
use crate::config::GameConfig;
use crate::core::{CandidateSet, RandomLetters, Slot};
use crate::error::SelectError;
use crate::output::formatters::simulation_progress_style;
use indicatif::ProgressBar;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Slots the auto-player selects in, in order
const PLAY_ORDER: [Slot; 4] = [Slot::L1, Slot::L2, Slot::R3, Slot::R2];

/// Maximum number of example chains kept in a result
pub const MAX_EXAMPLES: usize = 5;

/// How the automatic player picks items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoPolicy {
    /// First offered item
    First,
    /// One uniformly random item
    Random,
    /// Every offered item
    All,
}

impl AutoPolicy {
    /// Parse a policy name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "first" => Some(Self::First),
            "random" => Some(Self::Random),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Random => "random",
            Self::All => "all",
        }
    }

    fn pick<R: Rng>(self, candidates: &CandidateSet, picker: &mut R) -> Vec<String> {
        if candidates.is_empty() {
            return Vec::new();
        }
        match self {
            Self::First => candidates.get(0).map(str::to_string).into_iter().collect(),
            Self::Random => {
                let index = picker.random_range(0..candidates.len());
                candidates.get(index).map(str::to_string).into_iter().collect()
            }
            Self::All => candidates.iter().map(str::to_string).collect(),
        }
    }
}

/// Parameters of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    /// Game `i` is seeded with `seed + i`
    pub seed: u64,
    pub policy: AutoPolicy,
    pub game: GameConfig,
    pub show_progress: bool,
}

/// Outcome of one automatically played challenge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub seed: u64,
    pub l3_size: usize,
    pub r1_size: usize,
    pub matched: Option<MatchResult>,
}

/// Aggregated statistics of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub games: usize,
    pub matches: usize,
    pub policy: AutoPolicy,
    pub mean_l3_size: f64,
    pub mean_r1_size: f64,
    pub examples: Vec<String>,
    pub duration: Duration,
}

impl SimulationResult {
    /// Fraction of games in which the chains met
    #[must_use]
    pub fn match_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.matches as f64 / self.games as f64
        }
    }
}

/// Play one challenge from `seed` with the given policy
///
/// # Errors
///
/// Returns `SelectError` if the session rejects a selection, which only
/// happens if the session and the player disagree about the offered items.
pub fn play_game(
    config: GameConfig,
    policy: AutoPolicy,
    seed: u64,
) -> Result<GameOutcome, SelectError> {
    let mut session = Session::new(config, RandomLetters::seeded(seed));
    let mut picker = ChaCha8Rng::seed_from_u64(seed);

    for slot in PLAY_ORDER {
        let items = policy.pick(session.candidates(slot), &mut picker);
        session.select(slot, &items)?;
    }

    let outcome = GameOutcome {
        seed,
        l3_size: session.candidates(Slot::L3).len(),
        r1_size: session.candidates(Slot::R1).len(),
        matched: session.match_result().cloned(),
    };
    debug!(
        seed,
        l3 = outcome.l3_size,
        r1 = outcome.r1_size,
        matched = outcome.matched.is_some(),
        "game finished"
    );
    Ok(outcome)
}

/// Play `config.games` challenges in parallel
///
/// # Errors
///
/// Returns the first `SelectError` raised by any game.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationResult, SelectError> {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(simulation_progress_style());
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let outcome = play_game(config.game, config.policy, config.seed.wrapping_add(i as u64));
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    let result = summarize(&outcomes, config.policy, start.elapsed());
    info!(
        games = result.games,
        matches = result.matches,
        policy = config.policy.name(),
        "simulation finished"
    );
    Ok(result)
}

fn summarize(outcomes: &[GameOutcome], policy: AutoPolicy, duration: Duration) -> SimulationResult {
    let games = outcomes.len();
    let mean = |size: fn(&GameOutcome) -> usize| {
        if games == 0 {
            0.0
        } else {
            outcomes.iter().map(size).sum::<usize>() as f64 / games as f64
        }
    };

    SimulationResult {
        games,
        matches: outcomes.iter().filter(|o| o.matched.is_some()).count(),
        policy,
        mean_l3_size: mean(|o| o.l3_size),
        mean_r1_size: mean(|o| o.r1_size),
        examples: outcomes
            .iter()
            .filter_map(|o| o.matched.as_ref().map(MatchResult::render))
            .take(MAX_EXAMPLES)
            .collect(),
        duration,
    }
}
