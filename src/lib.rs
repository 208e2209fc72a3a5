//! The Wiki Game
//!
//! A word-chain puzzle: a Start letter grows to the right and an End letter grows
//! to the left, one random letter per step, until the two chains share a string.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wiki_game::chain::Session;
//! use wiki_game::config::GameConfig;
//! use wiki_game::core::{RandomLetters, Slot};
//!
//! let mut session = Session::new(GameConfig::default(), RandomLetters::seeded(42));
//! println!("{} to {}", session.start(), session.end());
//!
//! let pick = session.candidates(Slot::L1).get(0).unwrap().to_string();
//! session.select(Slot::L1, [pick]).unwrap();
//! if let Some(result) = session.match_result() {
//!     println!("{result}");
//! }
//! ```

// Core domain types
pub mod core;

// Bounded random string generation
pub mod generator;

// Selection state machine and match evaluation
pub mod chain;

// Game tunables
pub mod config;

// Library error types
pub mod error;

// Tracing subscriber setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
