//! Daily Wordle Engine
//!
//! A daily word-guessing game: one shared secret per calendar day, six
//! guesses per user, per-letter feedback, a points economy rewarding speed
//! and streak continuity, and an administrable pool of candidate words.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_daily::engine::GameEngine;
//! use wordle_daily::store::{SqliteStore, WordOrigin};
//!
//! let engine = GameEngine::new(SqliteStore::open("game.db").unwrap());
//! engine.pools().add_answer_word("wheat", WordOrigin::Admin).unwrap();
//!
//! let view = engine.submit_guess("alice", None, "wheat").unwrap();
//! println!("solved: {:?}", view.state);
//! ```

// Core domain types
pub mod core;

// Game engine: rounds, scoring, streaks
pub mod engine;

// Error taxonomy
pub mod error;

// Word pool cache and lifecycle
pub mod pools;

// Persistence interface and SQLite store
pub mod store;

// Seed word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
