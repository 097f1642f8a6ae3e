//! Core domain types for the daily puzzle
//!
//! This module contains the fundamental domain types with no knowledge of
//! persistence or presentation. All types here are pure, testable, and have
//! clear mathematical properties.

mod day;
mod feedback;
mod word;

pub use day::GameDay;
pub use feedback::{Feedback, LetterHints, LetterState, share_grid};
pub use word::{Word, WordError};
