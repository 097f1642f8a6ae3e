//! One user's round for one day's secret

use crate::core::{GameDay, Word};
use serde::Serialize;

/// Maximum guesses per round
pub const MAX_GUESSES: usize = 6;

/// Lifecycle state of a round
///
/// A round is terminal once solved or once the sixth guess misses; terminal
/// rounds accept no further guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    InProgress,
    Solved,
    Failed,
}

impl RoundState {
    /// True for Solved and Failed
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Failed)
    }
}

/// One user's guesses against one day's secret
///
/// Invariants maintained by the orchestrator and the store:
/// at most one round per (user, day); `guesses.len() <= MAX_GUESSES`;
/// `solved` iff some guess equals the day's secret; `points` written once,
/// on the terminal transition.
#[derive(Debug, Clone)]
pub struct Round {
    pub id: i64,
    pub user: String,
    pub day: GameDay,
    pub guesses: Vec<Word>,
    pub solved: bool,
    pub points: u32,
}

impl Round {
    /// Number of guesses taken so far
    #[must_use]
    pub fn attempts(&self) -> u8 {
        self.guesses.len() as u8
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> RoundState {
        if self.solved {
            RoundState::Solved
        } else if self.guesses.len() >= MAX_GUESSES {
            RoundState::Failed
        } else {
            RoundState::InProgress
        }
    }

    /// True once no further guesses are accepted
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state().is_terminal()
    }
}
