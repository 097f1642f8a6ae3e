//! Streak continuity state machine
//!
//! A streak counts consecutive calendar days with a solved round. Only solves
//! move the streak; a played-but-unsolved day neither extends nor explicitly
//! breaks it - only a full day without a solve does, observed on the next
//! solve.

use crate::core::GameDay;
use serde::{Deserialize, Serialize};

/// Per-user streak record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// Length of the running streak
    pub current: u32,
    /// High-water mark, monotonically non-decreasing
    pub longest: u32,
    /// Day of the most recent solved round
    pub last_solved: GameDay,
}

impl StreakState {
    /// State after a user's first solve
    #[must_use]
    pub const fn start(day: GameDay) -> Self {
        Self {
            current: 1,
            longest: 1,
            last_solved: day,
        }
    }

    /// Advance the streak for a solve on `solve_day`
    ///
    /// - No previous state: a streak of 1 begins.
    /// - Same day as the last solve: no-op. The orchestrator never calls
    ///   twice for one day, but the engine stays idempotent regardless.
    /// - `solve_day` directly follows the last solve: the streak extends and
    ///   the high-water mark updates.
    /// - Anything else (gap, or an out-of-order earlier date): the streak
    ///   resets to 1; `longest` is preserved.
    #[must_use]
    pub fn advance(previous: Option<Self>, solve_day: GameDay) -> Self {
        let Some(prev) = previous else {
            return Self::start(solve_day);
        };

        if prev.last_solved == solve_day {
            return prev;
        }

        if solve_day.follows(prev.last_solved) {
            let current = prev.current + 1;
            return Self {
                current,
                longest: prev.longest.max(current),
                last_solved: solve_day,
            };
        }

        Self {
            current: 1,
            longest: prev.longest.max(1),
            last_solved: solve_day,
        }
    }
}
