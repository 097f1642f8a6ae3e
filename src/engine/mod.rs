//! Daily puzzle engine
//!
//! The round state machine, scoring policy, streak engine and the
//! orchestrator that drives them per guess submission.

mod orchestrator;
mod round;
mod scoring;
mod streak;

pub use orchestrator::{BoardView, GameEngine, RoundResult};
pub use round::{MAX_GUESSES, Round, RoundState};
pub use scoring::{
    STREAK_TIER_1, STREAK_TIER_2, STREAK_TIER_3, ScoreSettings, SettingsPatch, compute_points,
};
pub use streak::StreakState;
