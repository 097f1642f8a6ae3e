//! Persistence interface
//!
//! The engine consumes storage through the `GameStore` trait and never talks
//! to a database directly. The trait's contract carries the atomicity the
//! orchestrator relies on: round creation/update is serialized per
//! (user, day), and streak upserts are serialized per user.

mod sqlite;

pub use sqlite::SqliteStore;

use crate::core::{GameDay, Word};
use crate::engine::{Round, ScoreSettings, SettingsPatch, StreakState};
use crate::error::Result;
use std::fmt;
use std::str::FromStr;

/// How a pool word entered the system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOrigin {
    Curated,
    Imported,
    Admin,
}

impl fmt::Display for WordOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Curated => "curated",
            Self::Imported => "imported",
            Self::Admin => "admin",
        };
        write!(f, "{tag}")
    }
}

impl FromStr for WordOrigin {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "curated" => Ok(Self::Curated),
            "imported" => Ok(Self::Imported),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown word origin: {other}")),
        }
    }
}

/// An answer-pool entry
#[derive(Debug, Clone)]
pub struct PoolEntry {
    pub word: Word,
    pub origin: WordOrigin,
}

/// The secret assigned to one calendar day
#[derive(Debug, Clone)]
pub struct SecretWord {
    pub id: i64,
    pub word: Word,
    pub origin: WordOrigin,
    pub day: GameDay,
}

/// Storage operations consumed by the engine
///
/// Implementations must guarantee per-key atomicity: no two guesses append
/// concurrently to one round, a round is never created twice for one
/// (user, day), and streak read-modify-write is serialized per user.
/// Failures propagate unchanged; the engine performs no retries.
pub trait GameStore {
    // Rounds
    fn find_round(&self, user: &str, day: GameDay) -> Result<Option<Round>>;
    fn create_round(
        &self,
        user: &str,
        day: GameDay,
        guess: &Word,
        solved: bool,
        points: u32,
    ) -> Result<Round>;
    fn append_guess(&self, round_id: i64, guess: &Word, solved: bool, points: u32)
    -> Result<Round>;

    // Streaks
    fn find_streak(&self, user: &str) -> Result<Option<StreakState>>;
    fn upsert_streak(&self, user: &str, streak: &StreakState) -> Result<()>;

    // Word pools
    fn count_answer_pool(&self) -> Result<usize>;
    fn count_validation_pool(&self) -> Result<usize>;
    fn list_answer_pool(&self) -> Result<Vec<PoolEntry>>;
    fn list_validation_pool(&self) -> Result<Vec<Word>>;
    /// Returns false when the word was already present
    fn insert_answer_word(&self, word: &Word, origin: WordOrigin) -> Result<bool>;
    /// Returns false when the word was already present
    fn insert_validation_word(&self, word: &Word) -> Result<bool>;
    /// Returns false when there was nothing to delete
    fn delete_answer_word(&self, word: &Word) -> Result<bool>;

    // Daily secrets
    fn find_secret_for_day(&self, day: GameDay) -> Result<Option<SecretWord>>;
    fn create_secret_for_day(&self, day: GameDay, word: &Word, origin: WordOrigin)
    -> Result<SecretWord>;
    /// Admin override: replaces any existing assignment for the day
    fn set_secret_for_day(&self, day: GameDay, word: &Word, origin: WordOrigin)
    -> Result<SecretWord>;
    /// Most recent assignments first
    fn list_secrets(&self, limit: usize) -> Result<Vec<SecretWord>>;

    // Score settings
    /// Always returns a complete configuration: defaults merged with overrides
    fn get_score_settings(&self) -> Result<ScoreSettings>;
    /// Persists only the fields the patch supplies
    fn set_score_settings(&self, patch: &SettingsPatch) -> Result<()>;
}
