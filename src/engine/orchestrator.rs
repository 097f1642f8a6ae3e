//! Daily round orchestrator
//!
//! Ties the evaluator, pools, scoring and streak engine together for one
//! guess submission, and owns the per-day secret lifecycle. All state lives
//! behind the injected `GameStore`; the engine itself is stateless apart
//! from the word pool cache.

use super::round::{MAX_GUESSES, Round, RoundState};
use super::scoring::{ScoreSettings, SettingsPatch, compute_points};
use super::streak::StreakState;
use crate::core::{Feedback, GameDay, LetterHints, Word, share_grid};
use crate::error::{GameError, Result};
use crate::pools::{PoolCounts, PoolManager, WordPoolCache};
use crate::store::{GameStore, SecretWord, WordOrigin};
use serde::Serialize;
use tracing::{debug, info};

/// Client-safe view of a round after a submission or lookup
///
/// The secret is only ever present once the round is terminal.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub day: GameDay,
    pub guesses: Vec<String>,
    pub feedback: Vec<Feedback>,
    pub state: RoundState,
    pub attempts: u8,
    pub remaining: u8,
    /// Points awarded, present once the round is terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    /// The secret, revealed only on a terminal round
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Streak after this submission, present when it was a solve
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak: Option<StreakState>,
}

impl BoardView {
    /// Best-ever letter states across the round, for keyboard display
    #[must_use]
    pub fn letter_hints(&self) -> LetterHints {
        let mut hints = LetterHints::new();
        for (guess, feedback) in self.guesses.iter().zip(&self.feedback) {
            if let Ok(word) = Word::new(guess) {
                hints.absorb(&word, feedback);
            }
        }
        hints
    }
}

/// Full disclosure of a finished round
#[derive(Debug, Clone, Serialize)]
pub struct RoundResult {
    pub day: GameDay,
    pub secret: String,
    pub guesses: Vec<String>,
    pub attempts: u8,
    pub solved: bool,
    pub points: u32,
    /// Shareable emoji grid
    pub grid: String,
}

/// The daily puzzle engine
///
/// Generic over the persistence interface; concurrency guarantees for
/// round/streak updates come from the store's per-key atomicity contract,
/// the engine adds no locking of its own.
pub struct GameEngine<S: GameStore> {
    store: S,
    cache: WordPoolCache,
}

impl<S: GameStore> GameEngine<S> {
    /// Engine over a store, with an empty (lazily populated) pool cache
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: WordPoolCache::new(),
        }
    }

    /// Direct store access, for read-only consumers
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The pool mutation surface, wired to this engine's cache
    #[must_use]
    pub const fn pools(&self) -> PoolManager<'_, S> {
        PoolManager::new(&self.store, &self.cache)
    }

    /// Current pool sizes
    pub fn pool_counts(&self) -> Result<PoolCounts> {
        self.cache.counts(&self.store)
    }

    /// Submit a guess for "today" as seen from the user's timezone
    pub fn submit_guess(&self, user: &str, timezone: Option<&str>, guess: &str) -> Result<BoardView> {
        self.submit_guess_on(user, GameDay::today(timezone), guess)
    }

    /// Submit a guess for an explicit day
    ///
    /// Implements the round state machine: a terminal round rejects the
    /// submission with no mutation, an illegal guess likewise; otherwise the
    /// guess is appended, and a transition into Solved or Failed triggers
    /// exactly one scoring call (and, for Solved, one streak advance using
    /// the streak length as it stood before the advance).
    pub fn submit_guess_on(&self, user: &str, day: GameDay, guess: &str) -> Result<BoardView> {
        let word = Word::new(guess)?;

        if !self.cache.is_legal_guess(&self.store, &word)? {
            return Err(GameError::UnknownWord(word.text().to_string()));
        }

        let existing = self.store.find_round(user, day)?;
        if existing.as_ref().is_some_and(Round::is_terminal) {
            return Err(GameError::RoundComplete);
        }

        let secret = self.ensure_secret(day)?;
        let feedback = Feedback::evaluate(&word, &secret.word);
        let solved = feedback.is_solved();

        let attempts = existing.as_ref().map_or(1, |round| round.attempts() + 1);
        let terminal = solved || usize::from(attempts) >= MAX_GUESSES;

        // Scoring runs once, on the terminal transition, with the streak
        // length before this round's advance.
        let points = if terminal {
            let settings = self.store.get_score_settings()?;
            let streak_before = self.store.find_streak(user)?.map_or(0, |s| s.current);
            compute_points(attempts, solved, streak_before, &settings)
        } else {
            0
        };

        let round = match existing {
            None => self.store.create_round(user, day, &word, solved, points)?,
            Some(round) => self.store.append_guess(round.id, &word, solved, points)?,
        };

        // Only solves touch the streak engine; a failed round is not a
        // gap-breaking event - absence of play is, observed on the next solve.
        let streak = if solved {
            let previous = self.store.find_streak(user)?;
            let advanced = StreakState::advance(previous, day);
            self.store.upsert_streak(user, &advanced)?;
            info!(user, day = %day, streak = advanced.current, "round solved");
            Some(advanced)
        } else {
            if terminal {
                info!(user, day = %day, "round failed");
            }
            None
        };

        debug!(user, day = %day, attempts, solved, "guess accepted");
        Ok(self.view_of(&round, &secret, streak))
    }

    /// Client-safe view of the user's round for "today"
    pub fn board(&self, user: &str, timezone: Option<&str>) -> Result<BoardView> {
        self.board_on(user, GameDay::today(timezone))
    }

    /// Client-safe view of the user's round for an explicit day
    ///
    /// A day without a round yet yields an empty in-progress board; this
    /// read path never assigns a secret.
    pub fn board_on(&self, user: &str, day: GameDay) -> Result<BoardView> {
        match self.store.find_round(user, day)? {
            Some(round) => {
                let secret = self
                    .store
                    .find_secret_for_day(day)?
                    .ok_or_else(|| GameError::NoSecretForDay(day.to_string()))?;
                Ok(self.view_of(&round, &secret, None))
            }
            None => Ok(BoardView {
                day,
                guesses: Vec::new(),
                feedback: Vec::new(),
                state: RoundState::InProgress,
                attempts: 0,
                remaining: MAX_GUESSES as u8,
                points: None,
                secret: None,
                streak: None,
            }),
        }
    }

    /// Full result of a finished round, including the secret and share grid
    pub fn finished_result(&self, user: &str, timezone: Option<&str>) -> Result<RoundResult> {
        self.finished_result_on(user, GameDay::today(timezone))
    }

    /// Full result for an explicit day
    pub fn finished_result_on(&self, user: &str, day: GameDay) -> Result<RoundResult> {
        let round = self
            .store
            .find_round(user, day)?
            .ok_or(GameError::RoundNotFound)?;

        if !round.is_terminal() {
            return Err(GameError::RoundInProgress);
        }

        let secret = self
            .store
            .find_secret_for_day(day)?
            .ok_or_else(|| GameError::NoSecretForDay(day.to_string()))?;

        Ok(RoundResult {
            day,
            secret: secret.word.text().to_string(),
            guesses: round.guesses.iter().map(|g| g.text().to_string()).collect(),
            attempts: round.attempts(),
            solved: round.solved,
            points: round.points,
            grid: share_grid(&round.guesses, &secret.word),
        })
    }

    /// The user's streak record, if any
    pub fn streak(&self, user: &str) -> Result<Option<StreakState>> {
        self.store.find_streak(user)
    }

    /// Current scoring configuration (always complete)
    pub fn score_settings(&self) -> Result<ScoreSettings> {
        self.store.get_score_settings()
    }

    /// Apply a partial settings override and return the merged result
    pub fn update_score_settings(&self, patch: &SettingsPatch) -> Result<ScoreSettings> {
        self.store.set_score_settings(patch)?;
        self.store.get_score_settings()
    }

    /// Admin override of a day's secret
    ///
    /// The word must currently be an answer candidate; rounds already played
    /// against the previous secret are left untouched.
    pub fn override_secret(&self, day: GameDay, word: &str) -> Result<SecretWord> {
        let word = Word::new(word)?;
        if !self.cache.is_answer_candidate(&self.store, &word)? {
            return Err(GameError::UnknownWord(word.text().to_string()));
        }

        let secret = self.store.set_secret_for_day(day, &word, WordOrigin::Admin)?;
        info!(day = %day, "secret overridden by admin");
        Ok(secret)
    }

    /// Recent secret assignments, newest first (admin surface)
    pub fn secret_schedule(&self, limit: usize) -> Result<Vec<SecretWord>> {
        self.store.list_secrets(limit)
    }

    /// The day's secret, assigning one uniformly at random when absent
    fn ensure_secret(&self, day: GameDay) -> Result<SecretWord> {
        if let Some(secret) = self.store.find_secret_for_day(day)? {
            return Ok(secret);
        }

        let word = self
            .cache
            .pick_answer(&self.store)?
            .ok_or(GameError::AnswerPoolExhausted)?;

        let entry = self
            .store
            .list_answer_pool()?
            .into_iter()
            .find(|entry| entry.word == word);
        let origin = entry.map_or(WordOrigin::Curated, |e| e.origin);

        let secret = self.store.create_secret_for_day(day, &word, origin)?;
        info!(day = %day, "auto-assigned secret for day");
        Ok(secret)
    }

    fn view_of(&self, round: &Round, secret: &SecretWord, streak: Option<StreakState>) -> BoardView {
        let state = round.state();
        let terminal = state.is_terminal();

        BoardView {
            day: round.day,
            guesses: round.guesses.iter().map(|g| g.text().to_string()).collect(),
            feedback: round
                .guesses
                .iter()
                .map(|g| Feedback::evaluate(g, &secret.word))
                .collect(),
            state,
            attempts: round.attempts(),
            remaining: (MAX_GUESSES as u8).saturating_sub(round.attempts()),
            points: terminal.then_some(round.points),
            secret: terminal.then(|| secret.word.text().to_string()),
            streak,
        }
    }
}
