//! Guess feedback evaluation
//!
//! Evaluating a guess against the day's secret yields one state per position:
//! Correct (right letter, right position), Present (letter in the secret,
//! wrong position) or Absent. Duplicate letters are resolved with the exact
//! two-pass rules: Correct positions consume secret letters first, then
//! Present is awarded left to right from whatever remains.

use super::Word;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;

/// Per-position feedback state
///
/// Ordering matters: `Absent < Present < Correct`, so the best-ever state of
/// a letter across a round is just `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

/// Feedback for one guess: five position states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feedback([LetterState; 5]);

impl Feedback {
    /// Evaluate `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Build a remaining-count multiset from the secret's letters
    /// 2. First pass: mark exact matches Correct, decrementing the multiset
    /// 3. Second pass, left to right over unmarked positions: if the guessed
    ///    letter still has remaining count, mark Present and decrement,
    ///    otherwise mark Absent
    ///
    /// The pass order guarantees that when a letter appears more often in the
    /// guess than in the secret, Correct positions win first and only the
    /// leftmost excess occurrences read Present.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, LetterState, Word};
    ///
    /// let secret = Word::new("speed").unwrap();
    /// let guess = Word::new("erase").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// use LetterState::{Absent, Present};
    /// assert_eq!(
    ///     feedback.states(),
    ///     &[Present, Absent, Absent, Present, Present]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterState::Absent; 5];
        let mut remaining = secret.char_counts();

        // First pass: exact matches
        // Allow: index needed to compare guess[i] with secret[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == secret.chars()[i] {
                result[i] = LetterState::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present letters, left to right
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if result[i] == LetterState::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = LetterState::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// The five position states, in order
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; 5] {
        &self.0
    }

    /// The state at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn state_at(&self, position: usize) -> LetterState {
        self.0[position]
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Count of Correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterState::Correct).count()
    }

    /// Count of Present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterState::Present).count()
    }

    /// Convert feedback to an emoji row
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, Word};
    ///
    /// let secret = Word::new("wheat").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &secret);
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|state| match state {
                LetterState::Correct => '🟩',
                LetterState::Present => '🟨',
                LetterState::Absent => '⬛',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

/// Build the shareable emoji grid for a finished round
///
/// One row per guess, evaluated against the secret in submission order.
#[must_use]
pub fn share_grid(guesses: &[Word], secret: &Word) -> String {
    guesses
        .iter()
        .map(|guess| Feedback::evaluate(guess, secret).to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Best-ever letter states across a round
///
/// Drives the keyboard display: once a letter has been shown Correct in any
/// guess, later guesses never downgrade it.
#[derive(Debug, Default, Clone)]
pub struct LetterHints {
    states: FxHashMap<u8, LetterState>,
}

impl LetterHints {
    /// Empty hint set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build hints from a full guess history
    #[must_use]
    pub fn from_history(guesses: &[Word], secret: &Word) -> Self {
        let mut hints = Self::new();
        for guess in guesses {
            hints.absorb(guess, &Feedback::evaluate(guess, secret));
        }
        hints
    }

    /// Merge one guess's feedback, keeping the best state per letter
    pub fn absorb(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, &letter) in guess.chars().iter().enumerate() {
            let state = feedback.state_at(i);
            self.states
                .entry(letter)
                .and_modify(|existing| *existing = (*existing).max(state))
                .or_insert(state);
        }
    }

    /// Best-known state for a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterState> {
        self.states.get(&letter).copied()
    }

    /// Number of letters with a known state
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when no letters have been guessed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
