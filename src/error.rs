//! Engine error taxonomy

use crate::core::WordError;
use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors surfaced by the daily puzzle engine
///
/// The variants distinguish the caller-facing conditions: a malformed or
/// unknown guess can be corrected and resubmitted, a terminal round cannot,
/// and an exhausted answer pool needs an administrator.
#[derive(Error, Debug)]
pub enum GameError {
    /// Guess failed structural validation (length, characters)
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// Guess is well-formed but not in the legal-guess set
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),

    /// The round for this day is already solved or failed
    #[error("today's round is already complete")]
    RoundComplete,

    /// No answer candidates remain to assign a secret for the day
    #[error("the answer pool is empty; an administrator must add words")]
    AnswerPoolExhausted,

    /// A day has no secret and none could be assigned
    #[error("no secret word is assigned for {0}")]
    NoSecretForDay(String),

    /// Round lookup for a result that does not exist yet
    #[error("no round found for this day")]
    RoundNotFound,

    /// Result requested while the round still accepts guesses
    #[error("the round is not finished yet")]
    RoundInProgress,

    /// Persistence failure, propagated unchanged
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// A persisted value failed to parse back into its domain type
    #[error("corrupt stored value: {0}")]
    Corrupt(String),

    /// Serialization of a persisted value failed
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O failure reading or writing a word list file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// True for conditions the user can fix by resubmitting a different guess
    #[must_use]
    pub const fn is_rejected_guess(&self) -> bool {
        matches!(self, Self::InvalidWord(_) | Self::UnknownWord(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_guess_classification() {
        assert!(GameError::UnknownWord("zzzzz".into()).is_rejected_guess());
        assert!(GameError::InvalidWord(WordError::InvalidLength(4)).is_rejected_guess());
        assert!(!GameError::RoundComplete.is_rejected_guess());
        assert!(!GameError::AnswerPoolExhausted.is_rejected_guess());
    }

    #[test]
    fn display_messages() {
        let err = GameError::UnknownWord("qqqqq".into());
        assert_eq!(err.to_string(), "'qqqqq' is not in the word list");

        let err = GameError::RoundComplete;
        assert!(err.to_string().contains("already complete"));
    }
}
