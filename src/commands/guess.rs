//! One-shot guess submission

use crate::engine::GameEngine;
use crate::error::{GameError, Result};
use crate::output::print_board;
use crate::store::GameStore;
use colored::Colorize;

/// Submit one guess and print the resulting board
///
/// Rejected guesses (malformed or unknown words) and an already-finished
/// round are user-facing outcomes, not failures: they print a notice and
/// return Ok so the process exits cleanly.
pub fn run_guess<S: GameStore>(
    engine: &GameEngine<S>,
    user: &str,
    timezone: Option<&str>,
    word: &str,
) -> Result<()> {
    match engine.submit_guess(user, timezone, word) {
        Ok(view) => {
            print_board(&view);
            Ok(())
        }
        Err(err) if err.is_rejected_guess() => {
            println!("{}", err.to_string().yellow());
            Ok(())
        }
        Err(GameError::RoundComplete) => {
            println!("{}", "Today's round is already complete.".yellow());
            // Show the final board instead
            let view = engine.board(user, timezone)?;
            print_board(&view);
            Ok(())
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameDay;
    use crate::store::{SqliteStore, WordOrigin};

    fn engine() -> GameEngine<SqliteStore> {
        let engine = GameEngine::new(SqliteStore::open_in_memory().unwrap());
        engine
            .pools()
            .add_answer_word("wheat", WordOrigin::Curated)
            .unwrap();
        engine
            .override_secret(GameDay::today(None), "wheat")
            .unwrap();
        engine
    }

    #[test]
    fn rejected_guess_is_not_an_error() {
        let engine = engine();
        assert!(run_guess(&engine, "alice", None, "zz").is_ok());
        assert!(run_guess(&engine, "alice", None, "qajaq").is_ok());
    }

    #[test]
    fn completed_round_is_not_an_error() {
        let engine = engine();
        run_guess(&engine, "alice", None, "wheat").unwrap();
        assert!(run_guess(&engine, "alice", None, "wheat").is_ok());
    }

    #[test]
    fn exhausted_pool_is_an_error() {
        let engine = GameEngine::new(SqliteStore::open_in_memory().unwrap());
        engine.pools().add_validation_word("storm").unwrap();

        let err = run_guess(&engine, "alice", None, "storm").unwrap_err();
        assert!(matches!(err, GameError::AnswerPoolExhausted));
    }
}
