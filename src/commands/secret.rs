//! Admin secret schedule commands

use crate::core::GameDay;
use crate::engine::GameEngine;
use crate::error::{GameError, Result};
use crate::output::print_secret_schedule;
use crate::store::GameStore;
use colored::Colorize;

/// Assign (or override) the secret for a day
///
/// The word must already be an answer candidate; defaults to today when no
/// day is given.
pub fn run_set<S: GameStore>(
    engine: &GameEngine<S>,
    day: Option<GameDay>,
    word: &str,
    timezone: Option<&str>,
) -> Result<()> {
    let day = day.unwrap_or_else(|| GameDay::today(timezone));

    match engine.override_secret(day, word) {
        Ok(secret) => {
            println!(
                "Secret for {} set to {}",
                secret.day,
                secret.word.text().to_uppercase().green().bold()
            );
            Ok(())
        }
        Err(err) if err.is_rejected_guess() => {
            println!("{}", format!("Cannot use '{word}': {err}").yellow());
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Show recent secret assignments (admin view, words included)
pub fn run_list<S: GameStore>(
    engine: &GameEngine<S>,
    limit: usize,
    timezone: Option<&str>,
) -> Result<()> {
    let secrets = engine.secret_schedule(limit)?;
    print_secret_schedule(&secrets, GameDay::today(timezone));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{SqliteStore, WordOrigin};

    fn engine() -> GameEngine<SqliteStore> {
        let engine = GameEngine::new(SqliteStore::open_in_memory().unwrap());
        engine
            .pools()
            .add_answer_word("wheat", WordOrigin::Curated)
            .unwrap();
        engine
    }

    #[test]
    fn set_for_explicit_day() {
        let engine = engine();
        let day: GameDay = "2024-03-15".parse().unwrap();

        run_set(&engine, Some(day), "wheat", None).unwrap();
        let secret = engine.store().find_secret_for_day(day).unwrap().unwrap();
        assert_eq!(secret.word.text(), "wheat");
    }

    #[test]
    fn non_candidate_word_is_a_notice() {
        let engine = engine();
        let day: GameDay = "2024-03-15".parse().unwrap();

        assert!(run_set(&engine, Some(day), "qajaq", None).is_ok());
        assert!(engine.store().find_secret_for_day(day).unwrap().is_none());
    }

    #[test]
    fn list_never_fails_when_empty() {
        let engine = engine();
        assert!(run_list(&engine, 10, None).is_ok());
    }
}
