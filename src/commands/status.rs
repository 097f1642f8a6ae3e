//! Round status and result commands

use crate::engine::GameEngine;
use crate::error::{GameError, Result};
use crate::output::{print_board, print_result, print_streak};
use crate::store::GameStore;
use colored::Colorize;

/// Print today's board, streak standing and pool health
pub fn run_status<S: GameStore>(
    engine: &GameEngine<S>,
    user: &str,
    timezone: Option<&str>,
) -> Result<()> {
    let view = engine.board(user, timezone)?;
    print_board(&view);

    print_streak(engine.streak(user)?.as_ref());

    let counts = engine.pool_counts()?;
    if counts.answers == 0 {
        println!(
            "{}",
            "Warning: the answer pool is empty - no new secrets can be assigned!"
                .red()
                .bold()
        );
    }
    Ok(())
}

/// Print the full result of today's round, secret included
///
/// Only available once the round is terminal; before that the secret stays
/// hidden and a notice is printed instead.
pub fn run_result<S: GameStore>(
    engine: &GameEngine<S>,
    user: &str,
    timezone: Option<&str>,
) -> Result<()> {
    match engine.finished_result(user, timezone) {
        Ok(result) => {
            print_result(&result);
            Ok(())
        }
        Err(GameError::RoundNotFound) => {
            println!("{}", "No round played today.".yellow());
            Ok(())
        }
        Err(GameError::RoundInProgress) => {
            println!(
                "{}",
                "Today's round is still in progress - finish it first!".yellow()
            );
            Ok(())
        }
        Err(err) => Err(err),
    }
}
