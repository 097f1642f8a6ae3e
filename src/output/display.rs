//! Display functions for command results

use super::formatters::{KEYBOARD_ROWS, empty_row, keyboard_row, tile_row};
use crate::core::GameDay;
use crate::engine::{BoardView, MAX_GUESSES, RoundResult, RoundState, ScoreSettings};
use crate::pools::{ImportReport, PoolCounts};
use crate::store::SecretWord;
use colored::Colorize;

/// Print the board after a submission or status lookup
pub fn print_board(view: &BoardView) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Daily puzzle {}", view.day.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());
    println!();

    for (guess, feedback) in view.guesses.iter().zip(&view.feedback) {
        println!("  {}", tile_row(guess, feedback));
    }
    for _ in view.guesses.len()..MAX_GUESSES {
        println!("  {}", empty_row());
    }

    println!();
    let hints = view.letter_hints();
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        println!("{}{}", " ".repeat(i + 2), keyboard_row(row, &hints));
    }
    println!();

    match view.state {
        RoundState::InProgress => {
            println!(
                "{} of {} guesses used, {} remaining",
                view.attempts, MAX_GUESSES, view.remaining
            );
        }
        RoundState::Solved => {
            println!(
                "{}",
                format!("✅ Solved in {} guesses!", view.attempts).green().bold()
            );
            if let Some(points) = view.points {
                println!("Points earned: {}", points.to_string().bright_yellow());
            }
            if let Some(streak) = &view.streak {
                println!(
                    "Streak: {} days (best {})",
                    streak.current.to_string().bright_green(),
                    streak.longest
                );
            }
        }
        RoundState::Failed => {
            println!("{}", "❌ Out of guesses!".red().bold());
            if let Some(secret) = &view.secret {
                println!("The word was {}", secret.to_uppercase().bright_yellow().bold());
            }
            if let Some(points) = view.points {
                println!("Points earned: {points}");
            }
        }
    }
}

/// Print the full result of a finished round
pub fn print_result(result: &RoundResult) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " Puzzle {} — {} ",
        result.day.to_string().bright_yellow(),
        if result.solved {
            format!("solved in {}", result.attempts).green().bold()
        } else {
            "not solved".red().bold()
        }
    );
    println!("{}", "═".repeat(40).cyan());

    println!("\nThe word was {}", result.secret.to_uppercase().bright_yellow().bold());
    println!("Points: {}", result.points);
    println!("\n{}", result.grid);
}

/// Print streak standing, shared by status output
pub fn print_streak(streak: Option<&crate::engine::StreakState>) {
    match streak {
        Some(streak) => println!(
            "Streak: {} days (best {}, last solve {})",
            streak.current.to_string().bright_green().bold(),
            streak.longest,
            streak.last_solved
        ),
        None => println!("Streak: {}", "no solves yet".dimmed()),
    }
}

/// Print a bulk import report
pub fn print_import_report(report: &ImportReport) {
    println!(
        "Imported {}, skipped {}",
        report.imported.to_string().green().bold(),
        report.skipped
    );

    if !report.errors.is_empty() {
        println!("\n{}", "Problems:".yellow());
        for error in &report.errors {
            println!("  {error}");
        }
    }
}

/// Print pool sizes
pub fn print_pool_counts(counts: &PoolCounts) {
    println!(
        "Answer pool: {} words | legal guesses: {}",
        counts.answers.to_string().bright_yellow(),
        counts.legal.to_string().bright_yellow()
    );
}

/// Print the scoring configuration
pub fn print_settings(settings: &ScoreSettings) {
    println!("\n{}", "Score settings".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());
    println!("  base_solve_points      {}", settings.base_solve_points);
    println!("  failed_attempt_points  {}", settings.failed_attempt_points);
    println!(
        "  attempt_bonus          {}",
        settings
            .attempt_bonus
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    );
    println!("  streak_bonus_3_day     {}", settings.streak_bonus_3_day);
    println!("  streak_bonus_7_day     {}", settings.streak_bonus_7_day);
    println!("  streak_bonus_30_day    {}", settings.streak_bonus_30_day);
}

/// Print the recent secret schedule (admin view)
pub fn print_secret_schedule(secrets: &[SecretWord], today: GameDay) {
    if secrets.is_empty() {
        println!("{}", "No secrets assigned yet".dimmed());
        return;
    }

    for secret in secrets {
        let marker = if secret.day == today { " ← today" } else { "" };
        println!(
            "  {}  {}  ({}){}",
            secret.day,
            secret.word.text().to_uppercase().bright_yellow(),
            secret.origin,
            marker.green()
        );
    }
}
