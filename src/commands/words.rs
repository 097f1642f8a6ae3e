//! Admin word pool commands

use crate::engine::GameEngine;
use crate::error::Result;
use crate::output::{print_import_report, print_pool_counts};
use crate::pools::PoolKind;
use crate::store::{GameStore, WordOrigin};
use crate::wordlists::loader::read_lines;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

/// Add a single word to a pool
pub fn run_add<S: GameStore>(engine: &GameEngine<S>, word: &str, target: PoolKind) -> Result<()> {
    let pools = engine.pools();
    let inserted = match target {
        PoolKind::Answer => pools.add_answer_word(word, WordOrigin::Admin)?,
        PoolKind::Validation => pools.add_validation_word(word)?,
    };

    if inserted {
        println!("Added {}", word.to_lowercase().green().bold());
    } else {
        println!("{} is already in the pool", word.to_lowercase().yellow());
    }
    Ok(())
}

/// Remove an answer candidate (moderation path)
pub fn run_remove<S: GameStore>(engine: &GameEngine<S>, word: &str) -> Result<()> {
    if engine.pools().remove_answer_word(word)? {
        println!("Removed {}", word.to_lowercase().green().bold());
    } else {
        println!("{} was not in the answer pool", word.to_lowercase().yellow());
    }
    Ok(())
}

/// Bulk-import a word list file into a pool
pub fn run_import<S: GameStore>(
    engine: &GameEngine<S>,
    path: &Path,
    target: PoolKind,
) -> Result<()> {
    let rows = read_lines(path)?;

    let bar = ProgressBar::new(rows.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message("importing");

    let report = engine
        .pools()
        .import_rows(rows.iter().inspect(|_| bar.inc(1)), target)?;
    bar.finish_and_clear();

    print_import_report(&report);
    print_pool_counts(&engine.pool_counts()?);
    Ok(())
}

/// Export a pool to a file, or stdout when no path is given
pub fn run_export<S: GameStore>(
    engine: &GameEngine<S>,
    target: PoolKind,
    out: Option<&Path>,
) -> Result<()> {
    let content = engine.pools().export(target)?;

    match out {
        Some(path) => {
            fs::write(path, &content)?;
            println!(
                "Wrote {} words to {}",
                content.lines().count(),
                path.display()
            );
        }
        None => print!("{content}"),
    }
    Ok(())
}

/// List pool contents and sizes
pub fn run_list<S: GameStore>(engine: &GameEngine<S>, target: PoolKind) -> Result<()> {
    match target {
        PoolKind::Answer => {
            for entry in engine.store().list_answer_pool()? {
                println!("{}  ({})", entry.word, entry.origin);
            }
        }
        PoolKind::Validation => {
            for word in engine.store().list_validation_pool()? {
                println!("{word}");
            }
        }
    }
    print_pool_counts(&engine.pool_counts()?);
    Ok(())
}
