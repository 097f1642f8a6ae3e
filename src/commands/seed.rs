//! Database seeding from the embedded word lists

use crate::engine::GameEngine;
use crate::error::Result;
use crate::output::{print_import_report, print_pool_counts};
use crate::pools::PoolKind;
use crate::store::GameStore;
use crate::wordlists::{ANSWER_SEEDS, GUESS_SEEDS};
use colored::Colorize;

/// Populate both pools from the embedded seed lists
///
/// Safe to re-run: words already present are skipped. Answer seeds carry the
/// curated origin tag; validation seeds are guess-only words.
pub fn run_seed<S: GameStore>(engine: &GameEngine<S>) -> Result<()> {
    let pools = engine.pools();

    println!("Seeding {} answer words...", ANSWER_SEEDS.len());
    let answer_rows: Vec<String> = ANSWER_SEEDS
        .iter()
        .map(|word| format!("{word},curated"))
        .collect();
    let report = pools.import_rows(&answer_rows, PoolKind::Answer)?;
    print_import_report(&report);

    println!("Seeding {} validation words...", GUESS_SEEDS.len());
    let report = pools.import_rows(GUESS_SEEDS.iter().copied(), PoolKind::Validation)?;
    print_import_report(&report);

    print_pool_counts(&engine.pool_counts()?);
    println!("{}", "Seed complete".green().bold());
    Ok(())
}
