//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_import_report, print_pool_counts, print_result, print_secret_schedule,
    print_settings, print_streak,
};
