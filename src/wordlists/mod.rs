//! Seed word lists
//!
//! Embedded lists compiled into the binary, used to bootstrap the word pools
//! of a fresh database.

mod embedded;
pub mod loader;

pub use embedded::{ANSWER_SEEDS, ANSWER_SEEDS_COUNT, GUESS_SEEDS, GUESS_SEEDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_seeds_count_matches_const() {
        assert_eq!(ANSWER_SEEDS.len(), ANSWER_SEEDS_COUNT);
    }

    #[test]
    fn guess_seeds_count_matches_const() {
        assert_eq!(GUESS_SEEDS.len(), GUESS_SEEDS_COUNT);
    }

    #[test]
    fn answer_seeds_are_valid_words() {
        for &word in ANSWER_SEEDS {
            assert_eq!(word.len(), 5, "word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn guess_seeds_are_valid_words() {
        for &word in GUESS_SEEDS {
            assert_eq!(word.len(), 5, "word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn seed_lists_are_disjoint() {
        // Validation seeds are guess-only words; answer seeds reach the
        // legal-guess set through the pool union instead.
        let answers: std::collections::HashSet<_> = ANSWER_SEEDS.iter().collect();

        for &word in GUESS_SEEDS {
            assert!(
                !answers.contains(&word),
                "seed '{word}' appears in both lists"
            );
        }
    }
}
