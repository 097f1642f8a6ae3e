//! Word list loading utilities
//!
//! Reads user-supplied word list files for bulk import, and converts the
//! embedded seed lists into validated words.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Read the raw lines of a word list file
///
/// Blank lines are dropped; everything else is returned untouched so the
/// pool manager can do per-row validation and error accounting.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}

/// Convert an embedded seed slice to validated words
///
/// Invalid entries are skipped; the seed lists are generated from curated
/// data so in practice nothing drops.
///
/// # Examples
/// ```
/// use wordle_daily::wordlists::loader::words_from_slice;
/// use wordle_daily::wordlists::ANSWER_SEEDS;
///
/// let words = words_from_slice(ANSWER_SEEDS);
/// assert_eq!(words.len(), ANSWER_SEEDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["wheat", "storm", "heart"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "wheat");
        assert_eq!(words[1].text(), "storm");
        assert_eq!(words[2].text(), "heart");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["wheat", "toolong", "abc", "storm"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "wheat");
        assert_eq!(words[1].text(), "storm");
    }

    #[test]
    fn read_lines_drops_blanks_keeps_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "wheat,curated\n\n  storm  \n").unwrap();

        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["wheat,curated", "storm"]);
    }

    #[test]
    fn read_lines_missing_file_errors() {
        assert!(read_lines("/definitely/not/here.txt").is_err());
    }
}
