//! Word pool lifecycle manager
//!
//! The only sanctioned mutation surface for the two pools. Every mutating
//! operation invalidates the word pool cache synchronously before reporting
//! success, so no caller can observe success while a stale snapshot is still
//! serving reads. Moderation flows must remove words through here, never
//! against the store directly.

use super::WordPoolCache;
use crate::core::Word;
use crate::error::Result;
use crate::store::{GameStore, WordOrigin};
use tracing::info;

/// Which pool an import or export targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    Answer,
    Validation,
}

/// Outcome of a bulk import
///
/// Imports are partial-success: invalid and duplicate rows are skipped and
/// counted, never fatal to the batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

/// Mutation surface over the word pools
pub struct PoolManager<'a, S: GameStore> {
    store: &'a S,
    cache: &'a WordPoolCache,
}

impl<'a, S: GameStore> PoolManager<'a, S> {
    /// A manager over the given store and cache
    #[must_use]
    pub const fn new(store: &'a S, cache: &'a WordPoolCache) -> Self {
        Self { store, cache }
    }

    /// Add one answer candidate; false when it was already present
    ///
    /// # Errors
    /// Fails with `InvalidWord` for malformed text; the pools never hold
    /// anything but normalized 5-letter words.
    pub fn add_answer_word(&self, text: &str, origin: WordOrigin) -> Result<bool> {
        let word = Word::new(text)?;
        let inserted = self.store.insert_answer_word(&word, origin)?;
        self.cache.invalidate();

        if inserted {
            info!(word = %word, %origin, "answer word added");
        }
        Ok(inserted)
    }

    /// Add one validation-pool word; false when it was already present
    pub fn add_validation_word(&self, text: &str) -> Result<bool> {
        let word = Word::new(text)?;
        let inserted = self.store.insert_validation_word(&word)?;
        self.cache.invalidate();

        if inserted {
            info!(word = %word, "validation word added");
        }
        Ok(inserted)
    }

    /// Remove an answer candidate (moderation path)
    ///
    /// Removal only touches the Answer Pool: if the word also lives in the
    /// Validation Pool it stays guessable, it just can never be a secret
    /// again. Returns false when the word was not in the pool.
    pub fn remove_answer_word(&self, text: &str) -> Result<bool> {
        let word = Word::new(text)?;
        let removed = self.store.delete_answer_word(&word)?;
        self.cache.invalidate();

        if removed {
            info!(word = %word, "answer word removed");
        }
        Ok(removed)
    }

    /// Bulk-import rows into a pool
    ///
    /// Row format is one word per line, answer rows optionally carrying an
    /// origin tag: `word[,origin]`. Empty lines and a leading `word` header
    /// are ignored. Each row validates independently; failures land in the
    /// report instead of aborting the batch.
    pub fn import_rows<I>(&self, rows: I, target: PoolKind) -> Result<ImportReport>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut report = ImportReport::default();

        for (index, row) in rows.into_iter().enumerate() {
            let line = row.as_ref().trim();
            if line.is_empty() || line.eq_ignore_ascii_case("word") {
                continue;
            }

            let line_no = index + 1;
            let (text, origin) = match parse_row(line, target) {
                Ok(parsed) => parsed,
                Err(reason) => {
                    report.errors.push(format!("line {line_no}: {reason}"));
                    report.skipped += 1;
                    continue;
                }
            };

            let word = match Word::new(text) {
                Ok(word) => word,
                Err(err) => {
                    report.errors.push(format!("line {line_no}: {err}"));
                    report.skipped += 1;
                    continue;
                }
            };

            let inserted = match target {
                PoolKind::Answer => self.store.insert_answer_word(&word, origin)?,
                PoolKind::Validation => self.store.insert_validation_word(&word)?,
            };

            if inserted {
                report.imported += 1;
            } else {
                // Duplicate row
                report.skipped += 1;
            }
        }

        // Success is only reported once the next read is guaranteed fresh
        self.cache.invalidate();
        info!(
            imported = report.imported,
            skipped = report.skipped,
            ?target,
            "pool import finished"
        );
        Ok(report)
    }

    /// Export a pool in the import row format (read-only, no cache touch)
    pub fn export(&self, target: PoolKind) -> Result<String> {
        let mut out = String::new();

        match target {
            PoolKind::Answer => {
                for entry in self.store.list_answer_pool()? {
                    out.push_str(entry.word.text());
                    out.push(',');
                    out.push_str(&entry.origin.to_string());
                    out.push('\n');
                }
            }
            PoolKind::Validation => {
                for word in self.store.list_validation_pool()? {
                    out.push_str(word.text());
                    out.push('\n');
                }
            }
        }

        Ok(out)
    }
}

/// Split a row into word text and origin
fn parse_row(line: &str, target: PoolKind) -> std::result::Result<(&str, WordOrigin), String> {
    let mut fields = line.split(',').map(str::trim);
    let text = fields.next().unwrap_or_default().trim_matches('"');

    let origin = match (target, fields.next()) {
        (PoolKind::Answer, Some(tag)) if !tag.is_empty() => tag
            .trim_matches('"')
            .parse()
            .map_err(|_| format!("invalid origin '{tag}'"))?,
        _ => WordOrigin::Imported,
    };

    if fields.next().is_some() {
        return Err("too many fields".to_string());
    }

    Ok((text, origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn setup() -> (SqliteStore, WordPoolCache) {
        (SqliteStore::open_in_memory().unwrap(), WordPoolCache::new())
    }

    #[test]
    fn add_validates_and_invalidates() {
        let (store, cache) = setup();
        let manager = PoolManager::new(&store, &cache);

        // Warm the cache while empty
        assert!(!cache.is_legal_guess(&store, &w("wheat")).unwrap());

        assert!(manager.add_answer_word("WHEAT", WordOrigin::Admin).unwrap());
        // Visible immediately: the add invalidated the warm cache
        assert!(cache.is_legal_guess(&store, &w("wheat")).unwrap());
        assert!(cache.is_answer_candidate(&store, &w("wheat")).unwrap());

        // Duplicate reports false
        assert!(!manager.add_answer_word("wheat", WordOrigin::Admin).unwrap());

        // Malformed input never reaches the store
        assert!(manager.add_answer_word("nope", WordOrigin::Admin).is_err());
        assert!(manager.add_answer_word("12345", WordOrigin::Admin).is_err());
    }

    #[test]
    fn removal_invalidates_before_returning() {
        let (store, cache) = setup();
        let manager = PoolManager::new(&store, &cache);
        manager.add_answer_word("wheat", WordOrigin::Admin).unwrap();
        assert!(cache.is_answer_candidate(&store, &w("wheat")).unwrap());

        assert!(manager.remove_answer_word("wheat").unwrap());
        assert!(!cache.is_answer_candidate(&store, &w("wheat")).unwrap());
        assert!(!cache.is_legal_guess(&store, &w("wheat")).unwrap());

        assert!(!manager.remove_answer_word("wheat").unwrap());
    }

    #[test]
    fn removed_answer_stays_guessable_via_validation_pool() {
        let (store, cache) = setup();
        let manager = PoolManager::new(&store, &cache);
        manager.add_answer_word("storm", WordOrigin::Admin).unwrap();
        manager.add_validation_word("storm").unwrap();

        manager.remove_answer_word("storm").unwrap();
        assert!(!cache.is_answer_candidate(&store, &w("storm")).unwrap());
        assert!(cache.is_legal_guess(&store, &w("storm")).unwrap());
    }

    #[test]
    fn import_counts_partial_success() {
        let (store, cache) = setup();
        let manager = PoolManager::new(&store, &cache);

        let rows = [
            "word",          // header, ignored
            "wheat,curated", // ok
            "storm",         // ok, defaults to imported
            "",              // blank, ignored
            "xx",            // invalid length
            "wheat",         // duplicate
            "abc!e",         // invalid characters
            "light,bogus",   // invalid origin
        ];

        let report = manager.import_rows(rows, PoolKind::Answer).unwrap();
        assert_eq!(report.imported, 2);
        assert_eq!(report.skipped, 4);
        assert_eq!(report.errors.len(), 3);

        assert!(cache.is_answer_candidate(&store, &w("wheat")).unwrap());
        assert!(cache.is_answer_candidate(&store, &w("storm")).unwrap());
        assert!(!cache.is_answer_candidate(&store, &w("light")).unwrap());
    }

    #[test]
    fn import_into_validation_pool() {
        let (store, cache) = setup();
        let manager = PoolManager::new(&store, &cache);

        let report = manager
            .import_rows(["erase", "crane"], PoolKind::Validation)
            .unwrap();
        assert_eq!(report.imported, 2);

        assert!(cache.is_legal_guess(&store, &w("erase")).unwrap());
        assert!(!cache.is_answer_candidate(&store, &w("erase")).unwrap());
    }

    #[test]
    fn export_round_trips_through_import() {
        let (store, cache) = setup();
        let manager = PoolManager::new(&store, &cache);
        manager.add_answer_word("wheat", WordOrigin::Curated).unwrap();
        manager.add_answer_word("storm", WordOrigin::Admin).unwrap();

        let exported = manager.export(PoolKind::Answer).unwrap();
        assert!(exported.contains("wheat,curated"));
        assert!(exported.contains("storm,admin"));

        // Re-import into a fresh store preserves origin tags
        let (store2, cache2) = setup();
        let manager2 = PoolManager::new(&store2, &cache2);
        let report = manager2
            .import_rows(exported.lines(), PoolKind::Answer)
            .unwrap();
        assert_eq!(report.imported, 2);

        let entries = store2.list_answer_pool().unwrap();
        let wheat = entries.iter().find(|e| e.word.text() == "wheat").unwrap();
        assert_eq!(wheat.origin, WordOrigin::Curated);
    }
}
