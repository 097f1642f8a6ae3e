//! In-memory word pool cache
//!
//! Two logical pools back every legality check: the Answer Pool (words
//! eligible to become a day's secret) and the Validation Pool (additional
//! legal guesses). The cache holds one immutable snapshot of both, built
//! lazily from the store and swapped atomically, so concurrent readers never
//! observe a half-rebuilt set.
//!
//! Any pool mutation must call `invalidate()` before its caller sees
//! success; the next read rebuilds from the store. Invalidation is always
//! whole-set - membership can change in either direction during an import,
//! so per-key patching would be unsound.

use crate::core::Word;
use crate::error::Result;
use crate::store::GameStore;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Sizes of both pools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolCounts {
    /// Words eligible to become a secret
    pub answers: usize,
    /// All legal guesses (answer ∪ validation)
    pub legal: usize,
}

/// One immutable view of both pools
struct PoolSnapshot {
    answers: FxHashSet<String>,
    legal: FxHashSet<String>,
    /// Stable ordering for uniform random selection
    answer_list: Vec<String>,
}

impl PoolSnapshot {
    fn build<S: GameStore + ?Sized>(store: &S) -> Result<Self> {
        let answer_entries = store.list_answer_pool()?;
        let validation_words = store.list_validation_pool()?;

        let mut answers = FxHashSet::default();
        let mut answer_list = Vec::with_capacity(answer_entries.len());
        for entry in answer_entries {
            if answers.insert(entry.word.text().to_string()) {
                answer_list.push(entry.word.text().to_string());
            }
        }

        // Answer words are legal guesses even when never duplicated into
        // the validation pool.
        let mut legal = answers.clone();
        for word in validation_words {
            legal.insert(word.text().to_string());
        }

        debug!(
            answers = answer_list.len(),
            legal = legal.len(),
            "rebuilt word pool snapshot"
        );

        Ok(Self {
            answers,
            legal,
            answer_list,
        })
    }
}

/// Process-wide cache over the two word pools
///
/// Owned and injected explicitly (typically one per engine); no ambient
/// global state.
#[derive(Default)]
pub struct WordPoolCache {
    snapshot: RwLock<Option<Arc<PoolSnapshot>>>,
}

impl WordPoolCache {
    /// Empty cache; the first read populates it
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the cached snapshot so the next read rebuilds from the store
    pub fn invalidate(&self) {
        let mut slot = self
            .snapshot
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = None;
        debug!("word pool cache invalidated");
    }

    /// Current snapshot, building it if needed
    ///
    /// The rebuild runs outside the write lock; two racing readers may both
    /// build, and the later swap simply wins - both snapshots are complete.
    fn load<S: GameStore + ?Sized>(&self, store: &S) -> Result<Arc<PoolSnapshot>> {
        {
            let slot = self
                .snapshot
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(snapshot) = slot.as_ref() {
                return Ok(Arc::clone(snapshot));
            }
        }

        let snapshot = Arc::new(PoolSnapshot::build(store)?);

        let mut slot = self
            .snapshot
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Is this word accepted as a guess?
    pub fn is_legal_guess<S: GameStore + ?Sized>(&self, store: &S, word: &Word) -> Result<bool> {
        Ok(self.load(store)?.legal.contains(word.text()))
    }

    /// Is this word eligible to become a day's secret?
    pub fn is_answer_candidate<S: GameStore + ?Sized>(
        &self,
        store: &S,
        word: &Word,
    ) -> Result<bool> {
        Ok(self.load(store)?.answers.contains(word.text()))
    }

    /// Pick a uniformly random answer candidate; None when the pool is empty
    pub fn pick_answer<S: GameStore + ?Sized>(&self, store: &S) -> Result<Option<Word>> {
        let snapshot = self.load(store)?;
        let mut rng = rand::rng();

        match snapshot.answer_list.choose(&mut rng) {
            Some(text) => Ok(Some(Word::new(text).map_err(|_| {
                crate::error::GameError::Corrupt(format!("bad pooled word: {text}"))
            })?)),
            None => Ok(None),
        }
    }

    /// Sizes of both pools
    pub fn counts<S: GameStore + ?Sized>(&self, store: &S) -> Result<PoolCounts> {
        let snapshot = self.load(store)?;
        Ok(PoolCounts {
            answers: snapshot.answers.len(),
            legal: snapshot.legal.len(),
        })
    }
}
