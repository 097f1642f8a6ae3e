//! SQLite-backed store
//!
//! Single-file database with the schema created on open. The connection sits
//! behind a mutex, which serializes every operation in-process and satisfies
//! the per-key atomicity contract of `GameStore`; multi-statement mutations
//! additionally run inside transactions.

use super::{GameStore, PoolEntry, SecretWord, WordOrigin};
use crate::core::{GameDay, Word};
use crate::engine::{Round, ScoreSettings, SettingsPatch, StreakState};
use crate::error::{GameError, Result};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS rounds (
    id       INTEGER PRIMARY KEY,
    username TEXT NOT NULL,
    day      TEXT NOT NULL,
    guesses  TEXT NOT NULL DEFAULT '[]',
    solved   INTEGER NOT NULL DEFAULT 0,
    points   INTEGER NOT NULL DEFAULT 0,
    UNIQUE(username, day)
);
CREATE TABLE IF NOT EXISTS streaks (
    username    TEXT PRIMARY KEY,
    current     INTEGER NOT NULL,
    longest     INTEGER NOT NULL,
    last_solved TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS answer_words (
    word   TEXT PRIMARY KEY,
    origin TEXT NOT NULL DEFAULT 'admin'
);
CREATE TABLE IF NOT EXISTS validation_words (
    word TEXT PRIMARY KEY
);
CREATE TABLE IF NOT EXISTS secret_words (
    id     INTEGER PRIMARY KEY,
    word   TEXT NOT NULL,
    origin TEXT NOT NULL,
    day    TEXT NOT NULL UNIQUE
);
CREATE TABLE IF NOT EXISTS settings (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
";

/// SQLite implementation of `GameStore`
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.execute_batch(SCHEMA)?;
        info!(path = %path.as_ref().display(), "opened game store");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory database, used by tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        // A poisoned mutex means another thread panicked mid-statement;
        // the connection itself is still usable.
        self.conn.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

fn parse_day(text: &str) -> Result<GameDay> {
    text.parse()
        .map_err(|_| GameError::Corrupt(format!("bad day value: {text}")))
}

fn parse_word(text: &str) -> Result<Word> {
    Word::new(text).map_err(|_| GameError::Corrupt(format!("bad stored word: {text}")))
}

fn parse_origin(text: &str) -> Result<WordOrigin> {
    text.parse().map_err(GameError::Corrupt)
}

fn parse_guesses(json: &str) -> Result<Vec<Word>> {
    let texts: Vec<String> = serde_json::from_str(json)?;
    texts.iter().map(|t| parse_word(t)).collect()
}

/// Raw round row before domain conversion
struct RoundRow {
    id: i64,
    username: String,
    day: String,
    guesses: String,
    solved: bool,
    points: u32,
}

impl RoundRow {
    fn into_round(self) -> Result<Round> {
        Ok(Round {
            id: self.id,
            user: self.username,
            day: parse_day(&self.day)?,
            guesses: parse_guesses(&self.guesses)?,
            solved: self.solved,
            points: self.points,
        })
    }
}

const ROUND_COLUMNS: &str = "id, username, day, guesses, solved, points";

fn round_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RoundRow> {
    Ok(RoundRow {
        id: row.get(0)?,
        username: row.get(1)?,
        day: row.get(2)?,
        guesses: row.get(3)?,
        solved: row.get(4)?,
        points: row.get(5)?,
    })
}

fn secret_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<(i64, String, String, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn secret_from_parts(parts: (i64, String, String, String)) -> Result<SecretWord> {
    let (id, word, origin, day) = parts;
    Ok(SecretWord {
        id,
        word: parse_word(&word)?,
        origin: parse_origin(&origin)?,
        day: parse_day(&day)?,
    })
}

impl GameStore for SqliteStore {
    fn find_round(&self, user: &str, day: GameDay) -> Result<Option<Round>> {
        let conn = self.lock();
        let row = conn
            .query_row(
                &format!("SELECT {ROUND_COLUMNS} FROM rounds WHERE username = ?1 AND day = ?2"),
                params![user, day.to_string()],
                round_row,
            )
            .optional()?;

        row.map(RoundRow::into_round).transpose()
    }

    fn create_round(
        &self,
        user: &str,
        day: GameDay,
        guess: &Word,
        solved: bool,
        points: u32,
    ) -> Result<Round> {
        let conn = self.lock();
        let guesses = serde_json::to_string(&[guess.text()])?;
        conn.execute(
            "INSERT INTO rounds (username, day, guesses, solved, points)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![user, day.to_string(), guesses, solved, points],
        )?;
        let id = conn.last_insert_rowid();
        debug!(user, day = %day, id, "created round");

        Ok(Round {
            id,
            user: user.to_string(),
            day,
            guesses: vec![guess.clone()],
            solved,
            points,
        })
    }

    fn append_guess(
        &self,
        round_id: i64,
        guess: &Word,
        solved: bool,
        points: u32,
    ) -> Result<Round> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;

        let row = tx.query_row(
            &format!("SELECT {ROUND_COLUMNS} FROM rounds WHERE id = ?1"),
            params![round_id],
            round_row,
        )?;
        let mut round = row.into_round()?;

        round.guesses.push(guess.clone());
        round.solved = solved;
        round.points = points;

        let texts: Vec<&str> = round.guesses.iter().map(Word::text).collect();
        tx.execute(
            "UPDATE rounds SET guesses = ?1, solved = ?2, points = ?3 WHERE id = ?4",
            params![serde_json::to_string(&texts)?, solved, points, round_id],
        )?;
        tx.commit()?;

        Ok(round)
    }

    fn find_streak(&self, user: &str) -> Result<Option<StreakState>> {
        let conn = self.lock();
        let row: Option<(u32, u32, String)> = conn
            .query_row(
                "SELECT current, longest, last_solved FROM streaks WHERE username = ?1",
                params![user],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        row.map(|(current, longest, last_solved)| {
            Ok(StreakState {
                current,
                longest,
                last_solved: parse_day(&last_solved)?,
            })
        })
        .transpose()
    }

    fn upsert_streak(&self, user: &str, streak: &StreakState) -> Result<()> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO streaks (username, current, longest, last_solved)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(username) DO UPDATE SET
                 current = excluded.current,
                 longest = excluded.longest,
                 last_solved = excluded.last_solved",
            params![
                user,
                streak.current,
                streak.longest,
                streak.last_solved.to_string()
            ],
        )?;
        Ok(())
    }

    fn count_answer_pool(&self) -> Result<usize> {
        let conn = self.lock();
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM answer_words", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn count_validation_pool(&self) -> Result<usize> {
        let conn = self.lock();
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM validation_words", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn list_answer_pool(&self) -> Result<Vec<PoolEntry>> {
        let conn = self.lock();
        let mut stmt = conn.prepare("SELECT word, origin FROM answer_words ORDER BY word")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (word, origin) = row?;
            entries.push(PoolEntry {
                word: parse_word(&word)?,
                origin: parse_origin(&origin)?,
            });
        }
        Ok(entries)
    }

    fn list_validation_pool(&self) -> Result<Vec<Word>> {
        let conn = self.lock();
        let mut stmt = conn.prepare("SELECT word FROM validation_words ORDER BY word")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut words = Vec::new();
        for row in rows {
            words.push(parse_word(&row?)?);
        }
        Ok(words)
    }

    fn insert_answer_word(&self, word: &Word, origin: WordOrigin) -> Result<bool> {
        let conn = self.lock();
        let changed = conn.execute(
            "INSERT OR IGNORE INTO answer_words (word, origin) VALUES (?1, ?2)",
            params![word.text(), origin.to_string()],
        )?;
        Ok(changed == 1)
    }

    fn insert_validation_word(&self, word: &Word) -> Result<bool> {
        let conn = self.lock();
        let changed = conn.execute(
            "INSERT OR IGNORE INTO validation_words (word) VALUES (?1)",
            params![word.text()],
        )?;
        Ok(changed == 1)
    }

    fn delete_answer_word(&self, word: &Word) -> Result<bool> {
        let conn = self.lock();
        let changed = conn.execute(
            "DELETE FROM answer_words WHERE word = ?1",
            params![word.text()],
        )?;
        Ok(changed == 1)
    }

    fn find_secret_for_day(&self, day: GameDay) -> Result<Option<SecretWord>> {
        let conn = self.lock();
        let row = conn
            .query_row(
                "SELECT id, word, origin, day FROM secret_words WHERE day = ?1",
                params![day.to_string()],
                secret_row,
            )
            .optional()?;

        row.map(secret_from_parts).transpose()
    }

    fn create_secret_for_day(
        &self,
        day: GameDay,
        word: &Word,
        origin: WordOrigin,
    ) -> Result<SecretWord> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO secret_words (word, origin, day) VALUES (?1, ?2, ?3)",
            params![word.text(), origin.to_string(), day.to_string()],
        )?;
        let id = conn.last_insert_rowid();
        debug!(day = %day, "assigned secret for day");

        Ok(SecretWord {
            id,
            word: word.clone(),
            origin,
            day,
        })
    }

    fn set_secret_for_day(
        &self,
        day: GameDay,
        word: &Word,
        origin: WordOrigin,
    ) -> Result<SecretWord> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO secret_words (word, origin, day) VALUES (?1, ?2, ?3)
             ON CONFLICT(day) DO UPDATE SET
                 word = excluded.word,
                 origin = excluded.origin",
            params![word.text(), origin.to_string(), day.to_string()],
        )?;
        let row = conn.query_row(
            "SELECT id, word, origin, day FROM secret_words WHERE day = ?1",
            params![day.to_string()],
            secret_row,
        )?;

        secret_from_parts(row)
    }

    fn list_secrets(&self, limit: usize) -> Result<Vec<SecretWord>> {
        let conn = self.lock();
        let mut stmt = conn.prepare(
            "SELECT id, word, origin, day FROM secret_words ORDER BY day DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], secret_row)?;

        let mut secrets = Vec::new();
        for row in rows {
            secrets.push(secret_from_parts(row?)?);
        }
        Ok(secrets)
    }

    fn get_score_settings(&self) -> Result<ScoreSettings> {
        let conn = self.lock();
        let mut stmt = conn.prepare("SELECT key, value FROM settings")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        // Persisted overrides are merged onto defaults so the result is
        // always a complete configuration.
        let mut overrides = serde_json::Map::new();
        for row in rows {
            let (key, value) = row?;
            let parsed: serde_json::Value = serde_json::from_str(&value)
                .map_err(|_| GameError::Corrupt(format!("bad setting value for {key}")))?;
            overrides.insert(key, parsed);
        }

        let patch: SettingsPatch = serde_json::from_value(serde_json::Value::Object(overrides))?;
        Ok(ScoreSettings::merged(&patch))
    }

    fn set_score_settings(&self, patch: &SettingsPatch) -> Result<()> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;

        if let serde_json::Value::Object(fields) = serde_json::to_value(patch)? {
            for (key, value) in fields {
                tx.execute(
                    "INSERT INTO settings (key, value) VALUES (?1, ?2)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                    params![key, value.to_string()],
                )?;
            }
        }

        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteStore {
        SqliteStore::open_in_memory().unwrap()
    }

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn day(s: &str) -> GameDay {
        s.parse().unwrap()
    }

    #[test]
    fn open_on_disk_creates_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.db");
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.count_answer_pool().unwrap(), 0);

        // Reopen and make sure the schema survives
        drop(store);
        let store = SqliteStore::open(&path).unwrap();
        assert!(store.insert_answer_word(&w("wheat"), WordOrigin::Admin).unwrap());
    }

    #[test]
    fn round_create_find_append() {
        let store = store();
        let d = day("2024-03-15");

        assert!(store.find_round("alice", d).unwrap().is_none());

        let round = store
            .create_round("alice", d, &w("storm"), false, 0)
            .unwrap();
        assert_eq!(round.attempts(), 1);
        assert!(!round.solved);

        let round = store.append_guess(round.id, &w("wheat"), true, 12).unwrap();
        assert_eq!(round.attempts(), 2);
        assert!(round.solved);
        assert_eq!(round.points, 12);

        let found = store.find_round("alice", d).unwrap().unwrap();
        assert_eq!(found.id, round.id);
        assert_eq!(found.guesses, vec![w("storm"), w("wheat")]);
        assert!(found.solved);
    }

    #[test]
    fn duplicate_round_creation_rejected() {
        let store = store();
        let d = day("2024-03-15");
        store
            .create_round("alice", d, &w("storm"), false, 0)
            .unwrap();

        let dup = store.create_round("alice", d, &w("light"), false, 0);
        assert!(dup.is_err());
    }

    #[test]
    fn rounds_isolated_per_user_and_day() {
        let store = store();
        let d = day("2024-03-15");
        store
            .create_round("alice", d, &w("storm"), false, 0)
            .unwrap();
        store.create_round("bob", d, &w("light"), false, 0).unwrap();
        store
            .create_round("alice", d.next(), &w("heart"), false, 0)
            .unwrap();

        assert_eq!(
            store.find_round("alice", d).unwrap().unwrap().guesses,
            vec![w("storm")]
        );
        assert_eq!(
            store.find_round("bob", d).unwrap().unwrap().guesses,
            vec![w("light")]
        );
    }

    #[test]
    fn streak_upsert_round_trip() {
        let store = store();
        assert!(store.find_streak("alice").unwrap().is_none());

        let streak = StreakState {
            current: 3,
            longest: 5,
            last_solved: day("2024-03-15"),
        };
        store.upsert_streak("alice", &streak).unwrap();
        assert_eq!(store.find_streak("alice").unwrap(), Some(streak));

        let advanced = StreakState {
            current: 4,
            longest: 5,
            last_solved: day("2024-03-16"),
        };
        store.upsert_streak("alice", &advanced).unwrap();
        assert_eq!(store.find_streak("alice").unwrap(), Some(advanced));
    }

    #[test]
    fn pool_inserts_detect_duplicates() {
        let store = store();
        assert!(store.insert_answer_word(&w("wheat"), WordOrigin::Curated).unwrap());
        assert!(!store.insert_answer_word(&w("wheat"), WordOrigin::Admin).unwrap());

        assert!(store.insert_validation_word(&w("erase")).unwrap());
        assert!(!store.insert_validation_word(&w("erase")).unwrap());

        assert_eq!(store.count_answer_pool().unwrap(), 1);
        assert_eq!(store.count_validation_pool().unwrap(), 1);
    }

    #[test]
    fn delete_answer_word_reports_presence() {
        let store = store();
        store.insert_answer_word(&w("wheat"), WordOrigin::Curated).unwrap();

        assert!(store.delete_answer_word(&w("wheat")).unwrap());
        assert!(!store.delete_answer_word(&w("wheat")).unwrap());
        assert_eq!(store.count_answer_pool().unwrap(), 0);
    }

    #[test]
    fn secret_unique_per_day_with_admin_override() {
        let store = store();
        let d = day("2024-03-15");

        let secret = store
            .create_secret_for_day(d, &w("wheat"), WordOrigin::Curated)
            .unwrap();
        assert_eq!(secret.word, w("wheat"));

        // Plain create for the same day violates uniqueness
        assert!(
            store
                .create_secret_for_day(d, &w("storm"), WordOrigin::Admin)
                .is_err()
        );

        // The explicit override path replaces the word
        let replaced = store
            .set_secret_for_day(d, &w("storm"), WordOrigin::Admin)
            .unwrap();
        assert_eq!(replaced.word, w("storm"));
        assert_eq!(
            store.find_secret_for_day(d).unwrap().unwrap().word,
            w("storm")
        );
    }

    #[test]
    fn list_secrets_recent_first() {
        let store = store();
        for (i, word) in ["wheat", "storm", "heart"].iter().enumerate() {
            let d = day("2024-03-10").date() + chrono::Duration::days(i as i64);
            store
                .create_secret_for_day(GameDay::new(d), &w(word), WordOrigin::Curated)
                .unwrap();
        }

        let secrets = store.list_secrets(2).unwrap();
        assert_eq!(secrets.len(), 2);
        assert_eq!(secrets[0].word, w("heart"));
        assert_eq!(secrets[1].word, w("storm"));
    }

    #[test]
    fn settings_default_when_unset() {
        let store = store();
        assert_eq!(store.get_score_settings().unwrap(), ScoreSettings::default());
    }

    #[test]
    fn settings_partial_override_merges() {
        let store = store();
        let patch = SettingsPatch {
            base_solve_points: Some(25),
            ..SettingsPatch::default()
        };
        store.set_score_settings(&patch).unwrap();

        let settings = store.get_score_settings().unwrap();
        assert_eq!(settings.base_solve_points, 25);
        assert_eq!(settings.failed_attempt_points, 5);

        // A later patch for a different key keeps the first override
        let patch = SettingsPatch {
            streak_bonus_30_day: Some(50),
            ..SettingsPatch::default()
        };
        store.set_score_settings(&patch).unwrap();

        let settings = store.get_score_settings().unwrap();
        assert_eq!(settings.base_solve_points, 25);
        assert_eq!(settings.streak_bonus_30_day, 50);
    }
}
