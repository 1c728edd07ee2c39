//! SQLite-backed persistence for settings and completion state.
//!
//! State is stored as JSON documents in a single key/value table: one row
//! for the settings document and one row per game version's set of
//! completed step ids. Reads are tolerant: a missing or unreadable row
//! yields defaults so a damaged database never blocks the guide. Writes
//! are best-effort: a failed write is logged and dropped, never surfaced
//! to the user as an operation failure.

use std::collections::HashSet;
use std::path::Path;

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};
use crate::models::{GameVersion, Settings};

// SQL queries as const strings for compile-time optimization
const GET_VALUE_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const PUT_VALUE_SQL: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3) ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv WHERE key = ?1";
const GET_LAST_UPDATED_SQL: &str = "SELECT MAX(updated_at) FROM kv";

const SETTINGS_KEY: &str = "settings";

fn progress_key(version: GameVersion) -> String {
    format!("progress:{version}")
}

/// Database connection and state persistence handler.
pub struct Store {
    connection: Connection,
}

impl Store {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initializes the database schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;
        Ok(())
    }

    fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(GET_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read stored value")
    }

    fn put_value(&self, key: &str, value: &str) -> Result<()> {
        let now_str = Timestamp::now().to_string();
        self.connection
            .execute(PUT_VALUE_SQL, params![key, value, now_str])
            .db_context("Failed to write stored value")?;
        Ok(())
    }

    /// Loads the settings document, falling back to defaults when the row
    /// is missing or unreadable.
    pub fn load_settings(&self) -> Settings {
        match self.get_value(SETTINGS_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Ignoring corrupt settings document: {e}");
                    Settings::default()
                }
            },
            Ok(None) => Settings::default(),
            Err(e) => {
                log::warn!("Failed to load settings, using defaults: {e}");
                Settings::default()
            }
        }
    }

    /// Persists the settings document. Best-effort; failures are logged.
    pub fn save_settings(&self, settings: &Settings) {
        match serde_json::to_string(settings) {
            Ok(json) => {
                if let Err(e) = self.put_value(SETTINGS_KEY, &json) {
                    log::warn!("Failed to save settings: {e}");
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {e}"),
        }
    }

    /// Loads the completed step ids for a game version, falling back to an
    /// empty set when the row is missing or unreadable.
    pub fn load_progress(&self, version: GameVersion) -> HashSet<String> {
        match self.get_value(&progress_key(version)) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<String>>(&json) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    log::warn!("Ignoring corrupt progress document for {version}: {e}");
                    HashSet::new()
                }
            },
            Ok(None) => HashSet::new(),
            Err(e) => {
                log::warn!("Failed to load progress for {version}, starting empty: {e}");
                HashSet::new()
            }
        }
    }

    /// Persists the completed step ids for a game version. Best-effort;
    /// failures are logged.
    ///
    /// Ids are written in sorted order so the stored document is stable
    /// across saves of the same set.
    pub fn save_progress(&self, version: GameVersion, completed: &HashSet<String>) {
        let mut ids: Vec<&str> = completed.iter().map(String::as_str).collect();
        ids.sort_unstable();
        match serde_json::to_string(&ids) {
            Ok(json) => {
                if let Err(e) = self.put_value(&progress_key(version), &json) {
                    log::warn!("Failed to save progress for {version}: {e}");
                }
            }
            Err(e) => log::warn!("Failed to serialize progress for {version}: {e}"),
        }
    }

    /// Deletes all completion state for a game version. Best-effort;
    /// failures are logged.
    pub fn reset_progress(&self, version: GameVersion) {
        let result = self
            .connection
            .execute(DELETE_VALUE_SQL, params![progress_key(version)])
            .db_context("Failed to delete progress");
        if let Err(e) = result {
            log::warn!("Failed to reset progress for {version}: {e}");
        }
    }

    /// Returns the time of the most recent write, if any.
    pub fn last_saved(&self) -> Option<Timestamp> {
        let raw: Option<String> = match self
            .connection
            .query_row(GET_LAST_UPDATED_SQL, [], |row| row.get(0))
            .db_context("Failed to read last update time")
        {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to read last update time: {e}");
                return None;
            }
        };

        raw.and_then(|text| match text.parse::<Timestamp>() {
            Ok(ts) => Some(ts),
            Err(e) => {
                log::warn!("Ignoring unparseable update time: {e}");
                None
            }
        })
    }
}
