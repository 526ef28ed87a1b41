//! SQLite persistence for viewer settings.
//!
//! RULE: Only store.rs talks to the database.
//! Everything else reads and writes settings through these methods.

use crate::{
    columns::ColumnVisibility,
    error::ViewerResult,
    selection::{
        PersistedSelection, Selection, KEY_DIMBOOST, KEY_GALAXY, KEY_PLATFORM, KEY_SACRIFICE,
        KEY_STRATEGY,
    },
};
use rusqlite::{params, Connection, OptionalExtension};

pub struct SettingsStore {
    conn: Connection,
}

impl SettingsStore {
    /// Open (or create) the settings database at `path`.
    pub fn open(path: &str) -> ViewerResult<Self> {
        if path == ":memory:" {
            return Self::in_memory();
        }
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> ViewerResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> ViewerResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_settings.sql"))?;
        Ok(())
    }

    // ── Key/value ──────────────────────────────────────────────

    pub fn get(&self, key: &str) -> ViewerResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM setting WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> ViewerResult<()> {
        let now = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO setting (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    pub fn set_many<K, V>(&self, entries: &[(K, V)]) -> ViewerResult<()>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in entries {
            self.set(key.as_ref(), value.as_ref())?;
        }
        Ok(())
    }

    pub fn updated_at(&self, key: &str) -> ViewerResult<Option<String>> {
        let ts = self
            .conn
            .query_row(
                "SELECT updated_at FROM setting WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(ts)
    }

    // ── Selection ──────────────────────────────────────────────

    pub fn load_selection(&self) -> ViewerResult<PersistedSelection> {
        Ok(PersistedSelection {
            platform:  self.get(KEY_PLATFORM)?,
            galaxy:    self.get(KEY_GALAXY)?,
            dimboost:  self.get(KEY_DIMBOOST)?,
            sacrifice: self.get(KEY_SACRIFICE)?,
            strategy:  self.get(KEY_STRATEGY)?,
        })
    }

    pub fn save_selection(&self, selection: &Selection) -> ViewerResult<()> {
        self.set_many(&selection.to_persisted())
    }

    // ── Columns ────────────────────────────────────────────────

    /// Lookup failures count as "never stored", which means visible.
    pub fn load_columns(&self) -> ColumnVisibility {
        ColumnVisibility::restore(|key| match self.get(key) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("cannot read setting {key}: {e}");
                None
            }
        })
    }

    pub fn save_columns(&self, columns: &ColumnVisibility) -> ViewerResult<()> {
        self.set_many(&columns.to_persisted())
    }
}
