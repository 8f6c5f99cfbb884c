use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use sf_core::export::{WirePackage, export_json, import_package};

use crate::error::{Result, StoreError};
use crate::schema;

/// The fixed, version-tagged slot the last computed package lives under.
pub const MODEL_KEY: &str = "LOCAL_MODEL v0.0.1";

/// Single-slot key-value store over SQLite. The engine only ever needs
/// `save` and `load` of one payload; no transactions across slots, no
/// multi-record history.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    // --- Raw slot access ---

    /// Overwrite the payload stored under `key`.
    pub fn save_payload(&self, key: &str, payload: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO slots (key, value) VALUES (?1, ?2)",
            params![key, payload],
        )?;
        tracing::debug!("saved {} bytes under '{key}'", payload.len());
        Ok(())
    }

    /// Payload stored under `key`, or `None` if the slot is empty.
    pub fn load_payload(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM slots WHERE key = ?1")?;
        let result = stmt.query_row([key], |row| row.get(0)).optional()?;
        Ok(result)
    }

    // --- Typed package access ---

    /// Serialize and store a package under the model key.
    pub fn save_package(&self, package: &WirePackage) -> Result<()> {
        let json = export_json(package)
            .map_err(|e| StoreError::InvalidData(format!("serialize package: {e}")))?;
        self.save_payload(MODEL_KEY, &json)
    }

    /// Load and parse the last stored package, if any.
    pub fn load_package(&self) -> Result<Option<WirePackage>> {
        match self.load_payload(MODEL_KEY)? {
            None => Ok(None),
            Some(json) => import_package(&json)
                .map(Some)
                .map_err(|e| StoreError::InvalidData(format!("parse stored package: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::Pipeline;

    #[test]
    fn test_fresh_store_is_empty() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.load_package().unwrap().is_none());
        assert!(store.load_payload(MODEL_KEY).unwrap().is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = Store::open_in_memory().unwrap();
        let package = Pipeline::new().run("persist this field").to_package();
        store.save_package(&package).unwrap();

        let loaded = store.load_package().unwrap().expect("package present");
        assert_eq!(loaded.prompt, package.prompt);
        assert_eq!(
            loaded.space_field.tokens.len(),
            package.space_field.tokens.len()
        );
        assert_eq!(loaded.space_field.tokens[0].id, package.space_field.tokens[0].id);
    }

    #[test]
    fn test_single_slot_overwrites() {
        let store = Store::open_in_memory().unwrap();
        store
            .save_package(&Pipeline::new().run("first").to_package())
            .unwrap();
        store
            .save_package(&Pipeline::new().run("second").to_package())
            .unwrap();

        let loaded = store.load_package().unwrap().unwrap();
        assert_eq!(loaded.prompt, "second");

        let count: i64 = store
            .conn
            .query_row("SELECT COUNT(*) FROM slots", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_corrupt_slot_reports_invalid_data() {
        let store = Store::open_in_memory().unwrap();
        store.save_payload(MODEL_KEY, "not json at all").unwrap();
        match store.load_package() {
            Err(StoreError::InvalidData(_)) => {}
            other => panic!("expected InvalidData, got {other:?}"),
        }
    }

    #[test]
    fn test_open_creates_file_store() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("field.db");
        {
            let store = Store::open(&path).unwrap();
            store
                .save_package(&Pipeline::new().run("durable").to_package())
                .unwrap();
        }
        let store = Store::open(&path).unwrap();
        assert_eq!(store.load_package().unwrap().unwrap().prompt, "durable");
    }
}
