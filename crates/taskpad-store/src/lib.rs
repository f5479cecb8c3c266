//! File-backed storage for taskpad.
//!
//! The whole task list lives in one JSON document at a fixed path: read
//! once at startup, rewritten in full after every mutation. Absent or
//! malformed data loads as an empty list rather than an error.

mod error;

pub use error::StoreError;

use std::fs;
use std::path::{Path, PathBuf};

use taskpad_core::TaskBook;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

const SLOT_DIR: &str = "taskpad";
const SLOT_FILE: &str = "tasks.json";

/// Durable slot holding the serialized task list.
pub struct JsonSlot {
    path: PathBuf,
}

impl JsonSlot {
    /// Slot at an explicit path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot at the platform default location
    /// (`<data-dir>/taskpad/tasks.json`).
    ///
    /// # Errors
    /// Returns an error if no platform data directory can be resolved.
    pub fn default_location() -> Result<Self, StoreError> {
        let base = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self::at(base.join(SLOT_DIR).join(SLOT_FILE)))
    }

    /// Path of the slot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list from the slot.
    ///
    /// A missing file, unreadable file or invalid JSON all yield an
    /// empty book; nothing is surfaced to the caller.
    #[must_use]
    pub fn load(&self) -> TaskBook {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "Slot not readable, starting empty");
                return TaskBook::new();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(book) => {
                debug!(path = %self.path.display(), "Loaded task slot");
                book
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "Slot holds invalid JSON, starting empty");
                TaskBook::new()
            }
        }
    }

    /// Overwrite the slot with the full task list.
    ///
    /// The document is written to a sibling temp file first and renamed
    /// into place, so a crash mid-write never leaves a torn slot.
    ///
    /// # Errors
    /// Returns an error if the slot directory cannot be created or the
    /// write or rename fails.
    pub fn save(&self, book: &TaskBook) -> Result<(), StoreError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;

        let body = serde_json::to_string_pretty(book)?;
        let tmp = NamedTempFile::new_in(parent)?;
        fs::write(tmp.path(), body)?;
        tmp.persist(&self.path).map_err(|err| StoreError::Replace {
            path: self.path.clone(),
            source: err.error,
        })?;

        info!(path = %self.path.display(), tasks = book.len(), "Wrote task slot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn slot_in(dir: &Path) -> JsonSlot {
        JsonSlot::at(dir.join("tasks.json"))
    }

    #[test]
    fn save_and_load_roundtrip() -> Result<(), StoreError> {
        let dir = tempdir()?;
        let slot = slot_in(dir.path());

        let mut book = TaskBook::new();
        let milk = book.add("buy milk").unwrap_or_else(|| panic!("non-blank add must succeed"));
        let _ = book.add("walk dog");
        book.toggle(milk);

        slot.save(&book)?;
        assert_eq!(slot.load(), book);
        Ok(())
    }

    #[test]
    fn missing_slot_loads_empty() -> Result<(), StoreError> {
        let dir = tempdir()?;
        let slot = slot_in(dir.path());
        assert!(slot.load().is_empty());
        Ok(())
    }

    #[test]
    fn malformed_slot_loads_empty() -> Result<(), StoreError> {
        let dir = tempdir()?;
        let slot = slot_in(dir.path());
        fs::write(slot.path(), "{not json")?;
        assert!(slot.load().is_empty());
        Ok(())
    }

    #[test]
    fn legacy_slot_without_ids_loads() -> Result<(), StoreError> {
        let dir = tempdir()?;
        let slot = slot_in(dir.path());
        fs::write(
            slot.path(),
            r#"[{"text":"buy milk","completed":false},{"text":"walk dog","completed":true}]"#,
        )?;

        let book = slot.load();
        assert_eq!(book.len(), 2);
        assert!(book.tasks()[1].completed);
        Ok(())
    }

    #[test]
    fn save_creates_missing_directories() -> Result<(), StoreError> {
        let dir = tempdir()?;
        let slot = JsonSlot::at(dir.path().join("nested").join("deep").join("tasks.json"));

        let mut book = TaskBook::new();
        let _ = book.add("buy milk");
        slot.save(&book)?;
        assert_eq!(slot.load(), book);
        Ok(())
    }

    #[test]
    fn save_overwrites_the_previous_slot_in_full() -> Result<(), StoreError> {
        let dir = tempdir()?;
        let slot = slot_in(dir.path());

        let mut book = TaskBook::new();
        let milk = book.add("buy milk").unwrap_or_else(|| panic!("non-blank add must succeed"));
        slot.save(&book)?;

        let _ = book.remove(milk);
        let _ = book.add("walk dog");
        slot.save(&book)?;

        let loaded = slot.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.tasks()[0].text, "walk dog");
        Ok(())
    }
}
