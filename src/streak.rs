//! Per-category daily completion streaks, persisted as a small JSON file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use linked_hash_map::LinkedHashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::StreakStoreError;

static DEFAULT_STORE_PATH: Lazy<PathBuf> = Lazy::new(|| {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kendoku")
        .join("streaks.json")
});

/// A category's current run of consecutive daily completions
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct StreakRecord {
    pub streak: u32,
    pub last_played: NaiveDate,
}

/// The streak records for every category, backed by a JSON file.
///
/// Categories keep their insertion order across rewrites.
pub struct StreakStore {
    path: PathBuf,
    records: LinkedHashMap<String, StreakRecord>,
}

impl StreakStore {
    /// Opens the store in the user's local data directory
    pub fn open_default() -> Result<Self, StreakStoreError> {
        Self::open(&*DEFAULT_STORE_PATH)
    }

    /// Opens a store file, starting empty if the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StreakStoreError> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => LinkedHashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The record for a category, if it has ever been completed
    pub fn record(&self, category: &str) -> Option<&StreakRecord> {
        self.records.get(category)
    }

    /// Registers a completion for `category` on `today` and persists the
    /// store.
    ///
    /// A second completion on the same day leaves the streak unchanged, a
    /// completion exactly one day after the last extends it, and anything
    /// else starts over at 1.
    pub fn record_completion(
        &mut self,
        category: &str,
        today: NaiveDate,
    ) -> Result<StreakRecord, StreakStoreError> {
        let streak = match self.records.get(category) {
            Some(record) if record.last_played == today => return Ok(*record),
            Some(record) if record.last_played.succ_opt() == Some(today) => record.streak + 1,
            _ => 1,
        };
        let record = StreakRecord {
            streak,
            last_played: today,
        };
        self.records.insert(category.to_string(), record);
        self.save()?;
        Ok(record)
    }

    /// Writes the whole store through a temp file so a crash mid-write
    /// cannot truncate existing records
    fn save(&self) -> Result<(), StreakStoreError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;
        let mut file = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, &self.records)?;
        file.persist(&self.path)?;
        Ok(())
    }
}
