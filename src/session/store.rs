use crate::session::{now_stamp, AppRecord};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("USERPROFILE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Durable store for app records: one JSON array in a single file, the
/// analog of one fixed key in a browser key-value store. Read-modify-write,
/// no locking; there is exactly one writer per store.
pub struct AppStore {
    path: PathBuf,
}

impl AppStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        home_dir().join(".formbench").join("apps.json")
    }

    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in stored order, plus warnings for anything that could
    /// not be read. A missing file is an empty store; a malformed one
    /// degrades to empty with a warning instead of failing the caller.
    pub fn list(&self) -> (Vec<AppRecord>, Vec<String>) {
        let mut warnings = Vec::new();

        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return (Vec::new(), warnings);
            }
            Err(err) => {
                warnings.push(format!("failed to read {}: {err}", self.path.display()));
                return (Vec::new(), warnings);
            }
        };

        match serde_json::from_slice(&data) {
            Ok(records) => (records, warnings),
            Err(err) => {
                warnings.push(format!("failed to parse {}: {err}", self.path.display()));
                (Vec::new(), warnings)
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<AppRecord> {
        let (records, _) = self.list();
        records.into_iter().find(|record| record.id == id)
    }

    /// Upserts by id: an existing record is replaced and its `updatedAt`
    /// stamped, a new one is appended. Returns the record as stored.
    pub fn save(&self, record: &AppRecord) -> Result<AppRecord, StoreError> {
        let (mut records, warnings) = self.list();
        for warning in warnings {
            log::warn!("{warning}");
        }

        let mut stored = record.clone();
        if let Some(existing) = records.iter_mut().find(|entry| entry.id == record.id) {
            stored.updated_at = now_stamp();
            *existing = stored.clone();
        } else {
            records.push(stored.clone());
        }

        self.write_records(&records)?;
        Ok(stored)
    }

    /// Removes the record with the given id; deleting an absent id changes
    /// nothing. Idempotent.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let (mut records, _) = self.list();
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Ok(());
        }
        self.write_records(&records)
    }

    fn write_records(&self, records: &[AppRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let bytes = serde_json::to_vec_pretty(records)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, bytes)?;
        match fs::rename(&tmp_path, &self.path) {
            Ok(()) => Ok(()),
            Err(rename_err) => {
                if self.path.exists() {
                    fs::remove_file(&self.path)?;
                    fs::rename(&tmp_path, &self.path)?;
                    Ok(())
                } else {
                    Err(rename_err.into())
                }
            }
        }
    }
}
