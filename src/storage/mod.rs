//! Persistence for the ordered analysis collection.
//!
//! The collection lives in a single JSON file under a fixed name. Saves
//! rewrite the whole file through a temporary sibling so a crash mid-write
//! leaves the previous collection intact. The engine never calls into this
//! module; the command layer owns the load-append-save cycle.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::AnalysisRecord;
use crate::errors::Result;
use crate::io;

/// Fixed collection file name, the storage key every command reads.
pub const COLLECTION_FILE: &str = "analyses.json";

pub trait AnalysisStore {
    fn load(&self) -> Result<Vec<AnalysisRecord>>;
    fn save(&self, records: &[AnalysisRecord]) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// File-backed store rooted at a directory.
pub struct JsonFileStore {
    directory: PathBuf,
}

impl JsonFileStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn collection_path(&self) -> PathBuf {
        self.directory.join(COLLECTION_FILE)
    }
}

impl AnalysisStore for JsonFileStore {
    fn load(&self) -> Result<Vec<AnalysisRecord>> {
        let path = self.collection_path();
        if !io::file_exists(&path) {
            log::debug!("no collection at {}, loading empty", path.display());
            return Ok(Vec::new());
        }
        let content = io::read_file(&path)?;
        let records: Vec<AnalysisRecord> = serde_json::from_str(&content)?;
        log::debug!("loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }

    fn save(&self, records: &[AnalysisRecord]) -> Result<()> {
        io::ensure_dir(&self.directory)?;
        let path = self.collection_path();
        let json = serde_json::to_string_pretty(records)?;
        write_atomic(&path, &json)?;
        log::debug!("saved {} records to {}", records.len(), path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let path = self.collection_path();
        if io::file_exists(&path) {
            fs::remove_file(&path)?;
            log::info!("cleared collection at {}", path.display());
        }
        Ok(())
    }
}

// Whole-file rewrite via a temporary sibling plus rename.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    records: RefCell<Vec<AnalysisRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnalysisStore for MemoryStore {
    fn load(&self) -> Result<Vec<AnalysisRecord>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[AnalysisRecord]) -> Result<()> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.records.borrow_mut().clear();
        Ok(())
    }
}
