//! RecordStore
//!
//! Saves and loads a `RecordManager` to a single data file.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::manager::RecordManager;

use super::{FileHeader, RecordReader, RecordWriter};

/// Binary persistence for one data file
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the data file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write every record of `manager`, in order, plus its `next_id`
    ///
    /// The file is replaced. Errors are `FileWrite`.
    pub fn save(&self, manager: &RecordManager) -> Result<FileHeader> {
        let mut writer = RecordWriter::create(&self.path)?;
        for record in manager.records() {
            writer.add(record)?;
        }
        let header = writer.finish(manager.next_id())?;

        info!(
            path = %self.path.display(),
            count = header.count,
            "Saved records"
        );
        Ok(header)
    }

    /// Load the data file into `manager`, returning how many records were read
    ///
    /// All-or-nothing: records are decoded and checksum-verified in a
    /// temporary array first, and `manager` is only modified once the whole
    /// file has been accepted. Loaded records are appended after any the
    /// manager already holds.
    ///
    /// Incoming ids must be unique and disjoint from the ids `manager` already
    /// holds. The resulting `next_id` never moves backwards and never lands
    /// on a live id, whatever the trailing counter says.
    ///
    /// Errors: `FileNotFound`, `FileRead`, `InvalidFile`, `DataCorruption`,
    /// `InvalidParameter` (id clash), `OutOfMemory`.
    pub fn load(&self, manager: &mut RecordManager) -> Result<usize> {
        let mut reader = RecordReader::open(&self.path)?;
        let records = reader.read_records()?;
        let next_id = reader.read_next_id()?;

        let count = records.len();
        manager.restore(records, next_id)?;

        info!(
            path = %self.path.display(),
            count,
            next_id = manager.next_id(),
            "Loaded records"
        );
        Ok(count)
    }
}
