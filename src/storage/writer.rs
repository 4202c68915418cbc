//! Record file writer
//!
//! Streams records to a new data file, then patches the header checksum.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::record::Employee;
use crate::StaffError;

use super::{ChecksumAccumulator, FileHeader};

/// Builder for a data file
///
/// Writes a placeholder header immediately; call `add()` for every record in
/// order, then `finish()` to rewrite the header and append `next_id`.
pub struct RecordWriter {
    /// Output file path
    path: PathBuf,
    /// Buffered writer for performance
    writer: BufWriter<File>,
    /// Number of records written
    count: u32,
    /// Running checksum over record bytes
    checksum: ChecksumAccumulator,
}

impl RecordWriter {
    /// Create (or truncate) the file at `path`
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|e| write_failed(path, e))?;

        let mut writer = BufWriter::new(file);

        // Checksum placeholder, patched in finish()
        let placeholder = FileHeader::new(0, 0).to_bytes()?;
        writer
            .write_all(&placeholder)
            .map_err(|e| write_failed(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            writer,
            count: 0,
            checksum: ChecksumAccumulator::new(),
        })
    }

    /// Append one record
    pub fn add(&mut self, record: &Employee) -> Result<()> {
        let count = self.count.checked_add(1).ok_or_else(|| {
            StaffError::FileWrite("record count exceeds format limit".to_string())
        })?;

        let bytes = record.to_bytes();
        self.writer
            .write_all(&bytes)
            .map_err(|e| write_failed(&self.path, e))?;

        self.checksum.update(&bytes);
        self.count = count;
        Ok(())
    }

    /// Number of records written so far
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Finish the file: final header, then the trailing `next_id`
    pub fn finish(self, next_id: i32) -> Result<FileHeader> {
        let Self {
            path,
            writer,
            count,
            checksum,
        } = self;

        let header = FileHeader::new(count, checksum.finalize());
        let header_bytes = header.to_bytes()?;

        let mut file = writer
            .into_inner()
            .map_err(|e| write_failed(&path, e.into_error()))?;

        patch_and_append(&mut file, &header_bytes, next_id)
            .map_err(|e| write_failed(&path, e))?;

        debug!(
            path = %path.display(),
            count = header.count,
            checksum = header.checksum,
            next_id,
            "Finished data file"
        );

        Ok(header)
    }
}

/// Rewrite the header in place, then append the id counter after the records
fn patch_and_append(file: &mut File, header: &[u8], next_id: i32) -> io::Result<()> {
    file.seek(SeekFrom::Start(0))?;
    file.write_all(header)?;
    file.seek(SeekFrom::End(0))?;
    file.write_all(&next_id.to_le_bytes())?;
    file.sync_all()
}

fn write_failed(path: &Path, err: io::Error) -> StaffError {
    StaffError::FileWrite(format!("{}: {}", path.display(), err))
}
