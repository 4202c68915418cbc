//! Record file reader
//!
//! Validates the header, then decodes every record while recomputing the
//! checksum.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::array::DynamicArray;
use crate::error::Result;
use crate::record::{Employee, RECORD_SIZE};
use crate::StaffError;

use super::{ChecksumAccumulator, FileHeader, HEADER_SIZE, NEXT_ID_SIZE};

/// Reader for data files
pub struct RecordReader {
    path: PathBuf,
    reader: BufReader<File>,
    /// Validated header
    header: FileHeader,
}

impl RecordReader {
    /// Open a data file and validate its header
    ///
    /// Errors:
    /// - `FileNotFound` if nothing exists at `path`
    /// - `FileRead` if the header is short or unreadable
    /// - `InvalidFile` if magic or version do not match
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StaffError::FileNotFound(path.to_path_buf()),
            _ => read_failed(path, e),
        })?;

        let mut reader = BufReader::new(file);

        let mut header_bytes = [0u8; HEADER_SIZE];
        reader
            .read_exact(&mut header_bytes)
            .map_err(|e| read_failed(path, e))?;

        let header = FileHeader::from_bytes(&header_bytes)?;
        header.validate()?;

        Ok(Self {
            path: path.to_path_buf(),
            reader,
            header,
        })
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Decode exactly `header.count` records
    ///
    /// Records are collected into a fresh array which is only returned once
    /// the checksum matches; any failure discards everything read so far.
    pub fn read_records(&mut self) -> Result<DynamicArray<Employee>> {
        let mut records = DynamicArray::new();
        let mut checksum = ChecksumAccumulator::new();
        let mut buf = [0u8; RECORD_SIZE];

        for index in 0..self.header.count {
            self.reader.read_exact(&mut buf).map_err(|e| {
                StaffError::FileRead(format!(
                    "{}: record {} of {}: {}",
                    self.path.display(),
                    index,
                    self.header.count,
                    e
                ))
            })?;

            checksum.update(&buf);
            records.push_back(Employee::decode(&mut &buf[..])?)?;
        }

        let actual = checksum.finalize();
        if actual != self.header.checksum {
            return Err(StaffError::DataCorruption {
                expected: self.header.checksum,
                actual,
            });
        }

        debug!(path = %self.path.display(), count = records.len(), "Decoded records");
        Ok(records)
    }

    /// Read the trailing `next_id`, or `None` if the file predates it
    pub fn read_next_id(&mut self) -> Result<Option<i32>> {
        let mut buf = [0u8; NEXT_ID_SIZE];
        match self.reader.read_exact(&mut buf) {
            Ok(()) => Ok(Some(i32::from_le_bytes(buf))),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                warn!(path = %self.path.display(), "No trailing next_id; it will be derived");
                Ok(None)
            }
            Err(e) => Err(read_failed(&self.path, e)),
        }
    }
}

fn read_failed(path: &Path, err: io::Error) -> StaffError {
    StaffError::FileRead(format!("{}: {}", path.display(), err))
}
