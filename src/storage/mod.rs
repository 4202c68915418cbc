//! Storage Module
//!
//! Binary persistence of the employee collection.
//!
//! ## Responsibilities
//! - Write the collection with a header, records and trailing id counter
//! - Validate format (magic, version) and integrity (checksum) on load
//! - Stay byte-compatible with files produced by other builds
//! - Export a plain CSV view of the records
//!
//! ## File Format (V1)
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │ Header (16 bytes)                              │
//! │ ┌──────────┬──────────┬──────────┬───────────┐ │
//! │ │Magic u32 │Version   │ Count    │ Checksum  │ │
//! │ └──────────┴──────────┴──────────┴───────────┘ │
//! ├────────────────────────────────────────────────┤
//! │ Records (count × 152 bytes)                    │
//! │ ... see `record` module for the layout ...     │
//! ├────────────────────────────────────────────────┤
//! │ next_id: i32 (4 bytes, optional in old files)  │
//! └────────────────────────────────────────────────┘
//! ```
//! All integers are little-endian.

mod checksum;
mod csv;
mod reader;
mod store;
mod writer;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::StaffError;

pub use checksum::{record_checksum, ChecksumAccumulator};
pub use csv::{export_csv, CSV_HEADER};
pub use reader::RecordReader;
pub use store::RecordStore;
pub use writer::RecordWriter;

// =============================================================================
// Shared Constants (used by writer and reader)
// =============================================================================

/// Magic number identifying a StaffDB data file (ASCII "EMPS")
pub const MAGIC: u32 = 0x454D_5053;

/// Current data file format version
pub const VERSION: u32 = 1;

/// Header size: Magic (4) + Version (4) + Count (4) + Checksum (4) = 16 bytes
pub const HEADER_SIZE: usize = 16;

/// Size of the trailing next_id counter
pub(crate) const NEXT_ID_SIZE: usize = 4;

// =============================================================================
// File Header
// =============================================================================

/// Fixed-width header at the start of every data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHeader {
    pub magic: u32,
    pub version: u32,
    /// Number of records that follow
    pub count: u32,
    /// Wrapping sum of every record's checksum
    pub checksum: u32,
}

impl FileHeader {
    /// Header for a current-version file
    pub fn new(count: u32, checksum: u32) -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            count,
            checksum,
        }
    }

    /// Encode as exactly `HEADER_SIZE` bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| StaffError::FileWrite(format!("Failed to encode header: {}", e)))
    }

    /// Decode from the first `HEADER_SIZE` bytes of `bytes`
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes)
            .map_err(|e| StaffError::FileRead(format!("Failed to decode header: {}", e)))
    }

    /// Check magic and version against this build's format
    pub fn validate(&self) -> Result<()> {
        if self.magic != MAGIC {
            return Err(StaffError::InvalidFile(format!(
                "bad magic: expected {:#010x}, got {:#010x}",
                MAGIC, self.magic
            )));
        }

        if self.version != VERSION {
            return Err(StaffError::InvalidFile(format!(
                "unsupported version: {}",
                self.version
            )));
        }

        Ok(())
    }
}
