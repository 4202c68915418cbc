//! Error types for StaffDB
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StaffError
pub type Result<T> = std::result::Result<T, StaffError>;

/// Unified error type for StaffDB operations
#[derive(Debug, Error)]
pub enum StaffError {
    // -------------------------------------------------------------------------
    // Memory / Container Errors
    // -------------------------------------------------------------------------
    #[error("Out of memory: {0}")]
    OutOfMemory(String),

    #[error("Index {index} out of bounds (size {size})")]
    IndexOutOfBounds { index: usize, size: usize },

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Record {0} not found")]
    NotFound(i32),

    // -------------------------------------------------------------------------
    // File Errors
    // -------------------------------------------------------------------------
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("File read failed: {0}")]
    FileRead(String),

    #[error("File write failed: {0}")]
    FileWrite(String),

    #[error("Invalid file: {0}")]
    InvalidFile(String),

    #[error("Data corruption detected: expected checksum {expected:#010x}, got {actual:#010x}")]
    DataCorruption { expected: u32, actual: u32 },

    // -------------------------------------------------------------------------
    // Authentication Errors
    // -------------------------------------------------------------------------
    #[error("Authentication failed")]
    AuthFailed,
}
