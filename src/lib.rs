//! # StaffDB
//!
//! An employee attendance record store with:
//! - A resizable array with a deterministic growth/shrink policy
//! - In-place quicksort over five domain orderings
//! - A versioned binary file format with checksum-based corruption detection
//! - A single-user credential file in the same fixed-width style
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Front end (CLI / View)                      │
//! └───────────────┬─────────────────────────────┬───────────────┘
//!                 │                             │
//! ┌───────────────▼───────────────┐   ┌─────────▼───────────────┐
//! │         RecordManager         │   │ RecordStore │ Credential│
//! │  add/remove/update/search     │◄──┤  (binary)   │   Store   │
//! │  sort/aggregate               │   └─────────────┴───────────┘
//! └───────────────┬───────────────┘
//!                 │
//!        ┌────────┴────────┐
//!        ▼                 ▼
//! ┌─────────────┐   ┌─────────────┐
//! │DynamicArray │◄──┤  quick_sort │
//! └─────────────┘   └─────────────┘
//! ```
//!
//! Everything is single-threaded and synchronous.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod array;
pub mod sort;
pub mod record;
pub mod storage;
pub mod auth;
pub mod manager;
pub mod view;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StaffError, Result};
pub use config::Config;
pub use array::DynamicArray;
pub use record::Employee;
pub use sort::SortKey;
pub use storage::RecordStore;
pub use auth::CredentialStore;
pub use manager::{RecordManager, SearchQuery};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of StaffDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
