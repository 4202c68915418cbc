//! Auth Module
//!
//! Single-user credential file guarding the data file.
//!
//! ## File Format
//! ```text
//! ┌────────────────────┬─────────────────────────────┐
//! │ username [u8; 32]  │ password_hash [u8; 64]      │
//! └────────────────────┴─────────────────────────────┘
//! ```
//! The hash field holds the decimal text of a djb2 hash of the password.
//! This is an integrity check against casual edits, not a secure password
//! store: there is no salt and the 32-bit hash collides easily.

mod credential;

pub use credential::{password_hash, Credential, CredentialStore};

/// Capacity of the username field (including the NUL terminator)
pub const USERNAME_LEN: usize = 32;

/// Capacity of the password hash field (including the NUL terminator)
pub const PASSWORD_HASH_LEN: usize = 64;

/// Encoded size of the credential record
pub const CREDENTIAL_SIZE: usize = USERNAME_LEN + PASSWORD_HASH_LEN;
