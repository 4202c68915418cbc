//! Credential record and store

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use bytes::{Buf, BufMut, BytesMut};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::record::FixedText;
use crate::StaffError;

use super::{CREDENTIAL_SIZE, PASSWORD_HASH_LEN, USERNAME_LEN};

/// djb2: `hash = hash * 33 + byte`, seeded with 5381, wrapping at 32 bits
pub fn password_hash(password: &str) -> u32 {
    password
        .bytes()
        .fold(5381u32, |hash, b| hash.wrapping_mul(33).wrapping_add(u32::from(b)))
}

/// The stored username / password-hash pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: FixedText<USERNAME_LEN>,
    pub password_hash: FixedText<PASSWORD_HASH_LEN>,
}

impl Credential {
    /// Hash `password` and pair it with `username` (truncated to fit)
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: FixedText::new(username),
            password_hash: FixedText::new(&password_hash(password).to_string()),
        }
    }

    /// Byte-for-byte comparison of both fields against a login attempt
    pub fn matches(&self, username: &str, password: &str) -> bool {
        let attempt = password_hash(password).to_string();
        self.username == username && self.password_hash == attempt.as_str()
    }

    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(self.username.raw());
        buf.put_slice(self.password_hash.raw());
    }

    pub fn decode<B: Buf>(buf: &mut B) -> Result<Self> {
        if buf.remaining() < CREDENTIAL_SIZE {
            return Err(StaffError::FileRead(format!(
                "credential needs {} bytes, {} available",
                CREDENTIAL_SIZE,
                buf.remaining()
            )));
        }

        let mut username = [0u8; USERNAME_LEN];
        buf.copy_to_slice(&mut username);

        let mut hash = [0u8; PASSWORD_HASH_LEN];
        buf.copy_to_slice(&mut hash);

        Ok(Self {
            username: FixedText::from_raw(username),
            password_hash: FixedText::from_raw(hash),
        })
    }
}

/// File-backed store for the single credential
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the stored credential
    pub fn save(&self, username: &str, password: &str) -> Result<()> {
        let credential = Credential::new(username, password);

        let mut buf = BytesMut::with_capacity(CREDENTIAL_SIZE);
        credential.encode(&mut buf);

        fs::write(&self.path, &buf).map_err(|e| {
            StaffError::FileWrite(format!("{}: {}", self.path.display(), e))
        })?;

        info!(path = %self.path.display(), username, "Saved credential");
        Ok(())
    }

    /// Check a login attempt; fails closed
    ///
    /// Returns false when the file is missing, unreadable or short, or when
    /// either field differs.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        match self.read() {
            Ok(credential) => {
                let ok = credential.matches(username, password);
                if !ok {
                    warn!(username, "Credential check failed");
                }
                ok
            }
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "No usable credential");
                false
            }
        }
    }

    /// `verify` as a `Result`, yielding `AuthFailed` on any mismatch
    pub fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        if self.verify(username, password) {
            Ok(())
        } else {
            Err(StaffError::AuthFailed)
        }
    }

    /// Check if a complete credential record has been written
    pub fn is_provisioned(&self) -> bool {
        self.read().is_ok()
    }

    /// Read the stored credential
    pub fn read(&self) -> Result<Credential> {
        let mut file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StaffError::FileNotFound(self.path.clone()),
            _ => StaffError::FileRead(format!("{}: {}", self.path.display(), e)),
        })?;

        let mut buf = [0u8; CREDENTIAL_SIZE];
        file.read_exact(&mut buf)
            .map_err(|e| StaffError::FileRead(format!("{}: {}", self.path.display(), e)))?;

        Credential::decode(&mut &buf[..])
    }
}
