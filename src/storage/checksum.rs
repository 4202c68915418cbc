//! Rotate-accumulate checksum
//!
//! Not cryptographic. It must stay bit-for-bit identical to what other
//! writers of this format compute.

/// Checksum of a single encoded record
///
/// `sum = rotl(sum + byte, 1)` over every byte, on a wrapping 32-bit word.
pub fn record_checksum(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0u32, |sum, &b| sum.wrapping_add(u32::from(b)).rotate_left(1))
}

/// Running file checksum: wrapping sum of per-record checksums
#[derive(Debug, Default, Clone, Copy)]
pub struct ChecksumAccumulator {
    sum: u32,
}

impl ChecksumAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one encoded record into the running value
    pub fn update(&mut self, record_bytes: &[u8]) {
        self.sum = self.sum.wrapping_add(record_checksum(record_bytes));
    }

    pub fn finalize(&self) -> u32 {
        self.sum
    }
}
