//! Bounded, NUL-terminated text field

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Fixed-capacity text stored exactly as it appears on disk
///
/// Holds at most `N - 1` bytes of text; the remainder is NUL padding.
/// Equality, ordering and hashing look only at the text before the first NUL,
/// which matches a C `strcmp` over the same buffer.
#[derive(Clone, Copy)]
pub struct FixedText<const N: usize> {
    raw: [u8; N],
}

impl<const N: usize> FixedText<N> {
    /// Copy `text` into a new field, truncating at a UTF-8 boundary
    /// so that at most `N - 1` bytes are kept
    pub fn new(text: &str) -> Self {
        let mut end = text.len().min(N.saturating_sub(1));
        while !text.is_char_boundary(end) {
            end -= 1;
        }

        let mut raw = [0u8; N];
        raw[..end].copy_from_slice(&text.as_bytes()[..end]);
        Self { raw }
    }

    /// Wrap a buffer read from disk
    ///
    /// Bytes are kept verbatim except the last, which is forced to NUL so an
    /// unterminated field can never run past its capacity.
    pub fn from_raw(mut raw: [u8; N]) -> Self {
        if let Some(last) = raw.last_mut() {
            *last = 0;
        }
        Self { raw }
    }

    /// Text bytes up to (not including) the first NUL
    pub fn as_bytes(&self) -> &[u8] {
        let end = self.raw.iter().position(|&b| b == 0).unwrap_or(N);
        &self.raw[..end]
    }

    /// Full buffer including padding
    pub fn raw(&self) -> &[u8; N] {
        &self.raw
    }

    /// Text as a string, replacing invalid UTF-8 from foreign files
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Check whether `needle` occurs anywhere in the text
    pub fn contains(&self, needle: &str) -> bool {
        let needle = needle.as_bytes();
        if needle.is_empty() {
            return true;
        }
        self.as_bytes().windows(needle.len()).any(|w| w == needle)
    }

    /// Check whether the text begins with `prefix`
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_bytes().starts_with(prefix.as_bytes())
    }
}

impl<const N: usize> Default for FixedText<N> {
    fn default() -> Self {
        Self { raw: [0u8; N] }
    }
}

impl<const N: usize> From<&str> for FixedText<N> {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl<const N: usize> PartialEq for FixedText<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for FixedText<N> {}

impl<const N: usize> PartialEq<str> for FixedText<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for FixedText<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialOrd for FixedText<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for FixedText<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl<const N: usize> Hash for FixedText<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl<const N: usize> fmt::Display for FixedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width/alignment flags working for table rendering
        f.pad(&self.to_str_lossy())
    }
}

impl<const N: usize> fmt::Debug for FixedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.to_str_lossy(), f)
    }
}
