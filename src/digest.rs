//! The hex digest driving every derived parameter.
//!
//! A `Digest` wraps a hexadecimal string and exposes indexed numeric
//! extraction; it is the sole source of "randomness" in a pattern. Reads
//! past the end of the digest are a usage error, never zero-filled.

use sha2::{Digest as _, Sha256};

use crate::error::{GeotileError, Result};

/// A hexadecimal digest string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    hex: String,
}

impl Digest {
    /// Derive the digest of a seed string: lowercase hex SHA-256, 64 chars.
    ///
    /// The same seed always yields the same digest, so unpinned output is a
    /// deterministic function of the seed.
    pub fn from_seed(seed: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(seed.as_bytes());
        let hash = hasher.finalize();

        let mut hex = String::with_capacity(hash.len() * 2);
        for byte in hash.iter() {
            hex.push_str(&format!("{:02x}", byte));
        }

        Self { hex }
    }

    /// Wrap a caller-pinned digest string verbatim.
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self { hex: hex.into() }
    }

    /// The digest string.
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Number of hex characters available.
    pub fn len(&self) -> usize {
        self.hex.len()
    }

    /// Whether the digest is empty.
    pub fn is_empty(&self) -> bool {
        self.hex.is_empty()
    }

    /// Parse `len` hex characters starting at `index` as a base-16 integer.
    pub fn hex_value(&self, index: usize, len: usize) -> Result<u32> {
        let end = index + len;
        let slice = self
            .hex
            .get(index..end)
            .ok_or(GeotileError::OutOfRange {
                index,
                end,
                len: self.hex.len(),
            })?;

        u32::from_str_radix(slice, 16).map_err(|_| GeotileError::InvalidDigest {
            message: format!("'{}' at {}..{} is not hex", slice, index, end),
        })
    }

    /// Single hex digit at `index`, in `0-15`.
    pub fn at(&self, index: usize) -> Result<u32> {
        self.hex_value(index, 1)
    }
}
