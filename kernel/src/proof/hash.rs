//! Canonical hashing types and domain separation constants.
//!
//! Algorithm: SHA-256 over `domain || data`. Each domain prefix is
//! null-terminated so no prefix is a prefix of another.

use sha2::{Digest, Sha256};

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
///
/// Invariant: exactly one `:` separator with non-empty text on both sides
/// (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., "sha256").
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full `"algorithm:hex_digest"` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Domain prefix for configuration fingerprints.
pub const DOMAIN_CONFIGURATION: &[u8] = b"FERRY::CONFIGURATION::V1\0";

/// Domain prefix for search audit graph digests.
pub const DOMAIN_SEARCH_GRAPH: &[u8] = b"FERRY::SEARCH_GRAPH::V1\0";

/// Domain prefix for solution transcript digests.
pub const DOMAIN_TRANSCRIPT: &[u8] = b"FERRY::TRANSCRIPT::V1\0";

/// Domain prefix for the run report digest binding transcript and graph.
pub const DOMAIN_RUN_REPORT: &[u8] = b"FERRY::RUN_REPORT::V1\0";

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Result format: `"sha256:<64 lowercase hex chars>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    ContentHash {
        full: format!("sha256:{hex_digest}"),
        colon: "sha256".len(),
    }
}
