//! Content-addressed digests with domain separation.
//!
//! Algorithm: SHA-256. Every digest is computed over `domain || data`, where
//! the domain prefix is a null-terminated byte string, so the same bytes
//! hashed for two purposes never collide.

use sha2::{Digest, Sha256};

/// Domain prefix for run report digests.
pub const DOMAIN_RUN_REPORT: &[u8] = b"WAYFIND::RUN_REPORT::V1\0";

/// A SHA-256 digest rendered as `"sha256:<hex>"`.
///
/// Only [`canonical_hash`] builds one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(String);

impl ContentHash {
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn algorithm(&self) -> &str {
        ALGORITHM
    }

    /// The 64 hex characters after the `sha256:` prefix.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.0[ALGORITHM.len() + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    ContentHash(format!("{ALGORITHM}:{}", hex::encode(hasher.finalize())))
}

const ALGORITHM: &str = "sha256";
