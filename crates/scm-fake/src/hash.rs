//! Content addressing for fixture files
//!
//! Revision identifiers are the lowercase hex SHA-1 of the raw bytes, with no
//! git object header.

use sha1::{Digest, Sha1};

/// Compute the revision identifier for `content`.
///
/// Always 40 lowercase hex characters.
pub fn content_sha(content: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
