//! Content digests for file snapshots using BLAKE3

use crate::types::Hash;
use blake3::Hasher;

/// Compute content hash for file bytes
pub fn compute_content_hash(content: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(content);
    *hasher.finalize().as_bytes()
}

/// Hex form of the content hash, as shown in drift reports
pub fn content_digest_hex(content: &[u8]) -> String {
    hex::encode(compute_content_hash(content))
}
