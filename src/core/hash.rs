use sha2::{Digest, Sha256};

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Stable fingerprint for a scan input, usable as a dedupe key across
/// repeated scans of the same message.
pub fn scan_fingerprint(input: &str) -> String {
    format!("scan_{}", sha256_hex(input.as_bytes()))
}
