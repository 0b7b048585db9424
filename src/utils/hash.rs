//! Hashing helpers.
//!
//! - `compute` / `fingerprint`: fast FxHash for in-memory keys
//! - `content_fingerprint`: blake3 over file contents, stable across runs
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let h = hash::compute("some content"); // -> u64
//! let fp = hash::fingerprint("some content"); // -> "a1b2c3d4"
//! let id = hash::content_fingerprint(&[b"css", bytes])?; // -> "9f2c01ab"
//! ```

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

/// Compute hash and return as 8-char hex fingerprint.
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(value: &T) -> String {
    format!("{:016x}", compute(value))[..8].to_string()
}

/// blake3 over the length-prefixed `parts`, as 8 hex chars.
///
/// Used where the value must not change between processes
/// (asset ids, cache-busting versions).
pub fn content_fingerprint(parts: &[&[u8]]) -> String {
    let mut hasher = blake3::Hasher::new();
    for part in parts {
        hasher.update(&(part.len() as u64).to_le_bytes());
        hasher.update(part);
    }
    hex::encode(&hasher.finalize().as_bytes()[..4])
}
