//! 64-bit FNV-1a, the only hash the table uses.
//!
//! Unseeded: equal keys land on the same home slot across calls and
//! across resizes.

pub const FNV_OFFSET_BASIS: u64 = 14695981039346656037;
pub const FNV_PRIME: u64 = 1099511628211;

/// Hashes `bytes` with FNV-1a (xor, then multiply, per byte)
pub fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &b| {
        (hash ^ b as u64).wrapping_mul(FNV_PRIME)
    })
}
