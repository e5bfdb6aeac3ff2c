//! Integrity checksums.
//!
//! Uses the standard reflected CRC-32 (polynomial 0xEDB88320, initial
//! register 0xFFFFFFFF, final one's complement) via `crc32fast`.
//!
//! The checksum is computed over the original text bytes at encode time and
//! re-verified over the decoded bytes at decode time, so it validates the
//! end-to-end result rather than any intermediate representation.

/// Compute the CRC-32 of a byte slice.
///
/// Deterministic, defined over any byte sequence, no failure mode.
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
