//! The persisted encoded record.
//!
//! An `EncodedRecord` is the artifact that crosses the storage boundary:
//! the packed code bits, the exact count of meaningful bits (so padding can
//! be trimmed on read), and a CRC-32 of the original text for end-to-end
//! integrity verification.
//!
//! # Record Format
//!
//! ```text
//! +------------------+
//! | bit_len (8)      |  u64 little-endian, count of meaningful bits
//! +------------------+
//! | payload          |  ceil(bit_len/8) bytes, MSB-first per byte,
//! | (variable)       |  final byte zero-padded
//! +------------------+
//! | checksum (4)     |  u32 little-endian CRC-32 of the source text
//! +------------------+
//! ```
//!
//! All integers are little-endian so records are portable across hosts.
//! The record alone does not describe the code tree; see `framing` for the
//! self-describing container.

use crate::error::{RecordError, Result};

/// Fixed overhead: 8-byte bit_len prefix + 4-byte checksum trailer.
const FIXED_SIZE: usize = 12;

/// A packed, checksummed encoding of one complete text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRecord {
    /// Count of meaningful bits in `payload`
    pub bit_len: u64,
    /// Packed code bits, `ceil(bit_len / 8)` bytes
    pub payload: Vec<u8>,
    /// CRC-32 of the original (unencoded) text bytes
    pub checksum: u32,
}

impl EncodedRecord {
    /// Serialize to the byte layout above.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(FIXED_SIZE + self.payload.len());
        out.extend_from_slice(&self.bit_len.to_le_bytes());
        out.extend_from_slice(&self.payload);
        out.extend_from_slice(&self.checksum.to_le_bytes());
        out
    }

    /// Parse a record from bytes, consuming the entire buffer.
    ///
    /// # Errors
    /// - `RecordError::TooShort` if the buffer cannot hold the declared payload
    /// - `RecordError::TrailingBytes` if bytes remain after the checksum
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (record, consumed) = Self::parse_prefix(bytes)?;
        if consumed < bytes.len() {
            return Err(RecordError::TrailingBytes(bytes.len() - consumed).into());
        }
        Ok(record)
    }

    /// Parse a record from the front of `bytes`, returning it together with
    /// the number of bytes consumed. Used when the record is embedded in a
    /// larger structure (e.g., a frame).
    pub fn parse_prefix(bytes: &[u8]) -> Result<(Self, usize)> {
        // Even an empty-payload record carries the full fixed overhead.
        if bytes.len() < FIXED_SIZE {
            return Err(RecordError::TooShort {
                required: FIXED_SIZE,
                actual: bytes.len(),
            }
            .into());
        }

        let bit_len = u64::from_le_bytes(bytes[0..8].try_into().unwrap());
        let payload_len = bit_len.div_ceil(8) as usize;
        let total = FIXED_SIZE + payload_len;
        if bytes.len() < total {
            return Err(RecordError::TooShort {
                required: total,
                actual: bytes.len(),
            }
            .into());
        }

        let payload = bytes[8..8 + payload_len].to_vec();
        let checksum =
            u32::from_le_bytes(bytes[8 + payload_len..total].try_into().unwrap());

        Ok((
            Self {
                bit_len,
                payload,
                checksum,
            },
            total,
        ))
    }

    /// Serialized size in bytes.
    pub fn byte_len(&self) -> usize {
        FIXED_SIZE + self.payload.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample() -> EncodedRecord {
        EncodedRecord {
            bit_len: 13,
            payload: vec![0b10110010, 0b11000000],
            checksum: 0xDEADBEEF,
        }
    }

    #[test]
    fn test_round_trip() {
        let record = sample();
        let bytes = record.to_bytes();
        assert_eq!(bytes.len(), record.byte_len());
        assert_eq!(EncodedRecord::from_bytes(&bytes).unwrap(), record);
    }

    #[test]
    fn test_zero_bits() {
        let record = EncodedRecord {
            bit_len: 0,
            payload: vec![],
            checksum: 0,
        };
        let bytes = record.to_bytes();
        assert_eq!(bytes.len(), 12);
        assert_eq!(EncodedRecord::from_bytes(&bytes).unwrap(), record);
    }

    #[test]
    fn test_too_short() {
        let bytes = sample().to_bytes();
        let result = EncodedRecord::from_bytes(&bytes[..bytes.len() - 1]);
        assert!(result.is_err());
    }

    #[test]
    fn test_short_prefix_reports_fixed_minimum() {
        // A buffer below the fixed overhead must report that overhead as
        // the requirement, not a partial field size.
        let result = EncodedRecord::from_bytes(&[0u8; 7]);
        assert!(matches!(
            result,
            Err(Error::Record(RecordError::TooShort {
                required: 12,
                actual: 7,
            }))
        ));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut bytes = sample().to_bytes();
        bytes.push(0x00);
        assert!(EncodedRecord::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_parse_prefix_reports_consumed() {
        let mut bytes = sample().to_bytes();
        let expected = bytes.len();
        bytes.extend_from_slice(b"extra");
        let (record, consumed) = EncodedRecord::parse_prefix(&bytes).unwrap();
        assert_eq!(consumed, expected);
        assert_eq!(record, sample());
    }
}
