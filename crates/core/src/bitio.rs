//! Bit-level packing and unpacking.
//!
//! `BitWriter` serializes a sequence of variable-length codewords into a
//! compact byte buffer; `BitReader` replays that buffer one bit at a time.
//! Both operate MSB-first (the first bit written lands in the most
//! significant bit of the first byte).
//!
//! # Padding Rules
//! - `BitWriter::finish` pads the final partial byte with trailing zeros and
//!   reports the exact number of meaningful bits.
//! - `BitReader` is constructed with that bit count and stops before the
//!   padding, so `unpack(pack(bits)) == bits` for any length.
//!
//! # Example
//! ```
//! use huffpack_core::bitio::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.push_code(0b101, 3); // bits 1, 0, 1
//! writer.push_code(0b1, 1);   // bit 1
//! let (bytes, bit_len) = writer.finish();
//! assert_eq!(bytes, vec![0b10110000]);
//! assert_eq!(bit_len, 4);
//!
//! let mut reader = BitReader::new(&bytes, bit_len).unwrap();
//! assert_eq!(reader.next_bit(), Some(true));
//! assert_eq!(reader.next_bit(), Some(false));
//! ```

use crate::error::{BitIoError, Result};

/// Writes codewords MSB-first into a byte buffer.
///
/// # Invariants
/// - `bit_count` is always < 8; a full accumulator is flushed immediately
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Accumulator for the current partial byte (MSB-aligned)
    bit_buffer: u8,
    /// Number of bits in bit_buffer (0-7)
    bit_count: u8,
}

impl BitWriter {
    /// Create a new BitWriter with empty output.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            bit_buffer: 0,
            bit_count: 0,
        }
    }

    /// Append a single bit.
    pub fn push_bit(&mut self, bit: bool) {
        self.bit_buffer |= (bit as u8) << (7 - self.bit_count);
        self.bit_count += 1;
        if self.bit_count == 8 {
            self.bytes.push(self.bit_buffer);
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
    }

    /// Append a codeword of `len` bits, most significant first.
    ///
    /// Only the lowest `len` bits of `bits` are used; `len` must be <= 64.
    /// Writing a zero-length code is a no-op.
    pub fn push_code(&mut self, bits: u64, len: u8) {
        debug_assert!(len <= 64);
        for i in (0..len).rev() {
            self.push_bit((bits >> i) & 1 == 1);
        }
    }

    /// Total number of bits written so far.
    pub fn bit_len(&self) -> u64 {
        self.bytes.len() as u64 * 8 + self.bit_count as u64
    }

    /// Finish writing, returning the packed bytes and the exact bit count.
    ///
    /// A final partial byte is zero-padded on the right. Consumes the writer.
    pub fn finish(mut self) -> (Vec<u8>, u64) {
        let bit_len = self.bit_len();
        if self.bit_count > 0 {
            self.bytes.push(self.bit_buffer);
        }
        (self.bytes, bit_len)
    }
}

/// Reads bits MSB-first from a byte buffer, bounded by an exact bit count.
///
/// The declared `bit_len` lets the reader distinguish padding from data:
/// iteration ends after exactly `bit_len` bits regardless of buffer size.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_len: u64,
    /// Current bit position (0 = MSB of first byte)
    position: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data` holding exactly `bit_len` meaningful bits.
    ///
    /// # Errors
    /// - `BitIoError::BitLengthExceedsBuffer` if `bit_len` needs more bytes
    ///   than `data` holds
    /// - `BitIoError::PayloadSizeMismatch` if `data` is longer than the
    ///   `ceil(bit_len / 8)` bytes the bit count accounts for
    pub fn new(data: &'a [u8], bit_len: u64) -> Result<Self> {
        let available = data.len() as u64 * 8;
        if bit_len > available {
            return Err(BitIoError::BitLengthExceedsBuffer { bit_len, available }.into());
        }
        let expected = bit_len.div_ceil(8) as usize;
        if data.len() != expected {
            return Err(BitIoError::PayloadSizeMismatch {
                bit_len,
                expected,
                actual: data.len(),
            }
            .into());
        }
        Ok(Self {
            data,
            bit_len,
            position: 0,
        })
    }

    /// Read the next bit, or `None` once all `bit_len` bits are consumed.
    pub fn next_bit(&mut self) -> Option<bool> {
        if self.position >= self.bit_len {
            return None;
        }
        let byte = self.data[(self.position / 8) as usize];
        let bit = (byte >> (7 - (self.position % 8))) & 1 == 1;
        self.position += 1;
        Some(bit)
    }

    /// Current bit position.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Number of meaningful bits not yet consumed.
    pub fn remaining(&self) -> u64 {
        self.bit_len - self.position
    }

    /// True once all meaningful bits are consumed.
    pub fn is_empty(&self) -> bool {
        self.position >= self.bit_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(reader: &mut BitReader<'_>) -> Vec<bool> {
        let mut bits = Vec::new();
        while let Some(bit) = reader.next_bit() {
            bits.push(bit);
        }
        bits
    }

    #[test]
    fn test_pack_unpack_round_trip() {
        let bits = vec![true, false, true, true, false, false, true, false, true, true];

        let mut writer = BitWriter::new();
        for &bit in &bits {
            writer.push_bit(bit);
        }
        let (bytes, bit_len) = writer.finish();
        assert_eq!(bit_len, 10);
        assert_eq!(bytes, vec![0b10110010, 0b11000000]);

        let mut reader = BitReader::new(&bytes, bit_len).unwrap();
        assert_eq!(collect(&mut reader), bits);
    }

    #[test]
    fn test_empty_bitstring() {
        let (bytes, bit_len) = BitWriter::new().finish();
        assert!(bytes.is_empty());
        assert_eq!(bit_len, 0);

        let mut reader = BitReader::new(&bytes, 0).unwrap();
        assert!(reader.is_empty());
        assert_eq!(reader.next_bit(), None);
    }

    #[test]
    fn test_push_code_msb_first() {
        let mut writer = BitWriter::new();
        writer.push_code(0b101, 3);
        writer.push_code(0b11, 2);
        writer.push_code(0, 0); // no-op
        let (bytes, bit_len) = writer.finish();
        assert_eq!(bit_len, 5);
        assert_eq!(bytes, vec![0b10111000]);
    }

    #[test]
    fn test_exact_byte_boundary() {
        let mut writer = BitWriter::new();
        writer.push_code(0b10110011, 8);
        let (bytes, bit_len) = writer.finish();
        assert_eq!(bit_len, 8);
        assert_eq!(bytes, vec![0b10110011]);

        let mut reader = BitReader::new(&bytes, 8).unwrap();
        assert_eq!(collect(&mut reader).len(), 8);
    }

    #[test]
    fn test_padding_not_exposed() {
        let mut writer = BitWriter::new();
        writer.push_bit(true);
        let (bytes, bit_len) = writer.finish();
        assert_eq!(bytes, vec![0b10000000]);
        assert_eq!(bit_len, 1);

        let mut reader = BitReader::new(&bytes, bit_len).unwrap();
        assert_eq!(collect(&mut reader), vec![true]);
    }

    #[test]
    fn test_bit_length_exceeds_buffer() {
        let result = BitReader::new(&[0xFF], 9);
        assert!(result.is_err());
    }

    #[test]
    fn test_payload_size_mismatch() {
        // Two bytes but a bit length that only needs one.
        let result = BitReader::new(&[0xFF, 0x00], 3);
        assert!(result.is_err());
    }

    #[test]
    fn test_position_tracking() {
        let data = vec![0b10100000];
        let mut reader = BitReader::new(&data, 3).unwrap();
        assert_eq!(reader.remaining(), 3);
        reader.next_bit();
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.remaining(), 2);
    }
}
