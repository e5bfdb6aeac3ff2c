//! Self-describing frame: frequency table + encoded record.
//!
//! A bare `EncodedRecord` needs the code tree out-of-band to decode. A frame
//! embeds the frequency table instead, which is smaller than a serialized
//! tree and sufficient: tree construction is deterministic, so rebuilding
//! from the same frequencies yields the identical tree and codes. This makes
//! a frame decodable in a later run with no shared state.
//!
//! # Frame Format
//!
//! ```text
//! +--------------------+
//! | Magic (4 bytes)    |  0x48 0x50 0x4B 0x46 ("HPKF")
//! +--------------------+
//! | symbol_count (2)   |  u16 little-endian, 1..=256
//! +--------------------+
//! | freq entries       |  symbol_count x { symbol: u8, freq: u64 LE },
//! | (variable)         |  strictly ascending by symbol, all freqs > 0
//! +--------------------+
//! | encoded record     |  see the record module
//! | (variable)         |
//! +--------------------+
//! ```

use crate::codec;
use crate::error::{RecordError, Result};
use crate::freq::FreqTable;
use crate::record::EncodedRecord;
use crate::tree::CodeTree;

/// Magic number for frames: "HPKF" (HuffPack Frame)
const MAGIC: [u8; 4] = [0x48, 0x50, 0x4B, 0x46];

/// Bytes per frequency entry: 1 symbol byte + 8 count bytes.
const ENTRY_SIZE: usize = 9;

/// Serialize a frame from a built tree and its record.
///
/// The frequency table is recovered from the tree's leaves, so callers do
/// not need to keep the original `FreqTable` around.
pub fn write_frame(tree: &CodeTree, record: &EncodedRecord) -> Vec<u8> {
    let entries: Vec<(u8, u64)> = tree.frequencies().collect();

    let mut out = Vec::with_capacity(6 + entries.len() * ENTRY_SIZE + record.byte_len());
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for (symbol, freq) in entries {
        out.push(symbol);
        out.extend_from_slice(&freq.to_le_bytes());
    }
    out.extend_from_slice(&record.to_bytes());
    out
}

/// Parse a frame, rebuilding the code tree from the embedded frequencies.
///
/// # Errors
/// - `RecordError::InvalidMagic` / `TooShort` / `TrailingBytes` on a
///   malformed container
/// - `RecordError::InvalidSymbolCount`, `UnorderedFrequencyTable`, or
///   `ZeroFrequency` on a malformed frequency table
/// - record parsing errors from the embedded record
pub fn read_frame(bytes: &[u8]) -> Result<(CodeTree, EncodedRecord)> {
    if bytes.len() < 6 {
        return Err(RecordError::TooShort {
            required: 6,
            actual: bytes.len(),
        }
        .into());
    }

    let magic: [u8; 4] = bytes[0..4].try_into().unwrap();
    if magic != MAGIC {
        return Err(RecordError::InvalidMagic {
            expected: MAGIC,
            actual: magic,
        }
        .into());
    }

    let symbol_count = u16::from_le_bytes(bytes[4..6].try_into().unwrap());
    if symbol_count == 0 || symbol_count > 256 {
        return Err(RecordError::InvalidSymbolCount(symbol_count).into());
    }

    let table_end = 6 + symbol_count as usize * ENTRY_SIZE;
    if bytes.len() < table_end {
        return Err(RecordError::TooShort {
            required: table_end,
            actual: bytes.len(),
        }
        .into());
    }

    let mut freqs = FreqTable::new();
    let mut prev_symbol: Option<u8> = None;
    for index in 0..symbol_count as usize {
        let at = 6 + index * ENTRY_SIZE;
        let symbol = bytes[at];
        let freq = u64::from_le_bytes(bytes[at + 1..at + 9].try_into().unwrap());

        if prev_symbol.is_some_and(|prev| symbol <= prev) {
            return Err(RecordError::UnorderedFrequencyTable { index }.into());
        }
        if freq == 0 {
            return Err(RecordError::ZeroFrequency { symbol }.into());
        }
        freqs.set(symbol, freq);
        prev_symbol = Some(symbol);
    }

    let (record, consumed) = EncodedRecord::parse_prefix(&bytes[table_end..])?;
    let remainder = bytes.len() - table_end - consumed;
    if remainder > 0 {
        return Err(RecordError::TrailingBytes(remainder).into());
    }

    let tree = CodeTree::from_frequencies(&freqs)?;
    Ok((tree, record))
}

/// Encode `input` into a complete self-describing frame.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let (tree, record) = codec::encode(input)?;
    Ok(write_frame(&tree, &record))
}

/// Decode a frame produced by `compress`, verifying integrity.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    let (tree, record) = read_frame(bytes)?;
    codec::decode(&record, &tree)
}
