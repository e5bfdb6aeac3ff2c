//! Encode and decode orchestration.
//!
//! `encode` runs the full pipeline: frequency analysis, tree construction,
//! code derivation, per-symbol bit concatenation, packing, checksum.
//! `decode` reverses it: unpack bits, replay the tree walk once per symbol,
//! verify the checksum against the decoded bytes.
//!
//! Encode and decode are each one complete synchronous pass. The tree and
//! code map are immutable once built, so one tree can serve any number of
//! concurrent decode calls without coordination.

use crate::bitio::{BitReader, BitWriter};
use crate::checksum::crc32;
use crate::error::{Error, HuffmanError, Result};
use crate::freq::FreqTable;
use crate::record::EncodedRecord;
use crate::tree::{CodeTree, Node};

/// Encode a complete text buffer.
///
/// Returns the built tree together with the packed record. The tree is part
/// of the result because a bare record is not self-describing; callers that
/// need a standalone artifact should use `framing::compress` instead.
///
/// # Errors
/// - `HuffmanError::EmptyInput` if `input` has no symbols
pub fn encode(input: &[u8]) -> Result<(CodeTree, EncodedRecord)> {
    let freqs = FreqTable::from_bytes(input);
    let tree = CodeTree::from_frequencies(&freqs)?;
    let codes = tree.code_map()?;

    let mut writer = BitWriter::new();
    for &symbol in input {
        // Every input symbol has a code: the map was built from this
        // input's own frequency table.
        let code = codes.get(symbol).ok_or(HuffmanError::InvalidCode {
            position: writer.bit_len(),
        })?;
        writer.push_code(code.bits, code.len);
    }

    let (payload, bit_len) = writer.finish();
    let record = EncodedRecord {
        bit_len,
        payload,
        checksum: crc32(input),
    };
    Ok((tree, record))
}

/// Decode a record using the tree it was encoded with.
///
/// Walks the tree bit-by-bit, descending left on 0 and right on 1, emitting
/// a symbol and resetting to the root at each leaf, until the declared bit
/// count is exhausted. The decoded bytes are then checksummed and compared
/// against the record; on any failure no output is returned.
///
/// # Errors
/// - `BitIoError::*` if the payload size disagrees with the bit count
/// - `HuffmanError::InvalidCode` if the bits do not match the tree
/// - `HuffmanError::TrailingBits` if the bits end mid-codeword
/// - `Error::Crc` if the decoded bytes fail integrity verification
pub fn decode(record: &EncodedRecord, tree: &CodeTree) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(&record.payload, record.bit_len)?;
    let mut output = Vec::new();

    if let Node::Leaf { symbol, .. } = tree.node(tree.root()) {
        // Degenerate single-leaf tree: the lone symbol's code is the single
        // bit 0, so every meaningful bit must be 0 and emits one symbol.
        let symbol = *symbol;
        while let Some(bit) = reader.next_bit() {
            if bit {
                return Err(HuffmanError::InvalidCode {
                    position: reader.position() - 1,
                }
                .into());
            }
            output.push(symbol);
        }
    } else {
        let mut cursor = tree.root();
        while let Some(bit) = reader.next_bit() {
            // child() is Some for every internal node; a leaf is consumed
            // below before the next descent.
            cursor = tree.child(cursor, bit).ok_or(HuffmanError::InvalidCode {
                position: reader.position() - 1,
            })?;
            if let Some(symbol) = tree.leaf_symbol(cursor) {
                output.push(symbol);
                cursor = tree.root();
            }
        }
        if cursor != tree.root() {
            return Err(HuffmanError::TrailingBits {
                consumed: reader.position(),
                declared: record.bit_len,
            }
            .into());
        }
    }

    let actual = crc32(&output);
    if actual != record.checksum {
        return Err(Error::Crc {
            expected: record.checksum,
            actual,
        });
    }
    Ok(output)
}
