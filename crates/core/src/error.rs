//! Error types for huffpack.
//!
//! All operations return structured errors rather than panicking.
//! The caller (typically the CLI) decides how failures are reported.

use thiserror::Error;

/// Top-level error type for all operations in the crate.
///
/// Each variant corresponds to a specific failure domain:
/// - Huffman: tree construction or encode/decode failures
/// - Bit I/O: reading/writing bits from/to byte buffers
/// - Record: persisted record or frame parsing issues
/// - CRC: data corruption detected after decode
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// Huffman codec error (e.g., empty input, malformed bit walk)
    #[error("huffman error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Bit I/O operation failed (e.g., declared bits exceed the buffer)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Record serialization/parsing error
    #[error("record error: {0}")]
    Record(#[from] RecordError),

    /// Checksum validation failed, indicating corrupted data
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    Crc { expected: u32, actual: u32 },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Huffman tree and codec errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// No symbols with non-zero frequency (cannot build a tree)
    #[error("empty input: no symbols to build a code tree from")]
    EmptyInput,

    /// A code path exceeds 64 bits and cannot be packed
    #[error("code length {length} exceeds maximum 64")]
    CodeTooLong { length: usize },

    /// Frequency counts sum past u64 range (corrupt or forged table)
    #[error("frequency total overflows u64")]
    FrequencyOverflow,

    /// The bit walk hit an impossible edge (corrupt bits or wrong tree)
    #[error("invalid code at bit position {position}")]
    InvalidCode { position: u64 },

    /// The bitstring ended in the middle of a codeword
    #[error("bitstring exhausted mid-codeword ({consumed} of {declared} bits consumed)")]
    TrailingBits { consumed: u64, declared: u64 },
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Declared bit length requires more bytes than the buffer holds
    #[error("bit length {bit_len} exceeds buffer capacity of {available} bits")]
    BitLengthExceedsBuffer { bit_len: u64, available: u64 },

    /// Buffer size disagrees with the declared bit length
    #[error("buffer has {actual} bytes but bit length {bit_len} needs exactly {expected}")]
    PayloadSizeMismatch {
        bit_len: u64,
        expected: usize,
        actual: usize,
    },
}

/// Persisted record and frame errors.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Buffer is too small to contain the declared structure
    #[error("record too short: need at least {required} bytes, got {actual}")]
    TooShort { required: usize, actual: usize },

    /// Invalid magic number at the start of a frame
    #[error("invalid frame magic: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Frame symbol count out of the valid 1..=256 range
    #[error("invalid symbol count {0} (must be 1..=256)")]
    InvalidSymbolCount(u16),

    /// Frequency table entries must be strictly ascending by symbol
    #[error("frequency table not in ascending symbol order at entry {index}")]
    UnorderedFrequencyTable { index: usize },

    /// A frequency table entry carries a zero count
    #[error("zero frequency for symbol {symbol:#04x}")]
    ZeroFrequency { symbol: u8 },

    /// Trailing bytes after the declared structure
    #[error("trailing garbage: {0} unexpected bytes after record")]
    TrailingBytes(usize),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
