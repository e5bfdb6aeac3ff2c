//! huffpack-core: lossless Huffman text compression
//!
//! This library implements the full prefix-coding pipeline:
//! - Frequency analysis over an in-memory text buffer
//! - Deterministic Huffman code tree construction
//! - Code derivation by tree traversal
//! - Bit-level packing into a persisted, CRC-protected binary record
//! - The reverse decoding path with integrity verification
//!
//! # Architecture
//!
//! The crate is designed around clear module boundaries:
//! - `freq`: symbol frequency analysis
//! - `tree`: code tree construction and code maps
//! - `bitio`: low-level bit packing/unpacking
//! - `checksum`: CRC-32 integrity checksums
//! - `record`: the persisted encoded record layout
//! - `framing`: self-describing frames (record + frequency table)
//! - `codec`: encode/decode orchestration
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and recoverable
//! - **Deterministic**: a pinned tie-break rule makes tree shapes, and
//!   therefore codes and output bytes, reproducible across runs
//! - **Verified**: decode never returns output that fails its checksum
//!
//! # Example
//! ```
//! let input = b"an example with repeated symbols: aaaa bbbb cc d";
//! let frame = huffpack_core::framing::compress(input).unwrap();
//! let output = huffpack_core::framing::decompress(&frame).unwrap();
//! assert_eq!(output, input);
//! ```

pub mod bitio;
pub mod checksum;
pub mod codec;
pub mod error;
pub mod framing;
pub mod freq;
pub mod record;
pub mod tree;

// Re-export commonly used types
pub use error::{Error, Result};
