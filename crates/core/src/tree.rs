//! Huffman code tree construction and code derivation.
//!
//! The tree is stored as an arena of nodes addressed by index, which keeps
//! ownership trivial: the `CodeTree` owns the arena, children are referred to
//! by `NodeId`, and the structure is immutable once built.
//!
//! # Determinism
//!
//! Construction uses a min-heap keyed on `(frequency, insertion sequence)`.
//! Leaves are inserted in ascending symbol order and merged nodes in creation
//! order, so equal frequencies always resolve the same way and the resulting
//! tree shape (and therefore every code) is fully deterministic. This is what
//! lets a decoder rebuild the identical tree from a persisted frequency table.
//!
//! # Invariants
//! - K distinct symbols produce exactly K leaves and K-1 internal nodes
//! - every internal node's frequency is the sum of its children's
//! - every leaf's frequency is the source count of its symbol
//! - a single-symbol input produces a lone leaf root assigned the code `0`

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{HuffmanError, Result};
use crate::freq::FreqTable;

/// Index of a node within the tree's arena.
pub type NodeId = usize;

/// One node of the code tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node carrying a symbol and its source frequency.
    Leaf { symbol: u8, freq: u64 },
    /// Internal node owning exactly two children; freq is their sum.
    Internal {
        freq: u64,
        left: NodeId,
        right: NodeId,
    },
}

impl Node {
    fn freq(&self) -> u64 {
        match *self {
            Node::Leaf { freq, .. } => freq,
            Node::Internal { freq, .. } => freq,
        }
    }
}

/// A codeword: up to 64 bits, most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    /// The code bits, right-aligned (lowest `len` bits are meaningful)
    pub bits: u64,
    /// Number of meaningful bits (1-64; never 0 for a present symbol)
    pub len: u8,
}

impl Code {
    /// Render the codeword as a '0'/'1' string, for display.
    pub fn to_bit_string(self) -> String {
        (0..self.len)
            .rev()
            .map(|i| if (self.bits >> i) & 1 == 1 { '1' } else { '0' })
            .collect()
    }
}

/// Symbol-to-codeword mapping derived from a code tree.
///
/// Built once per tree; read-only afterward. Structurally prefix-free
/// because codes are leaf paths and a leaf has no descendants.
#[derive(Debug, Clone)]
pub struct CodeMap {
    codes: [Option<Code>; 256],
}

impl CodeMap {
    /// Codeword for `symbol`, if it was present in the source.
    pub fn get(&self, symbol: u8) -> Option<Code> {
        self.codes[symbol as usize]
    }

    /// Number of symbols with an assigned code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// True if no symbol has a code (never the case for a built tree).
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }

    /// Iterate over `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(sym, code)| code.map(|c| (sym as u8, c)))
    }
}

/// An immutable Huffman code tree.
#[derive(Debug, Clone)]
pub struct CodeTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl CodeTree {
    /// Build a tree by greedy minimum-frequency merging.
    ///
    /// # Errors
    /// Returns `HuffmanError::EmptyInput` if the table has no non-zero counts.
    pub fn from_frequencies(freqs: &FreqTable) -> Result<Self> {
        let mut nodes: Vec<Node> = Vec::new();

        // Heap entries are (freq, insertion sequence, node); Reverse turns
        // the std max-heap into a min-heap. The sequence number pins the
        // tie-break: earlier-inserted nodes win among equal frequencies.
        let mut heap: BinaryHeap<Reverse<(u64, usize, NodeId)>> = BinaryHeap::new();
        let mut seq = 0usize;

        for (symbol, freq) in freqs.iter() {
            let id = nodes.len();
            nodes.push(Node::Leaf { symbol, freq });
            heap.push(Reverse((freq, seq, id)));
            seq += 1;
        }

        if heap.is_empty() {
            return Err(HuffmanError::EmptyInput.into());
        }

        while heap.len() > 1 {
            let Reverse((lf, _, left)) = heap.pop().unwrap();
            let Reverse((rf, _, right)) = heap.pop().unwrap();
            // Frequencies can come from an untrusted frame, so the merge
            // must not assume the sum fits.
            let freq = lf
                .checked_add(rf)
                .ok_or(HuffmanError::FrequencyOverflow)?;
            let id = nodes.len();
            nodes.push(Node::Internal { freq, left, right });
            heap.push(Reverse((freq, seq, id)));
            seq += 1;
        }

        let Reverse((_, _, root)) = heap.pop().unwrap();
        Ok(Self { nodes, root })
    }

    /// Root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node lookup.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Child of `id` along `bit` (false = left/'0', true = right/'1').
    ///
    /// `None` when `id` is a leaf.
    pub fn child(&self, id: NodeId, bit: bool) -> Option<NodeId> {
        match self.nodes[id] {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    /// Symbol at `id` when it is a leaf.
    pub fn leaf_symbol(&self, id: NodeId) -> Option<u8> {
        match self.nodes[id] {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Number of leaves (= distinct source symbols).
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }

    /// Number of internal nodes (= leaf_count - 1).
    pub fn internal_count(&self) -> usize {
        self.nodes.len() - self.leaf_count()
    }

    /// Iterate over `(symbol, freq)` leaf pairs in ascending symbol order.
    ///
    /// Leaves occupy the front of the arena in insertion order, which is
    /// ascending symbol order by construction.
    pub fn frequencies(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.nodes.iter().filter_map(|n| match *n {
            Node::Leaf { symbol, freq } => Some((symbol, freq)),
            Node::Internal { .. } => None,
        })
    }

    /// Derive the symbol-to-codeword map by depth-first traversal,
    /// appending '0' for a left descent and '1' for a right descent.
    ///
    /// A lone leaf root (single-symbol input) receives the one-bit code `0`
    /// rather than an empty codeword, so it can be packed and decoded.
    ///
    /// # Errors
    /// Returns `HuffmanError::CodeTooLong` if any path exceeds 64 bits.
    pub fn code_map(&self) -> Result<CodeMap> {
        let mut codes: [Option<Code>; 256] = [None; 256];

        if let Node::Leaf { symbol, .. } = self.nodes[self.root] {
            codes[symbol as usize] = Some(Code { bits: 0, len: 1 });
            return Ok(CodeMap { codes });
        }

        let mut stack: Vec<(NodeId, u64, u8)> = vec![(self.root, 0, 0)];
        while let Some((id, bits, len)) = stack.pop() {
            match self.nodes[id] {
                Node::Leaf { symbol, .. } => {
                    codes[symbol as usize] = Some(Code { bits, len });
                }
                Node::Internal { left, right, .. } => {
                    if len == 64 {
                        return Err(HuffmanError::CodeTooLong {
                            length: len as usize + 1,
                        }
                        .into());
                    }
                    stack.push((left, bits << 1, len + 1));
                    stack.push((right, (bits << 1) | 1, len + 1));
                }
            }
        }

        Ok(CodeMap { codes })
    }

    /// Check the structural frequency invariants. Used by tests.
    pub fn check_invariants(&self, freqs: &FreqTable) -> bool {
        // Leaf frequencies match the source counts.
        for (symbol, freq) in self.frequencies() {
            if freqs.count(symbol) != freq {
                return false;
            }
        }
        // Internal frequencies are the sums of their children's.
        for node in &self.nodes {
            if let Node::Internal { freq, left, right } = *node {
                if self.nodes[left].freq() + self.nodes[right].freq() != freq {
                    return false;
                }
            }
        }
        self.leaf_count() == freqs.distinct() && self.internal_count() == self.leaf_count() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn tree_for(data: &[u8]) -> CodeTree {
        CodeTree::from_frequencies(&FreqTable::from_bytes(data)).unwrap()
    }

    #[test]
    fn test_empty_table_rejected() {
        let result = CodeTree::from_frequencies(&FreqTable::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_overflowing_frequencies_rejected() {
        // Counts this large only arrive via a corrupt or forged frame; the
        // merge must fail cleanly instead of wrapping.
        let mut table = FreqTable::new();
        table.set(b'a', u64::MAX);
        table.set(b'b', u64::MAX);
        assert!(matches!(
            CodeTree::from_frequencies(&table),
            Err(Error::Huffman(HuffmanError::FrequencyOverflow))
        ));
    }

    #[test]
    fn test_single_symbol_gets_one_bit_code() {
        let tree = tree_for(b"aaaa");
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.internal_count(), 0);

        let codes = tree.code_map().unwrap();
        let code = codes.get(b'a').unwrap();
        assert_eq!(code.len, 1);
        assert_eq!(code.bits, 0);
    }

    #[test]
    fn test_two_symbols_one_bit_each() {
        let tree = tree_for(b"aaab");
        let codes = tree.code_map().unwrap();
        assert_eq!(codes.get(b'a').unwrap().len, 1);
        assert_eq!(codes.get(b'b').unwrap().len, 1);
        assert_ne!(codes.get(b'a').unwrap().bits, codes.get(b'b').unwrap().bits);
    }

    #[test]
    fn test_four_equal_symbols_two_bits_each() {
        let tree = tree_for(b"abcd");
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.internal_count(), 3);

        let codes = tree.code_map().unwrap();
        assert!(!codes.is_empty());
        assert_eq!(codes.len(), 4);
        for sym in *b"abcd" {
            assert_eq!(codes.get(sym).unwrap().len, 2);
        }
    }

    #[test]
    fn test_skewed_frequencies_give_shorter_codes() {
        // 'a' dominates, so its code must be no longer than any other.
        let tree = tree_for(b"aaaaaaaaaaaaaaaabbbbccd");
        let codes = tree.code_map().unwrap();
        let a_len = codes.get(b'a').unwrap().len;
        for sym in *b"bcd" {
            assert!(codes.get(sym).unwrap().len >= a_len);
        }
    }

    #[test]
    fn test_frequency_invariants() {
        let freqs = FreqTable::from_bytes(b"the quick brown fox jumps over the lazy dog");
        let tree = CodeTree::from_frequencies(&freqs).unwrap();
        assert!(tree.check_invariants(&freqs));
    }

    #[test]
    fn test_prefix_free() {
        let tree = tree_for(b"mississippi river banks");
        let codes = tree.code_map().unwrap();
        let all: Vec<(u8, Code)> = codes.iter().collect();

        for (i, &(_, a)) in all.iter().enumerate() {
            for &(_, b) in all.iter().skip(i + 1) {
                let shorter = a.len.min(b.len);
                let a_prefix = a.bits >> (a.len - shorter);
                let b_prefix = b.bits >> (b.len - shorter);
                assert!(
                    a_prefix != b_prefix,
                    "codes {:?} and {:?} share a prefix",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_deterministic_tie_break() {
        // All frequencies equal: tree shape must still be reproducible.
        let data = b"abcdefgh";
        let first = tree_for(data).code_map().unwrap();
        let second = tree_for(data).code_map().unwrap();
        for sym in data.iter().copied() {
            assert_eq!(first.get(sym), second.get(sym));
        }
    }

    #[test]
    fn test_rebuild_from_extracted_frequencies() {
        // frequencies() must round-trip into an identical tree.
        let original = tree_for(b"some moderately varied input text 123");
        let mut table = FreqTable::new();
        for (symbol, freq) in original.frequencies() {
            table.set(symbol, freq);
        }
        let rebuilt = CodeTree::from_frequencies(&table).unwrap();

        let a = original.code_map().unwrap();
        let b = rebuilt.code_map().unwrap();
        for sym in 0..=255u8 {
            assert_eq!(a.get(sym), b.get(sym));
        }
    }

    #[test]
    fn test_code_bit_string_rendering() {
        let code = Code { bits: 0b101, len: 3 };
        assert_eq!(code.to_bit_string(), "101");
        let code = Code { bits: 0, len: 1 };
        assert_eq!(code.to_bit_string(), "0");
    }
}
