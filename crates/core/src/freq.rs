//! Symbol frequency analysis.
//!
//! A `FreqTable` tallies how often each of the 256 possible byte values
//! occurs in an input buffer. It is the sole input to code tree construction
//! and is also what a self-describing frame embeds so a decoder can rebuild
//! the identical tree.

/// Occurrence counts for every possible byte value.
///
/// Built in a single pass over the input; read-only afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable {
    counts: [u64; 256],
}

impl FreqTable {
    /// Create an empty table (all counts zero).
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Tally the frequencies of every byte in `data`.
    ///
    /// Empty input yields an empty table.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in data {
            table.counts[byte as usize] += 1;
        }
        table
    }

    /// Set the count for `symbol` directly (used when parsing a frame).
    pub fn set(&mut self, symbol: u8, count: u64) {
        self.counts[symbol as usize] = count;
    }

    /// Occurrence count of `symbol`.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols with non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Total number of symbols tallied.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// True if no symbol has been tallied.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Iterate over `(symbol, count)` pairs with non-zero count,
    /// in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(sym, &c)| (sym as u8, c))
    }
}

impl Default for FreqTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let table = FreqTable::from_bytes(b"");
        assert!(table.is_empty());
        assert_eq!(table.distinct(), 0);
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_counts() {
        let table = FreqTable::from_bytes(b"aaab");
        assert_eq!(table.count(b'a'), 3);
        assert_eq!(table.count(b'b'), 1);
        assert_eq!(table.count(b'c'), 0);
        assert_eq!(table.distinct(), 2);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_iter_ascending_symbol_order() {
        let table = FreqTable::from_bytes(b"cabba");
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(pairs, vec![(b'a', 2), (b'b', 2), (b'c', 1)]);
    }

    #[test]
    fn test_all_byte_values() {
        let data: Vec<u8> = (0..=255).collect();
        let table = FreqTable::from_bytes(&data);
        assert_eq!(table.distinct(), 256);
        for sym in 0..=255u8 {
            assert_eq!(table.count(sym), 1);
        }
    }
}
