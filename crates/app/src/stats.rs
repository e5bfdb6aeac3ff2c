//! Run statistics for the huffpack CLI.

use std::time::{Duration, Instant};

/// Counters and timing for one encode/decode run.
#[derive(Debug, Clone)]
pub struct Stats {
    pub start_time: Instant,
    pub end_time: Option<Instant>,

    /// Bytes of input text
    pub input_bytes: u64,
    /// Bytes of the persisted frame (header + payload + checksum)
    pub encoded_bytes: u64,
    /// Meaningful bits in the packed payload
    pub bit_len: u64,
    /// Distinct symbols in the input
    pub distinct_symbols: usize,
    /// Whether decode reproduced the input exactly
    pub verified: bool,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_bytes: 0,
            encoded_bytes: 0,
            bit_len: 0,
            distinct_symbols: 0,
            verified: false,
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        self.end_time.unwrap_or_else(Instant::now) - self.start_time
    }

    /// Encoded size as a fraction of input size.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 1.0;
        }
        self.encoded_bytes as f64 / self.input_bytes as f64
    }

    /// Average code length in bits per input symbol.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.bit_len as f64 / self.input_bytes as f64
    }

    /// Print a human-readable summary.
    pub fn print_summary(&self) {
        println!("=== Summary ===");
        println!("Input:            {} bytes, {} distinct symbols", self.input_bytes, self.distinct_symbols);
        println!("Encoded:          {} bytes ({} code bits)", self.encoded_bytes, self.bit_len);
        println!("Ratio:            {:.1}% of original", self.compression_ratio() * 100.0);
        println!("Avg code length:  {:.2} bits/symbol", self.bits_per_symbol());
        println!("Round trip:       {}", if self.verified { "verified" } else { "FAILED" });
        println!("Duration:         {:.2?}", self.duration());
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
