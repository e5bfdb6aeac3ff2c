//! Configuration for the huffpack CLI.
//!
//! Handles parsing command-line arguments and generating sensible defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: with no input file it generates
//! a seeded sample text, encodes it, and decodes it back, so a bare run
//! demonstrates the whole pipeline. All defaults are printable so runs are
//! reproducible.

use std::path::PathBuf;

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Files ===
    /// Input text path (None = generate sample)
    pub input_file: Option<PathBuf>,

    /// Encoded output path
    pub encoded_file: PathBuf,

    /// Decoded output path
    pub decoded_file: PathBuf,

    // === Sample generation ===
    /// Seed for sample generation (also printed for reproducibility)
    pub seed: u64,

    /// Size of the generated sample in bytes
    pub sample_bytes: usize,

    // === Behavior ===
    /// Whether to print the symbol -> code table
    pub show_codes: bool,

    /// Whether to print the run statistics summary
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If `--seed` is not provided, a time-based seed is used (and printed),
    /// so sample-input runs are still reproducible after the fact.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut encoded_file: Option<PathBuf> = None;
        let mut decoded_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut show_codes = false;
        let mut print_stats = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--encoded" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--encoded requires a path".to_string());
                    }
                    encoded_file = Some(PathBuf::from(&args[i]));
                }
                "--decoded" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--decoded requires a path".to_string());
                    }
                    decoded_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--show-codes" => {
                    show_codes = true;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Time-based fallback keeps bare runs varied but reproducible once
        // the printed seed is passed back in.
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            input_file,
            encoded_file: encoded_file.unwrap_or_else(|| PathBuf::from("./encoded.bin")),
            decoded_file: decoded_file.unwrap_or_else(|| PathBuf::from("./decoded.txt")),
            seed,
            sample_bytes: sample_bytes.unwrap_or(16 * 1024),
            show_codes,
            print_stats,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.input_file {
            Some(path) => println!("Input file:   {}", path.display()),
            None => println!(
                "Input file:   (generate {} byte sample, seed {})",
                self.sample_bytes, self.seed
            ),
        }
        println!("Encoded file: {}", self.encoded_file.display());
        println!("Decoded file: {}", self.decoded_file.display());
        println!();
    }
}

fn print_help() {
    println!("huffpack: Huffman text compression with CRC-protected records");
    println!();
    println!("USAGE:");
    println!("    huffpack [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>            Input text file (default: generate sample)");
    println!("    --encoded <PATH>       Encoded output (default: ./encoded.bin)");
    println!("    --decoded <PATH>       Decoded output (default: ./decoded.txt)");
    println!();
    println!("    --seed <N>             Seed for sample generation");
    println!("    --sample-bytes <N>     Generated sample size (default: 16384)");
    println!();
    println!("    --show-codes           Print the symbol -> code table");
    println!("    --no-stats             Don't print the statistics summary");
    println!("    --help, -h             Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack                          # Encode/decode a generated sample");
    println!("    huffpack --seed 42 --show-codes   # Deterministic run with code table");
    println!("    huffpack --in book.txt            # Compress a specific file");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&[]).unwrap();
        assert!(config.input_file.is_none());
        assert_eq!(config.encoded_file, PathBuf::from("./encoded.bin"));
        assert_eq!(config.decoded_file, PathBuf::from("./decoded.txt"));
        assert!(!config.show_codes);
        assert!(config.print_stats);
    }

    #[test]
    fn test_explicit_paths_and_seed() {
        let config =
            Config::from_args(&args(&["--in", "a.txt", "--seed", "7", "--show-codes"])).unwrap();
        assert_eq!(config.input_file, Some(PathBuf::from("a.txt")));
        assert_eq!(config.seed, 7);
        assert!(config.show_codes);
    }

    #[test]
    fn test_missing_value_rejected() {
        assert!(Config::from_args(&args(&["--in"])).is_err());
        assert!(Config::from_args(&args(&["--seed", "abc"])).is_err());
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(Config::from_args(&args(&["--bogus"])).is_err());
    }
}
