//! huffpack CLI: encode a text file, persist the frame, decode it back.
//!
//! Mirrors the classic demonstration flow: load (or generate) a text, build
//! the code tree, optionally print the code table, write the encoded frame
//! to disk, read it back, decode with integrity verification, and write the
//! decoded text next to it.

mod config;
mod input_gen;
mod stats;

use std::fs;
use std::process::ExitCode;

use huffpack_core::{codec, framing, tree::CodeMap};

use config::Config;
use stats::Stats;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("try --help");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> huffpack_core::Result<()> {
    config.print();

    let mut stats = Stats::new();

    // Load or generate the input text.
    let input = match &config.input_file {
        Some(path) => fs::read(path)?,
        None => {
            println!(
                "No input file given; generating {} bytes of sample text (seed {}).",
                config.sample_bytes, config.seed
            );
            input_gen::generate_sample_text(config.seed, config.sample_bytes)
        }
    };
    stats.input_bytes = input.len() as u64;

    // Encode: tree + record in memory, then the self-describing frame.
    let (tree, record) = codec::encode(&input)?;
    stats.distinct_symbols = tree.leaf_count();
    stats.bit_len = record.bit_len;

    if tree.leaf_count() < 2 {
        println!("note: input has a single distinct symbol; compression is degenerate");
    }

    if config.show_codes {
        print_code_table(&tree.code_map()?);
    }

    let frame = framing::write_frame(&tree, &record);
    stats.encoded_bytes = frame.len() as u64;
    fs::write(&config.encoded_file, &frame)?;
    println!("Wrote {} ({} bytes)", config.encoded_file.display(), frame.len());

    // Decode from the persisted bytes, as a separate run would.
    let reread = fs::read(&config.encoded_file)?;
    let decoded = framing::decompress(&reread)?;
    stats.verified = decoded == input;

    fs::write(&config.decoded_file, &decoded)?;
    println!("Wrote {} ({} bytes)", config.decoded_file.display(), decoded.len());

    stats.complete();
    if config.print_stats {
        println!();
        stats.print_summary();
    }

    Ok(())
}

/// Print the symbol -> code table, escaping non-graphic symbols.
fn print_code_table(codes: &CodeMap) {
    println!("Huffman codes (symbol -> code):");
    for (symbol, code) in codes.iter() {
        let shown = match symbol {
            b' ' => "' '".to_string(),
            b'\n' => "'\\n'".to_string(),
            b'\t' => "'\\t'".to_string(),
            0x21..=0x7E => format!("'{}'", symbol as char),
            _ => format!("{symbol:#04x}"),
        };
        println!("  {shown:>6} -> {}", code.to_bit_string());
    }
    println!();
}
