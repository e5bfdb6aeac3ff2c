//! Sample text generation.
//!
//! When no input file is specified, we generate sample text with interesting
//! compression characteristics: a skewed letter distribution mixed with runs
//! and repeating phrases, so the code table and compression ratio are worth
//! looking at.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate sample text with mixed compressibility.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `size_bytes`: exact size of generated text
pub fn generate_sample_text(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = Vec::with_capacity(size_bytes);

    while text.len() < size_bytes {
        let section: u8 = rng.gen_range(0..10);
        let remaining = size_bytes - text.len();
        let section_len = remaining.min(rng.gen_range(64..=512));

        match section {
            // 40% skewed prose-like text (roughly English letter frequencies)
            0..=3 => {
                let weighted = b"eeeeeeeeeeeettttttttaaaaaaooooiiiinnnnsssshhhrrrdlcumwfgypbvk";
                for _ in 0..section_len {
                    if rng.gen_ratio(1, 6) {
                        text.push(b' ');
                    } else {
                        text.push(weighted[rng.gen_range(0..weighted.len())]);
                    }
                }
            }

            // 30% runs of a single character (highly compressible)
            4..=6 => {
                let ch = b'a' + rng.gen_range(0..26);
                text.extend(std::iter::repeat(ch).take(section_len));
            }

            // 20% a repeating phrase
            7..=8 => {
                let phrase = b"the quick brown fox jumps over the lazy dog. ";
                for i in 0..section_len {
                    text.push(phrase[i % phrase.len()]);
                }
            }

            // 10% uniform printable noise (hard to compress)
            _ => {
                for _ in 0..section_len {
                    text.push(rng.gen_range(0x20..=0x7E));
                }
            }
        }
    }

    text.truncate(size_bytes);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_size() {
        for size in [0, 1, 100, 4096, 16 * 1024] {
            assert_eq!(generate_sample_text(9, size).len(), size);
        }
    }

    #[test]
    fn test_determinism() {
        assert_eq!(
            generate_sample_text(12345, 5000),
            generate_sample_text(12345, 5000)
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(generate_sample_text(1, 2000), generate_sample_text(2, 2000));
    }

    #[test]
    fn test_printable_output() {
        let text = generate_sample_text(77, 4096);
        assert!(text.iter().all(|&b| (0x20..=0x7E).contains(&b)));
    }
}
