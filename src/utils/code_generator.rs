//! Short code generation
//!
//! Produces randomized URL-safe candidate codes. Uniqueness is NOT
//! guaranteed here; the store's collision-retry loop is the
//! authoritative uniqueness mechanism.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::config::get_config;

/// 随机短码字母表（大小写字母 + 数字，共 62 个符号）
pub const CODE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Candidate code generator with an injectable randomness source.
///
/// The RNG sits behind a mutex so `generate(&self)` can be called from
/// concurrent service calls sharing one generator.
pub struct CodeGenerator {
    min_length: usize,
    max_length: usize,
    rng: Mutex<StdRng>,
}

impl CodeGenerator {
    /// Generator with the configured length range, seeded from the
    /// thread-local OS entropy source.
    pub fn new() -> Self {
        let config = get_config();
        Self::with_range(config.code_min_length, config.code_max_length)
    }

    /// Generator with an explicit inclusive length range.
    pub fn with_range(min_length: usize, max_length: usize) -> Self {
        debug_assert!(min_length >= 1 && min_length <= max_length);
        Self {
            min_length,
            max_length,
            rng: Mutex::new(StdRng::from_rng(&mut rand::rng())),
        }
    }

    /// Deterministic generator for tests.
    pub fn seeded(min_length: usize, max_length: usize, seed: u64) -> Self {
        Self {
            min_length,
            max_length,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Generate one candidate code: length drawn uniformly from the
    /// range, each character drawn uniformly from the alphabet.
    pub fn generate(&self) -> String {
        let mut rng = self.rng.lock();
        let length = rng.random_range(self.min_length..=self.max_length);

        (0..length)
            .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_size() {
        assert_eq!(CODE_ALPHABET.len(), 62);
    }

    #[test]
    fn test_generate_length_within_range() {
        let generator = CodeGenerator::with_range(6, 8);
        for _ in 0..500 {
            let code = generator.generate();
            assert!((6..=8).contains(&code.len()), "bad length: {}", code.len());
        }
    }

    #[test]
    fn test_fixed_length_range() {
        let generator = CodeGenerator::with_range(7, 7);
        for _ in 0..50 {
            assert_eq!(generator.generate().len(), 7);
        }
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let a = CodeGenerator::seeded(6, 8, 42);
        let b = CodeGenerator::seeded(6, 8, 42);
        for _ in 0..20 {
            assert_eq!(a.generate(), b.generate());
        }
    }
}
