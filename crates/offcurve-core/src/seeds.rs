//! Seed limits and validation.
//!
//! The limits are fixed by the address scheme. Changing either one would
//! split the namespace from addresses derived by other implementations.

use thiserror::Error;

/// Maximum number of seeds in one derivation.
pub const MAX_SEEDS: usize = 16;

/// Maximum length of a single seed in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Seed-list limit violations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeedError {
    /// More seeds than the scheme allows.
    #[error("too many seeds: {count} (max {max})")]
    TooManySeeds {
        /// Number of seeds supplied.
        count: usize,
        /// Allowed maximum.
        max: usize,
    },

    /// A seed is longer than the scheme allows.
    #[error("seed {index} is {len} bytes (max {max})")]
    SeedTooLong {
        /// Position of the offending seed.
        index: usize,
        /// Its length.
        len: usize,
        /// Allowed maximum.
        max: usize,
    },
}

/// Checks `seeds` against [`MAX_SEEDS`] and [`MAX_SEED_LEN`].
///
/// The count is checked first; the first overlong seed in order is reported.
pub fn validate_seeds(seeds: &[&[u8]]) -> Result<(), SeedError> {
    if seeds.len() > MAX_SEEDS {
        return Err(SeedError::TooManySeeds { count: seeds.len(), max: MAX_SEEDS });
    }

    match seeds.iter().position(|seed| seed.len() > MAX_SEED_LEN) {
        Some(index) => {
            Err(SeedError::SeedTooLong { index, len: seeds[index].len(), max: MAX_SEED_LEN })
        },
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_seed_list_is_valid() {
        assert_eq!(validate_seeds(&[]), Ok(()));
    }

    #[test]
    fn empty_seed_is_valid() {
        assert_eq!(validate_seeds(&[&b""[..]]), Ok(()));
    }

    #[test]
    fn max_count_is_valid() {
        let seeds = [&b"s"[..]; MAX_SEEDS];
        assert_eq!(validate_seeds(&seeds), Ok(()));
    }

    #[test]
    fn one_over_max_count_is_rejected() {
        let seeds = [&b"s"[..]; MAX_SEEDS + 1];
        assert_eq!(
            validate_seeds(&seeds),
            Err(SeedError::TooManySeeds { count: MAX_SEEDS + 1, max: MAX_SEEDS })
        );
    }

    #[test]
    fn reports_first_overlong_seed() {
        let long = [0u8; MAX_SEED_LEN + 1];
        let longer = [0u8; MAX_SEED_LEN + 5];
        let seeds: [&[u8]; 3] = [b"ok", &longer, &long];

        assert_eq!(
            validate_seeds(&seeds),
            Err(SeedError::SeedTooLong { index: 1, len: MAX_SEED_LEN + 5, max: MAX_SEED_LEN })
        );
    }

    #[test]
    fn count_is_checked_before_length() {
        let long = [0u8; MAX_SEED_LEN + 1];
        let seeds = [&long[..]; MAX_SEEDS + 1];
        assert!(matches!(validate_seeds(&seeds), Err(SeedError::TooManySeeds { .. })));
    }
}
