//! Derivation error types.

use thiserror::Error;

use crate::seeds::SeedError;

/// Errors from address derivation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeriveError {
    /// Seed count or a seed length is over the limit. Raised before hashing.
    #[error("invalid seeds: {0}")]
    InvalidSeeds(#[from] SeedError),

    /// Every bump from 255 down to 0 produced an on-curve candidate.
    #[error("no bump seed produced an off-curve address")]
    NoValidAddress,

    /// The candidate for an explicit bump lies on the curve.
    #[error("address for bump {bump} lies on the curve")]
    OnCurve {
        /// The bump that was tried.
        bump: u8,
    },
}

impl DeriveError {
    /// Returns true if the caller supplied malformed input.
    ///
    /// None of these errors are retryable with the same input: derivation is
    /// deterministic. Input errors are fixed by correcting the seeds, the
    /// others by choosing different seeds, bump or authority.
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::InvalidSeeds(_) => true,
            Self::NoValidAddress | Self::OnCurve { .. } => false,
        }
    }
}
