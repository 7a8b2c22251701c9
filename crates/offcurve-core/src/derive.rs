//! Program address derivation.
//!
//! # Algorithm
//!
//! For `bump` from 255 down to 0:
//!
//! ```text
//! candidate = SHA-256(seed_0 || .. || seed_n || [bump] || authority || "ProgramDerivedAddress")
//! ```
//!
//! The first candidate that does not decompress to an Ed25519 point is the
//! derived address. About half of all candidates are on the curve, so the
//! search usually ends within two iterations and never exceeds 256.
//!
//! # Invariants
//!
//! - Determinism: The same seeds and authority always yield the same address
//!   and bump
//! - Off-curve: A returned address never decompresses to a curve point
//! - Highest bump: Every bump above the returned one produced an on-curve
//!   candidate

use sha2::{Digest, Sha256};

use crate::{
    address::Address,
    curve,
    error::DeriveError,
    seeds::validate_seeds,
};

/// Domain-separation marker appended to every preimage.
pub const PDA_MARKER: &[u8; 21] = b"ProgramDerivedAddress";

/// An off-curve address together with the bump that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivedAddress {
    /// The derived address.
    pub address: Address,
    /// Bump byte appended after the seeds.
    ///
    /// Callers must keep it to rebuild the exact preimage later, e.g. to
    /// sign on behalf of the address.
    pub bump: u8,
}

impl DerivedAddress {
    /// Splits into `(address, bump)`.
    pub fn into_parts(self) -> (Address, u8) {
        (self.address, self.bump)
    }

    /// The bump as a one-byte seed, ready to append to the seed list.
    pub fn signer_bump(&self) -> [u8; 1] {
        [self.bump]
    }
}

/// Derives addresses in the namespace of one authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressDeriver {
    authority: Address,
}

impl AddressDeriver {
    /// Binds a deriver to `authority`.
    pub fn new(authority: Address) -> Self {
        Self { authority }
    }

    /// The authority namespace.
    pub fn authority(&self) -> &Address {
        &self.authority
    }

    /// See [`derive_address`].
    pub fn derive(&self, seeds: &[&[u8]]) -> Result<DerivedAddress, DeriveError> {
        derive_address(seeds, &self.authority)
    }

    /// See [`create_address`].
    pub fn create(&self, seeds: &[&[u8]], bump: u8) -> Result<Address, DeriveError> {
        create_address(seeds, bump, &self.authority)
    }

    /// See [`verify_address`].
    pub fn verify(&self, address: &Address, seeds: &[&[u8]], bump: u8) -> bool {
        verify_address(address, seeds, bump, &self.authority)
    }
}

/// Finds the off-curve address for `seeds` under `authority`.
///
/// Searches bumps from 255 downwards and returns the first hit.
///
/// # Errors
///
/// - [`DeriveError::InvalidSeeds`] if the seed limits are exceeded; no hashing
///   happens in that case
/// - [`DeriveError::NoValidAddress`] if all 256 bumps land on the curve
pub fn derive_address(seeds: &[&[u8]], authority: &Address) -> Result<DerivedAddress, DeriveError> {
    validate_seeds(seeds)?;
    search(seeds, authority, curve::is_on_curve)
}

/// Computes the address for one explicit bump.
///
/// For any successful [`derive_address`], calling this with the same seeds and
/// the returned bump yields the same address.
///
/// # Errors
///
/// - [`DeriveError::InvalidSeeds`] if the seed limits are exceeded
/// - [`DeriveError::OnCurve`] if the candidate is a curve point
pub fn create_address(
    seeds: &[&[u8]],
    bump: u8,
    authority: &Address,
) -> Result<Address, DeriveError> {
    validate_seeds(seeds)?;

    let candidate = hash_candidate(seeds, bump, authority);
    if curve::is_on_curve(&candidate) {
        return Err(DeriveError::OnCurve { bump });
    }

    Ok(Address::new(candidate))
}

/// Checks that `address` is the off-curve address for `seeds`, `bump` and
/// `authority`.
pub fn verify_address(address: &Address, seeds: &[&[u8]], bump: u8, authority: &Address) -> bool {
    create_address(seeds, bump, authority).is_ok_and(|candidate| candidate == *address)
}

fn search(
    seeds: &[&[u8]],
    authority: &Address,
    on_curve: impl Fn(&[u8; 32]) -> bool,
) -> Result<DerivedAddress, DeriveError> {
    for bump in (0..=u8::MAX).rev() {
        let candidate = hash_candidate(seeds, bump, authority);
        if on_curve(&candidate) {
            tracing::trace!(bump, "candidate on curve, trying next bump");
            continue;
        }

        let address = Address::new(candidate);
        tracing::debug!(%authority, %address, bump, "derived off-curve address");
        return Ok(DerivedAddress { address, bump });
    }

    tracing::warn!(%authority, seed_count = seeds.len(), "bump search exhausted");
    Err(DeriveError::NoValidAddress)
}

fn hash_candidate(seeds: &[&[u8]], bump: u8, authority: &Address) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update([bump]);
    hasher.update(authority.as_array());
    hasher.update(PDA_MARKER);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::seeds::{MAX_SEED_LEN, MAX_SEEDS, SeedError};

    fn authority() -> Address {
        Address::new([0x42; 32])
    }

    #[test]
    fn exhausted_search_is_no_valid_address() {
        let calls = Cell::new(0u32);
        let result = search(&[b"vault"], &authority(), |_| {
            calls.set(calls.get() + 1);
            true
        });

        assert_eq!(result, Err(DeriveError::NoValidAddress));
        assert_eq!(calls.get(), 256);
    }

    #[test]
    fn search_stops_at_first_off_curve_candidate() {
        let calls = Cell::new(0u32);
        let result = search(&[b"vault"], &authority(), |_| {
            calls.set(calls.get() + 1);
            calls.get() < 4
        })
        .unwrap();

        assert_eq!(result.bump, 252);
        assert_eq!(result.address.to_bytes(), hash_candidate(&[b"vault"], 252, &authority()));
    }

    #[test]
    fn bump_zero_is_tried_last() {
        let result = search(&[], &authority(), |candidate| {
            *candidate != hash_candidate(&[], 0, &authority())
        })
        .unwrap();

        assert_eq!(result.bump, 0);
    }

    #[test]
    fn preimage_layout_is_concatenation() {
        // Seeds are hashed as one byte stream, so the split point is invisible
        let joined = hash_candidate(&[b"ab", b"cd"], 7, &authority());
        let whole = hash_candidate(&[b"abcd"], 7, &authority());
        assert_eq!(joined, whole);

        let mut preimage = b"abcd".to_vec();
        preimage.push(7);
        preimage.extend_from_slice(authority().as_array());
        preimage.extend_from_slice(PDA_MARKER);
        let expected: [u8; 32] = Sha256::digest(&preimage).into();
        assert_eq!(whole, expected);
    }

    #[test]
    fn derive_rejects_seeds_before_hashing() {
        let long = [0u8; MAX_SEED_LEN + 1];
        let err = derive_address(&[&long], &authority()).unwrap_err();
        assert_eq!(
            err,
            DeriveError::InvalidSeeds(SeedError::SeedTooLong {
                index: 0,
                len: MAX_SEED_LEN + 1,
                max: MAX_SEED_LEN,
            })
        );
    }

    #[test]
    fn create_rejects_too_many_seeds() {
        let seeds = [&b"x"[..]; MAX_SEEDS + 1];
        let err = create_address(&seeds, 255, &authority()).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn deriver_matches_free_functions() {
        let deriver = AddressDeriver::new(authority());
        let seeds: [&[u8]; 2] = [b"escrow", &[1, 2, 3]];

        let derived = deriver.derive(&seeds).unwrap();
        assert_eq!(derived, derive_address(&seeds, &authority()).unwrap());
        assert_eq!(deriver.create(&seeds, derived.bump).unwrap(), derived.address);
        assert!(deriver.verify(&derived.address, &seeds, derived.bump));
        assert_eq!(deriver.authority(), &authority());
    }

    #[test]
    fn signer_bump_is_single_byte_seed() {
        let derived = DerivedAddress { address: Address::default(), bump: 251 };
        assert_eq!(derived.signer_bump(), [251]);
        assert_eq!(derived.into_parts(), (Address::default(), 251));
    }
}
