//! Fuzz target for [`derive_address`] and [`create_address`]
//!
//! # Strategy
//!
//! - Seed lists: Arbitrary counts and lengths, including past both limits
//! - Authorities: Arbitrary 32-byte ids
//! - Bumps: Arbitrary explicit bumps fed to `create_address`
//!
//! # Invariants
//!
//! - Oversized input MUST be rejected as `InvalidSeeds`
//! - Valid input MUST derive an off-curve address
//! - `create_address` with the derived bump MUST reproduce the address
//! - `create_address` with any higher bump MUST report `OnCurve`
//! - NEVER panic

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use offcurve_core::{
    Address, DeriveError, MAX_SEED_LEN, MAX_SEEDS, create_address, derive_address,
};

#[derive(Debug, Arbitrary)]
struct Input {
    seeds: Vec<Vec<u8>>,
    authority: [u8; 32],
    bump: u8,
}

fuzz_target!(|input: Input| {
    let seeds: Vec<&[u8]> = input.seeds.iter().map(Vec::as_slice).collect();
    let authority = Address::new(input.authority);
    let oversized =
        seeds.len() > MAX_SEEDS || seeds.iter().any(|seed| seed.len() > MAX_SEED_LEN);

    match derive_address(&seeds, &authority) {
        Err(DeriveError::InvalidSeeds(_)) => assert!(oversized),
        Err(err) => panic!("unexpected derivation failure: {err}"),
        Ok(derived) => {
            assert!(!oversized);
            assert!(!derived.address.is_on_curve());
            assert_eq!(create_address(&seeds, derived.bump, &authority), Ok(derived.address));

            if input.bump > derived.bump {
                assert_eq!(
                    create_address(&seeds, input.bump, &authority),
                    Err(DeriveError::OnCurve { bump: input.bump })
                );
            }
        },
    }
});
