//! Offcurve Address Derivation
//!
//! This crate derives program addresses: 32-byte identifiers scoped to an
//! authority namespace that are guaranteed to have no corresponding private
//! key.
//!
//! # Design
//!
//! All functions in this crate are pure - they have no side effects beyond
//! trace-level log events and produce deterministic outputs given the same
//! inputs. Anyone holding the same seeds and authority id derives the same
//! address without coordination.
//!
//! # Security Properties
//!
//! - Off-curve: A derived address never decompresses to an Ed25519 point, so
//!   no signing key exists for it
//! - Domain separation: The preimage ends with a fixed ASCII marker, so a
//!   derived address cannot collide with a hash produced for another purpose
//! - Order sensitivity: Seeds are hashed in caller order, reordering them
//!   yields a different address

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod address;
pub mod curve;
pub mod derive;
pub mod error;
pub mod seeds;

pub use address::{Address, AddressParseError, MAX_BASE58_LEN};
pub use curve::is_on_curve;
pub use derive::{
    AddressDeriver, DerivedAddress, PDA_MARKER, create_address, derive_address, verify_address,
};
pub use error::DeriveError;
pub use seeds::{MAX_SEED_LEN, MAX_SEEDS, SeedError, validate_seeds};
