//! Seed arguments.
//!
//! A seed is written as `<kind>:<value>`:
//!
//! | kind      | bytes                                   |
//! |-----------|-----------------------------------------|
//! | `utf8`    | the text as UTF-8                       |
//! | `address` | the 32 bytes of a base58 address        |
//! | `hex`     | hex-decoded value                       |
//! | `u8`      | one byte                                |
//! | `u16le`   | little-endian integer (2, 4 or 8 bytes) |
//! | `u32le`   |                                         |
//! | `u64le`   |                                         |
//!
//! Anything without a recognised kind prefix is taken as UTF-8 text.

use std::{num::ParseIntError, str::FromStr};

use offcurve_core::{Address, AddressParseError};
use thiserror::Error;

/// One parsed seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedArg(Vec<u8>);

impl SeedArg {
    /// The seed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for SeedArg {
    type Err = SeedArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((kind, value)) = s.split_once(':') else {
            return Ok(Self(s.as_bytes().to_vec()));
        };

        let bytes = match kind {
            "utf8" => value.as_bytes().to_vec(),
            "address" => value.parse::<Address>()?.to_bytes().to_vec(),
            "hex" => hex::decode(value)?,
            "u8" => vec![parse_int::<u8>(kind, value)?],
            "u16le" => parse_int::<u16>(kind, value)?.to_le_bytes().to_vec(),
            "u32le" => parse_int::<u32>(kind, value)?.to_le_bytes().to_vec(),
            "u64le" => parse_int::<u64>(kind, value)?.to_le_bytes().to_vec(),
            _ => s.as_bytes().to_vec(),
        };

        Ok(Self(bytes))
    }
}

fn parse_int<T>(kind: &str, value: &str) -> Result<T, SeedArgError>
where
    T: FromStr<Err = ParseIntError>,
{
    value.parse().map_err(|source| SeedArgError::InvalidInteger { kind: kind.to_string(), source })
}

/// Errors from parsing a seed argument.
#[derive(Debug, Error)]
pub enum SeedArgError {
    /// `address:` value is not a base58 address.
    #[error("invalid address seed: {0}")]
    Address(#[from] AddressParseError),

    /// `hex:` value is not valid hex.
    #[error("invalid hex seed: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Integer value does not parse or does not fit.
    #[error("invalid {kind} seed: {source}")]
    InvalidInteger {
        /// The integer kind prefix.
        kind: String,
        /// Parse failure.
        source: ParseIntError,
    },
}
