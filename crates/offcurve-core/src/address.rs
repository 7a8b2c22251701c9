//! 32-byte address type and its base58 text form.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::curve;

/// Longest base58 string that can encode 32 bytes.
pub const MAX_BASE58_LEN: usize = 44;

/// A 32-byte identifier.
///
/// Used both for authority ids and for derived addresses. The text form is
/// base58 (Bitcoin alphabet), the same encoding used for public keys.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 32]);

impl Address {
    /// Address length in bytes.
    pub const LEN: usize = 32;

    /// Wraps raw bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Borrows the raw bytes.
    pub const fn as_array(&self) -> &[u8; 32] {
        &self.0
    }

    /// Whether these bytes decompress to an Ed25519 point.
    ///
    /// An on-curve address may have a private key; a derived address never
    /// is one.
    pub fn is_on_curve(&self) -> bool {
        curve::is_on_curve(&self.0)
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 32] {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = AddressParseError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 32]>::try_from(bytes)
            .map(Self)
            .map_err(|_| AddressParseError::WrongLength { len: bytes.len() })
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > MAX_BASE58_LEN {
            return Err(AddressParseError::TooLong { len: s.len() });
        }

        let bytes = bs58::decode(s).into_vec()?;
        Self::try_from(bytes.as_slice())
    }
}

/// Errors from parsing an [`Address`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    /// Input is longer than any base58 encoding of 32 bytes.
    #[error("address string too long: {len} characters (max {MAX_BASE58_LEN})")]
    TooLong {
        /// Length of the rejected string.
        len: usize,
    },

    /// Input is not valid base58.
    #[error("invalid base58: {0}")]
    Base58(#[from] bs58::decode::Error),

    /// Input decoded to the wrong number of bytes.
    #[error("address must be 32 bytes, got {len}")]
    WrongLength {
        /// Number of decoded bytes.
        len: usize,
    },
}
