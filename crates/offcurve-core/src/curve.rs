//! Ed25519 curve membership.
//!
//! The decision is delegated to `curve25519-dalek` so that derived addresses
//! agree bit for bit with every other implementation of the scheme.

use curve25519_dalek::edwards::CompressedEdwardsY;

/// Returns true if `bytes` decompresses to a point on the Ed25519 curve.
///
/// Non-canonical encodings are judged exactly as dalek's `decompress` judges
/// them.
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    CompressedEdwardsY(*bytes).decompress().is_some()
}

#[cfg(test)]
mod tests {
    use curve25519_dalek::constants::ED25519_BASEPOINT_COMPRESSED;

    use super::*;

    #[test]
    fn basepoint_is_on_curve() {
        assert!(is_on_curve(ED25519_BASEPOINT_COMPRESSED.as_bytes()));
    }

    #[test]
    fn identity_is_on_curve() {
        // y = 1, x = 0
        let mut identity = [0u8; 32];
        identity[0] = 1;
        assert!(is_on_curve(&identity));
    }

    #[test]
    fn y_of_two_is_off_curve() {
        // (y^2 - 1) / (d*y^2 + 1) is a non-square for y = 2
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        assert!(!is_on_curve(&bytes));
    }
}
