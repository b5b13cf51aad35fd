//! HMAC-SHA256 token authentication.
//!
//! Signs the version, timestamp, IV and ciphertext of a token under the
//! 16-byte signing key. Verification is constant-time via the `hmac` crate.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{FernetError, TokenError};

type HmacSha256 = Hmac<Sha256>;

/// Compute the HMAC-SHA256 tag of `data` under the signing key.
#[must_use]
pub fn sign(key: &[u8; 16], data: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC-SHA256 accepts any key length");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Verify the HMAC-SHA256 tag over `data` in constant time.
///
/// # Errors
///
/// Returns [`TokenError::Signature`] (as [`FernetError::InvalidToken`]) if
/// the tag does not match.
pub fn verify(key: &[u8; 16], data: &[u8], tag: &[u8]) -> Result<(), FernetError> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC-SHA256 accepts any key length");
    mac.update(data);
    mac.verify_slice(tag)
        .map_err(|_| FernetError::InvalidToken(TokenError::Signature))
}
