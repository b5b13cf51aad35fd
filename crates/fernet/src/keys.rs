//! Secret parsing and key derivation.
//!
//! A Fernet secret is 32 raw bytes carried as base64url text (43 characters
//! unpadded, 44 padded). The first half keys HMAC-SHA256, the second half
//! keys AES-128-CBC. The split is fixed by the wire format.

use crate::base64url;
use crate::error::{FernetError, SecretError};

/// Raw secret length in bytes.
pub const SECRET_LEN: usize = 32;

/// The two 128-bit halves of a parsed secret.
///
/// Immutable once constructed; a `KeyPair` may be shared read-only across
/// concurrent encrypt and decrypt calls.
#[derive(Clone, Debug)]
pub struct KeyPair {
    signing: [u8; 16],
    encryption: [u8; 16],
}

impl KeyPair {
    /// Parse a base64url secret into its signing and encryption halves.
    ///
    /// Accepts both padded and unpadded text.
    ///
    /// # Errors
    ///
    /// Returns [`SecretError::Encoding`] if `secret` is not base64url, or
    /// [`SecretError::Length`] if it does not decode to exactly 32 bytes
    /// (both as [`FernetError::InvalidSecret`]).
    pub fn from_secret(secret: &str) -> Result<Self, FernetError> {
        let raw = base64url::decode(secret).map_err(|_| SecretError::Encoding)?;
        let raw: [u8; SECRET_LEN] = raw
            .try_into()
            .map_err(|raw: Vec<u8>| SecretError::Length { actual: raw.len() })?;
        Ok(Self::from_bytes(raw))
    }

    /// Split raw secret bytes without a text round trip.
    #[must_use]
    pub fn from_bytes(secret: [u8; SECRET_LEN]) -> Self {
        let mut signing = [0u8; 16];
        let mut encryption = [0u8; 16];
        signing.copy_from_slice(&secret[..16]);
        encryption.copy_from_slice(&secret[16..]);
        Self { signing, encryption }
    }

    /// The HMAC-SHA256 signing key, `secret[0..16]`.
    #[must_use]
    pub fn signing_key(&self) -> &[u8; 16] {
        &self.signing
    }

    /// The AES-128-CBC encryption key, `secret[16..32]`.
    #[must_use]
    pub fn encryption_key(&self) -> &[u8; 16] {
        &self.encryption
    }
}

/// Generate a fresh secret as padded base64url text.
///
/// Draws 32 bytes from the OS random number generator on every call.
#[must_use]
pub fn generate_secret() -> String {
    use rand::Rng;
    let mut secret = [0u8; SECRET_LEN];
    rand::rngs::OsRng.fill(&mut secret);
    base64url::encode(&secret)
}
