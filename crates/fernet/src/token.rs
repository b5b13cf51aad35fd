//! Token assembly and validation.
//!
//! # Token layout
//!
//! ```text
//! [Version: 0x80] || [Timestamp: 8 bytes BE] || [IV: 16 bytes]
//!     || [Ciphertext: multiple of 16] || [HMAC-SHA256: 32 bytes]
//! ```
//!
//! Encoding pads the message with PKCS7, encrypts with AES-128-CBC under a
//! fresh IV, authenticates everything before the tag with HMAC-SHA256, and
//! emits padded base64url text.
//!
//! Decoding validates in a fixed order: base64url text, length, version
//! byte, AES-CBC decryption (including PKCS7 unpadding), HMAC verification.
//! Decryption runs **before** signature verification: a token whose
//! ciphertext cannot be decrypted reports [`FernetError::FailedDecryption`]
//! even though its signature was never checked. Reordering the two would
//! change the observable error for tampered tokens and break compatibility
//! with the reference implementation.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{FernetError, TokenError};
use crate::keys::KeyPair;
use crate::pkcs7::BLOCK_LEN;

/// Leading byte of every token.
pub const VERSION: u8 = 0x80;

const TIMESTAMP_LEN: usize = 8;
const IV_LEN: usize = 16;
const HMAC_LEN: usize = 32;

const TIMESTAMP_OFFSET: usize = 1;
const IV_OFFSET: usize = TIMESTAMP_OFFSET + TIMESTAMP_LEN;
const CIPHERTEXT_OFFSET: usize = IV_OFFSET + IV_LEN;

/// Bytes of a decoded token that are not ciphertext: version, timestamp, IV
/// and HMAC.
pub const OVERHEAD_LEN: usize = CIPHERTEXT_OFFSET + HMAC_LEN;

/// Smallest decodable token: the overhead plus one cipher block.
pub const MIN_TOKEN_LEN: usize = OVERHEAD_LEN + BLOCK_LEN;

/// Seconds a token timestamp may sit in the future of the verifier clock
/// before a TTL-checked decrypt rejects it.
pub const MAX_CLOCK_SKEW: u64 = 60;

/// A parsed secret ready to mint and open tokens.
///
/// Construction parses the secret once; every operation afterwards is pure
/// and safe to call concurrently through a shared reference.
pub struct Fernet {
    keys: KeyPair,
}

impl Fernet {
    /// Parse a base64url `secret` and hold the derived key pair.
    ///
    /// # Errors
    ///
    /// Returns [`FernetError::InvalidSecret`] if the secret is not base64url
    /// or does not decode to 32 bytes.
    pub fn new(secret: &str) -> Result<Self, FernetError> {
        Ok(Self {
            keys: KeyPair::from_secret(secret)?,
        })
    }

    /// Wrap an already-derived key pair.
    #[must_use]
    pub fn from_keys(keys: KeyPair) -> Self {
        Self { keys }
    }

    /// Encrypt `message` into a token stamped with the current wall-clock
    /// time and a fresh random IV.
    #[must_use]
    pub fn encrypt(&self, message: &[u8]) -> String {
        self.encrypt_at_time(message, unix_time_now())
    }

    /// Encrypt `message` with an explicit timestamp and a fresh random IV.
    #[must_use]
    pub fn encrypt_at_time(&self, message: &[u8], timestamp: u64) -> String {
        use rand::Rng;
        let mut iv = [0u8; IV_LEN];
        rand::rngs::OsRng.fill(&mut iv);
        self.encrypt_from_parts(message, timestamp, &iv)
    }

    /// Encrypt `message` with an explicit timestamp and IV.
    ///
    /// Fully deterministic; this is the substitution point for tests and
    /// interoperability vectors. Production callers want [`Fernet::encrypt`],
    /// which never reuses an IV.
    #[must_use]
    pub fn encrypt_from_parts(&self, message: &[u8], timestamp: u64, iv: &[u8; 16]) -> String {
        let ciphertext =
            crate::aes_cbc::encrypt(self.keys.encryption_key(), iv, &crate::pkcs7::pad(message));

        let mut token = Vec::with_capacity(OVERHEAD_LEN + ciphertext.len());
        token.push(VERSION);
        token.extend_from_slice(&timestamp.to_be_bytes());
        token.extend_from_slice(iv);
        token.extend_from_slice(&ciphertext);

        let tag = crate::hmac::sign(self.keys.signing_key(), &token);
        token.extend_from_slice(&tag);

        crate::base64url::encode(&token)
    }

    /// Decrypt a token, ignoring its timestamp.
    ///
    /// # Errors
    ///
    /// - [`TokenError::Encoding`]: not base64url text.
    /// - [`TokenError::Length`]: decoded length below 73 bytes or ciphertext
    ///   not block-aligned.
    /// - [`TokenError::Version`]: leading byte is not 0x80.
    /// - [`FernetError::FailedDecryption`]: AES-CBC or PKCS7 failure.
    /// - [`TokenError::Signature`]: HMAC mismatch.
    pub fn decrypt(&self, token: &str) -> Result<Vec<u8>, FernetError> {
        self.open(token, None)
    }

    /// Decrypt a token and require it to be at most `ttl` seconds old.
    ///
    /// The age check runs only after the signature has been verified, so the
    /// error ordering of [`Fernet::decrypt`] is unchanged. A timestamp more
    /// than [`MAX_CLOCK_SKEW`] seconds in the future is also rejected, both
    /// as [`TokenError::Expired`].
    ///
    /// # Errors
    ///
    /// As [`Fernet::decrypt`], plus [`TokenError::Expired`].
    pub fn decrypt_with_ttl(&self, token: &str, ttl: u64) -> Result<Vec<u8>, FernetError> {
        self.open(token, Some((ttl, unix_time_now())))
    }

    /// Decrypt with an explicit verifier clock; the deterministic
    /// counterpart of [`Fernet::decrypt_with_ttl`].
    ///
    /// # Errors
    ///
    /// As [`Fernet::decrypt_with_ttl`].
    pub fn decrypt_at_time(&self, token: &str, ttl: u64, now: u64) -> Result<Vec<u8>, FernetError> {
        self.open(token, Some((ttl, now)))
    }

    fn open(&self, token: &str, age_limit: Option<(u64, u64)>) -> Result<Vec<u8>, FernetError> {
        let raw = crate::base64url::decode(token).map_err(|_| TokenError::Encoding)?;

        if raw.len() < MIN_TOKEN_LEN || !(raw.len() - OVERHEAD_LEN).is_multiple_of(BLOCK_LEN) {
            return Err(TokenError::Length { actual: raw.len() }.into());
        }
        if raw[0] != VERSION {
            return Err(TokenError::Version { actual: raw[0] }.into());
        }

        let hmac_offset = raw.len() - HMAC_LEN;
        let iv: [u8; IV_LEN] = raw[IV_OFFSET..CIPHERTEXT_OFFSET]
            .try_into()
            .expect("iv slice is 16 bytes");
        let ciphertext = &raw[CIPHERTEXT_OFFSET..hmac_offset];

        // Decryption runs before signature verification. A ciphertext that
        // fails to decrypt reports FailedDecryption without the signature
        // ever being checked; see the module docs.
        let mut padded = crate::aes_cbc::decrypt(self.keys.encryption_key(), &iv, ciphertext)?;
        let message_len = crate::pkcs7::unpad(&padded)?.len();

        crate::hmac::verify(
            self.keys.signing_key(),
            &raw[..hmac_offset],
            &raw[hmac_offset..],
        )?;

        if let Some((ttl, now)) = age_limit {
            let timestamp = u64::from_be_bytes(
                raw[TIMESTAMP_OFFSET..IV_OFFSET]
                    .try_into()
                    .expect("timestamp slice is 8 bytes"),
            );
            if timestamp.saturating_add(ttl) < now
                || timestamp > now.saturating_add(MAX_CLOCK_SKEW)
            {
                return Err(TokenError::Expired.into());
            }
        }

        padded.truncate(message_len);
        Ok(padded)
    }
}

/// One-shot encrypt: parse `secret`, encrypt `message`, retain nothing.
///
/// # Errors
///
/// Returns [`FernetError::InvalidSecret`] if the secret does not parse.
pub fn encrypt_with_secret(secret: &str, message: &[u8]) -> Result<String, FernetError> {
    Ok(Fernet::new(secret)?.encrypt(message))
}

/// One-shot decrypt: parse `secret`, decrypt `token`, retain nothing.
///
/// # Errors
///
/// As [`Fernet::new`] and [`Fernet::decrypt`].
pub fn decrypt_with_secret(secret: &str, token: &str) -> Result<Vec<u8>, FernetError> {
    Fernet::new(secret)?.decrypt(token)
}

fn unix_time_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is before the Unix epoch")
        .as_secs()
}
