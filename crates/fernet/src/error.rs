//! Error taxonomy for secret parsing and token validation.
//!
//! Every rejection carries a stable, matchable cause so callers can
//! distinguish a malformed token from a wrong key.

use core::fmt;

/// Why a secret string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretError {
    /// The secret is not valid base64url text.
    Encoding,
    /// The secret did not decode to exactly 32 bytes.
    Length { actual: usize },
}

/// Why a token was rejected during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// The token is not valid base64url text.
    Encoding,
    /// The decoded token is shorter than 73 bytes or its ciphertext is not
    /// block-aligned.
    Length { actual: usize },
    /// The leading version byte is not 0x80.
    Version { actual: u8 },
    /// HMAC-SHA256 verification failed.
    Signature,
    /// The token timestamp is outside the window accepted by a TTL-checked
    /// decrypt.
    Expired,
}

/// Errors returned by encrypt and decrypt operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FernetError {
    /// The secret failed base64url decoding or the 32-byte length rule.
    InvalidSecret(SecretError),
    /// The token failed a structural or authenticity check.
    InvalidToken(TokenError),
    /// AES-CBC decryption or PKCS7 unpadding failed.
    FailedDecryption,
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretError::Encoding => write!(f, "not valid base64url"),
            SecretError::Length { actual } => {
                write!(f, "must decode to 32 bytes, got {actual}")
            }
        }
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Encoding => write!(f, "not valid base64url"),
            TokenError::Length { actual } => write!(f, "bad length: {actual} bytes"),
            TokenError::Version { actual } => write!(f, "unknown version byte 0x{actual:02x}"),
            TokenError::Signature => write!(f, "signature verification failed"),
            TokenError::Expired => write!(f, "timestamp outside the accepted window"),
        }
    }
}

impl fmt::Display for FernetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FernetError::InvalidSecret(cause) => write!(f, "invalid secret: {cause}"),
            FernetError::InvalidToken(cause) => write!(f, "invalid token: {cause}"),
            FernetError::FailedDecryption => write!(f, "decryption failed"),
        }
    }
}

impl From<SecretError> for FernetError {
    fn from(cause: SecretError) -> Self {
        FernetError::InvalidSecret(cause)
    }
}

impl From<TokenError> for FernetError {
    fn from(cause: TokenError) -> Self {
        FernetError::InvalidToken(cause)
    }
}

impl std::error::Error for SecretError {}
impl std::error::Error for TokenError {}
impl std::error::Error for FernetError {}
