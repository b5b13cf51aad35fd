//! Fernet authenticated symmetric encryption tokens.
//!
//! This crate implements the Fernet token format, version 0x80: a message is
//! PKCS7-padded, encrypted with AES-128-CBC under a fresh random IV,
//! authenticated with HMAC-SHA256, and carried as padded base64url text. The
//! byte layout matches the published format exactly, so tokens interoperate
//! with the reference Python implementation.
//!
//! # Token layout
//!
//! ```text
//! [Version: 0x80] || [Timestamp: 8 bytes BE] || [IV: 16 bytes]
//!     || [Ciphertext: multiple of 16] || [HMAC-SHA256: 32 bytes]
//! ```
//!
//! # Key split
//!
//! A 32-byte secret, carried as base64url text, is split as:
//! - `signing_key = secret[0..16]` -- used for HMAC-SHA256
//! - `encryption_key = secret[16..32]` -- used for AES-128-CBC
//!
//! # Example
//!
//! ```rust
//! let secret = fernet::generate_secret();
//! let fernet = fernet::Fernet::new(&secret).unwrap();
//!
//! let token = fernet.encrypt(b"hello world");
//! let message = fernet.decrypt(&token).unwrap();
//! assert_eq!(message, b"hello world");
//! ```

pub mod aes_cbc;
pub mod base64url;
pub mod error;
pub mod hmac;
pub mod keys;
pub mod pkcs7;
pub mod token;

pub use error::{FernetError, SecretError, TokenError};
pub use keys::{generate_secret, KeyPair, SECRET_LEN};
pub use token::{decrypt_with_secret, encrypt_with_secret, Fernet};
