//! Test vector types for token.json
//!
//! Deterministic token, PKCS7 padding, key split, invalid-token and TTL
//! vectors. Byte strings are lowercase hex; secrets and tokens are base64url
//! text as they appear on the wire.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Pkcs7PaddingVector {
    pub description: String,
    pub input: String,
    pub input_length: u64,
    pub padded: String,
    pub padded_length: u64,
    pub pad_byte: String,
    pub pad_length: u64,
}

#[derive(Debug, Deserialize)]
pub struct KeySplitVector {
    pub secret: String,
    pub signing_key: String,
    pub encryption_key: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct KeySplit {
    pub signing_key: String,
    pub encryption_key: String,
}

#[derive(Debug, Deserialize)]
pub struct TokenLayout {
    pub version_offset: u64,
    pub timestamp_offset: u64,
    pub iv_offset: u64,
    pub ciphertext_offset: u64,
    pub ciphertext_length: u64,
    pub hmac_offset: u64,
    pub total_length: u64,
}

#[derive(Debug, Deserialize)]
pub struct DeterministicTokenVector {
    pub description: String,
    pub secret: String,
    pub key_split: KeySplit,
    pub timestamp: u64,
    pub iv: String,
    pub plaintext: String,
    pub padded_plaintext: String,
    pub ciphertext: String,
    pub hmac: String,
    pub token: String,
    pub token_layout: TokenLayout,
    #[serde(default)]
    pub plaintext_utf8: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InvalidTokenVector {
    pub description: String,
    pub secret: String,
    pub token: String,
    /// Expected rejection kind: `encoding`, `length`, `version`, `signature`
    /// or `failed_decryption`.
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct TtlVector {
    pub description: String,
    pub secret: String,
    pub token: String,
    pub ttl: u64,
    pub now: u64,
    /// `ok` or `expired`.
    pub outcome: String,
    #[serde(default)]
    pub plaintext: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TokenVectors {
    pub description: String,
    pub source: String,
    pub constants: serde_json::Value,
    pub token_format: serde_json::Value,
    pub pkcs7_padding: Vec<Pkcs7PaddingVector>,
    pub key_split_vectors: Vec<KeySplitVector>,
    pub deterministic_token_vectors: Vec<DeterministicTokenVector>,
    pub invalid_token_vectors: Vec<InvalidTokenVector>,
    pub ttl_vectors: Vec<TtlVector>,
}

pub fn load() -> TokenVectors {
    let json = include_str!("../../../.test-vectors/token.json");
    serde_json::from_str(json).expect("Failed to deserialize token.json")
}
