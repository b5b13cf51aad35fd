//! base64url text codec for secrets and tokens.
//!
//! Secrets and tokens travel as RFC 4648 section 5 ("URL and Filename Safe")
//! base64. Encoding always emits `=` padding, matching the reference
//! implementation; decoding accepts both padded and unpadded input.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// URL-safe engine: padded on encode, padding-indifferent on decode.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode `bytes` as padded base64url text.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_LENIENT.encode(bytes)
}

/// Decode base64url `text`, reconstructing missing `=` padding as needed.
///
/// # Errors
///
/// Returns a [`base64::DecodeError`] if `text` contains characters outside
/// the base64url alphabet or has an impossible length. Callers map this into
/// their own error taxonomy.
pub fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_LENIENT.decode(text)
}
