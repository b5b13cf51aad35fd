//! AES-128-CBC block encryption.
//!
//! Operates on already-padded buffers. PKCS7 padding lives in
//! [`crate::pkcs7`] so the token encoder owns each step of the wire layout;
//! the IV is passed explicitly and never prepended to the ciphertext.

use aes::Aes128;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::error::FernetError;
use crate::pkcs7::BLOCK_LEN;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// Encrypt a PKCS7-padded buffer with AES-128-CBC.
///
/// # Panics
///
/// Panics if `padded` is empty or not a multiple of 16 bytes; the token
/// encoder always pads first.
#[must_use]
pub fn encrypt(key: &[u8; 16], iv: &[u8; 16], padded: &[u8]) -> Vec<u8> {
    assert!(
        !padded.is_empty() && padded.len().is_multiple_of(BLOCK_LEN),
        "plaintext must be PKCS7-padded before encryption"
    );

    let mut blocks = padded.to_vec();
    Aes128CbcEnc::new(key.into(), iv.into())
        .encrypt_padded_mut::<NoPadding>(&mut blocks, padded.len())
        .expect("buffer is block-aligned");
    blocks
}

/// Decrypt `ciphertext` with AES-128-CBC, returning the still-padded
/// plaintext.
///
/// # Errors
///
/// Returns [`FernetError::FailedDecryption`] if `ciphertext` is empty or not
/// a multiple of 16 bytes. Padding validity is checked afterwards by
/// [`crate::pkcs7::unpad`].
pub fn decrypt(key: &[u8; 16], iv: &[u8; 16], ciphertext: &[u8]) -> Result<Vec<u8>, FernetError> {
    if ciphertext.is_empty() || !ciphertext.len().is_multiple_of(BLOCK_LEN) {
        return Err(FernetError::FailedDecryption);
    }

    let mut blocks = ciphertext.to_vec();
    Aes128CbcDec::new(key.into(), iv.into())
        .decrypt_padded_mut::<NoPadding>(&mut blocks)
        .map_err(|_| FernetError::FailedDecryption)?;
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkcs7;

    fn vector_keys(v: &fernet_test_vectors::token::DeterministicTokenVector) -> ([u8; 16], [u8; 16]) {
        let key: [u8; 16] = hex::decode(&v.key_split.encryption_key)
            .expect("invalid hex encryption_key")
            .try_into()
            .expect("encryption key must be 16 bytes");
        let iv: [u8; 16] = hex::decode(&v.iv)
            .expect("invalid hex iv")
            .try_into()
            .expect("iv must be 16 bytes");
        (key, iv)
    }

    #[test]
    fn test_encrypt_vectors() {
        let vectors = fernet_test_vectors::token::load();

        for v in &vectors.deterministic_token_vectors {
            let (key, iv) = vector_keys(v);
            let padded = hex::decode(&v.padded_plaintext).expect("invalid hex padded_plaintext");
            let expected = hex::decode(&v.ciphertext).expect("invalid hex ciphertext");

            assert_eq!(
                encrypt(&key, &iv, &padded),
                expected,
                "encrypt mismatch: {}",
                v.description
            );
        }
    }

    #[test]
    fn test_decrypt_vectors() {
        let vectors = fernet_test_vectors::token::load();

        for v in &vectors.deterministic_token_vectors {
            let (key, iv) = vector_keys(v);
            let ciphertext = hex::decode(&v.ciphertext).expect("invalid hex ciphertext");
            let expected = hex::decode(&v.padded_plaintext).expect("invalid hex padded_plaintext");

            assert_eq!(
                decrypt(&key, &iv, &ciphertext).expect("decryption should succeed"),
                expected,
                "decrypt mismatch: {}",
                v.description
            );
        }
    }

    #[test]
    fn test_decrypt_rejects_unaligned_ciphertext() {
        let key = [0x42u8; 16];
        let iv = [0x24u8; 16];

        for bad in [0usize, 1, 15, 17, 33] {
            assert_eq!(
                decrypt(&key, &iv, &vec![0u8; bad]),
                Err(FernetError::FailedDecryption),
                "{bad} bytes should be rejected"
            );
        }
    }

    #[test]
    fn test_roundtrip_with_padding() {
        let key = [0x42u8; 16];
        let iv = [0x24u8; 16];

        for size in [0, 1, 7, 15, 16, 17, 31, 32, 33, 100, 255, 256] {
            let message: Vec<u8> = (0..size).map(|i| (i & 0xFF) as u8).collect();
            let ciphertext = encrypt(&key, &iv, &pkcs7::pad(&message));

            assert!(ciphertext.len().is_multiple_of(BLOCK_LEN), "size {size}");
            assert!(!ciphertext.is_empty(), "size {size}");

            let padded = decrypt(&key, &iv, &ciphertext).expect("roundtrip decrypt failed");
            assert_eq!(pkcs7::unpad(&padded).unwrap(), &message[..], "size {size}");
        }
    }

    #[test]
    fn test_different_iv_changes_ciphertext() {
        let key = [0x42u8; 16];
        let padded = pkcs7::pad(b"same message, different iv");

        let a = encrypt(&key, &[0x00u8; 16], &padded);
        let b = encrypt(&key, &[0x01u8; 16], &padded);
        assert_ne!(a, b);
    }
}
