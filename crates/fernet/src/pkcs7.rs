//! PKCS7 padding for the AES block size.
//!
//! Messages are padded to a non-zero multiple of 16 bytes before encryption.
//! The pad value equals the pad length, so an already-aligned message gains a
//! full extra block and unpadding is always unambiguous.

use crate::error::FernetError;

/// AES block length in bytes.
pub const BLOCK_LEN: usize = 16;

/// Pad `message` to a non-zero multiple of [`BLOCK_LEN`].
///
/// The pad length is always in `1..=16`; a block-aligned message receives a
/// full block of padding.
#[must_use]
pub fn pad(message: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_LEN - message.len() % BLOCK_LEN;
    let mut padded = message.to_vec();
    padded.resize(message.len() + pad_len, pad_len as u8);
    padded
}

/// Strip PKCS7 padding from a decrypted buffer, returning the message slice.
///
/// # Errors
///
/// Returns [`FernetError::FailedDecryption`] when the buffer is empty, the
/// pad value is outside `1..=16`, the pad length exceeds the buffer, or the
/// trailing bytes disagree with the pad value.
pub fn unpad(padded: &[u8]) -> Result<&[u8], FernetError> {
    let pad_len = match padded.last() {
        Some(&value) if (1..=BLOCK_LEN as u8).contains(&value) => value as usize,
        _ => return Err(FernetError::FailedDecryption),
    };
    let Some(message_len) = padded.len().checked_sub(pad_len) else {
        return Err(FernetError::FailedDecryption);
    };
    if padded[message_len..].iter().any(|&b| b as usize != pad_len) {
        return Err(FernetError::FailedDecryption);
    }
    Ok(&padded[..message_len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_vectors() {
        let vectors = fernet_test_vectors::token::load();

        for v in &vectors.pkcs7_padding {
            let input = hex::decode(&v.input).expect("invalid hex input");
            assert_eq!(input.len() as u64, v.input_length, "{}", v.description);

            let padded = pad(&input);
            let expected = hex::decode(&v.padded).expect("invalid hex padded");
            assert_eq!(padded, expected, "padding mismatch: {}", v.description);
            assert_eq!(padded.len() as u64, v.padded_length, "{}", v.description);
            assert_eq!(u64::from(*padded.last().unwrap()), v.pad_length, "{}", v.description);
        }
    }

    #[test]
    fn test_unpad_vectors() {
        let vectors = fernet_test_vectors::token::load();

        for v in &vectors.pkcs7_padding {
            let padded = hex::decode(&v.padded).expect("invalid hex padded");
            let expected = hex::decode(&v.input).expect("invalid hex input");
            assert_eq!(
                unpad(&padded).expect("unpad failed"),
                &expected[..],
                "unpadding mismatch: {}",
                v.description
            );
        }
    }

    #[test]
    fn test_aligned_message_gets_full_pad_block() {
        let message = [0xABu8; 16];
        let padded = pad(&message);
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[16..], &[0x10u8; 16]);
        assert_eq!(unpad(&padded).unwrap(), &message);
    }

    #[test]
    fn test_unpad_rejects_malformed_padding() {
        // empty buffer
        assert_eq!(unpad(&[]), Err(FernetError::FailedDecryption));

        // zero pad value
        assert_eq!(unpad(&[0xAA, 0x00]), Err(FernetError::FailedDecryption));

        // pad value larger than the block size
        assert_eq!(unpad(&[0x11; 32]), Err(FernetError::FailedDecryption));

        // pad length exceeds the buffer
        assert_eq!(unpad(&[0x05, 0x05]), Err(FernetError::FailedDecryption));

        // trailing bytes disagree with the pad value
        assert_eq!(
            unpad(&[0xAA, 0x02, 0x03, 0x03, 0x03]),
            Err(FernetError::FailedDecryption)
        );
    }

    #[test]
    fn test_roundtrip_sizes() {
        for size in [0, 1, 7, 15, 16, 17, 31, 32, 33, 100, 255, 256] {
            let message: Vec<u8> = (0..size).map(|i| (i & 0xFF) as u8).collect();
            let padded = pad(&message);

            assert!(padded.len().is_multiple_of(BLOCK_LEN), "size {size}");
            assert!(padded.len() > message.len(), "size {size}");
            assert!(padded.len() <= message.len() + BLOCK_LEN, "size {size}");
            assert_eq!(unpad(&padded).unwrap(), &message[..], "size {size}");
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn pkcs7_roundtrip(message in proptest::collection::vec(any::<u8>(), 0..256)) {
            let padded = pad(&message);
            prop_assert_eq!(padded.len() % BLOCK_LEN, 0);
            prop_assert_eq!(unpad(&padded).unwrap(), &message[..]);
        }
    }
}
