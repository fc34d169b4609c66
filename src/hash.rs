//! Hash-to-scalar convention.
//!
//! Hashes an arbitrary byte string into `Fr` via a fixed padding convention:
//! compute a 20-byte SHA-1 digest, place it in the **low-order** 20 bytes of
//! a 32-byte little-endian buffer, leave the high-order 12 bytes zero, and
//! interpret the buffer as an `Fr` value, rejecting non-canonical results.
//!
//! This is a legacy constraint inherited from a smart-card interoperability
//! requirement (the card that issues the protocol constants only speaks
//! SHA-1): the padding side and width are **normative**. Altering either
//! invalidates interoperability with the verifier.

#![forbid(unsafe_code)]

use ark_ff::{Field, PrimeField};
use sha1::{Digest, Sha1};

use crate::errors::ProofErrorCause;
use crate::{Fr, EC_SIZE, SHA_DIGEST_LENGTH, SHA_DIGEST_PADDING};

/// Hash `input` into a canonical `Fr` element per the SHA-1/zero-padding
/// convention.
///
/// Fails with [`ProofErrorCause::HashConversionFailed`] if the padded digest
/// does not represent a canonical field element (i.e. the 32-byte buffer,
/// read little-endian, is `>= r`).
pub fn hash_to_scalar(input: &[u8]) -> Result<Fr, ProofErrorCause> {
    let digest = Sha1::digest(input);
    debug_assert_eq!(digest.len(), SHA_DIGEST_LENGTH);

    let mut buf = [0u8; EC_SIZE];
    buf[..SHA_DIGEST_LENGTH].copy_from_slice(&digest);
    // buf[SHA_DIGEST_LENGTH..] stays zero: the high-order SHA_DIGEST_PADDING
    // bytes of the little-endian buffer.
    debug_assert_eq!(SHA_DIGEST_PADDING, EC_SIZE - SHA_DIGEST_LENGTH);

    Fr::from_random_bytes(&buf).ok_or(ProofErrorCause::HashConversionFailed)
}

/// Convert a fixed-width attribute value to `Fr` using the same padding
/// convention as [`hash_to_scalar`], but applied directly to the attribute's
/// raw bytes rather than to a SHA-1 digest of them (`m_{z,j} =
/// to_Fr(attribute.value[j])`).
///
/// Fails with [`ProofErrorCause::HashConversionFailed`] if the attribute
/// bytes do not represent a canonical field element.
pub fn attribute_to_scalar(value: &[u8; EC_SIZE]) -> Result<Fr, ProofErrorCause> {
    Fr::from_random_bytes(value).ok_or(ProofErrorCause::HashConversionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_to_scalar_is_deterministic() {
        let a = hash_to_scalar(b"epoch-2026-07").unwrap();
        let b = hash_to_scalar(b"epoch-2026-07").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn hash_to_scalar_is_sensitive_to_input() {
        let a = hash_to_scalar(b"epoch-2026-07").unwrap();
        let b = hash_to_scalar(b"epoch-2026-08").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn attribute_to_scalar_round_trips_low_bytes() {
        let mut value = [0u8; EC_SIZE];
        value[0] = 0x2a;
        let scalar = attribute_to_scalar(&value).unwrap();
        assert_eq!(scalar, Fr::from(0x2au64));
    }
}
