//! Fiat–Shamir transcript and challenge derivation.
//!
//! Concatenates, in an exact, normative order, the canonical byte encodings
//! of the five t-values, the randomized signature triple, the two auxiliary
//! signature points, the pseudonym, and the raw verifier nonce, then feeds
//! the result through the [`crate::hash`] convention to derive the
//! Fiat–Shamir challenge `e`. Order and encoding are normative: the verifier
//! must reproduce them bit-exactly, so this module does no length-prefixing
//! or domain separation beyond the fixed concatenation order above.

#![forbid(unsafe_code)]

use ark_serialize::CanonicalSerialize;

use crate::commitment::Commitments;
use crate::credential::Credential;
use crate::errors::ProofErrorCause;
use crate::hash::hash_to_scalar;
use crate::{Fr, G1};

/// Accumulates the transcript bytes in the normative order and derives the
/// challenge.
pub struct ChallengeTranscript {
    bytes: Vec<u8>,
}

impl ChallengeTranscript {
    /// Start a fresh, empty transcript.
    pub fn new() -> Self {
        ChallengeTranscript { bytes: Vec::new() }
    }

    /// Absorb a `G1` point's canonical (compressed) encoding.
    pub fn absorb_point(&mut self, point: &G1) -> Result<(), ProofErrorCause> {
        point
            .serialize_compressed(&mut self.bytes)
            .map_err(|_| ProofErrorCause::AlgebraInvalid("failed to serialize G1 point into transcript"))
    }

    /// Absorb raw bytes verbatim (used for the verifier's nonce).
    pub fn absorb_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Derive the Fiat–Shamir challenge from the accumulated transcript.
    pub fn challenge(&self) -> Result<Fr, ProofErrorCause> {
        hash_to_scalar(&self.bytes)
    }
}

impl Default for ChallengeTranscript {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the transcript and derive the challenge `e`:
///
/// `e = H(t_verify || t_revoke || t_sig || t_sig1 || t_sig2 || sigma_hat ||
/// sigma_hat_e1 || sigma_hat_e2 || sigma_{-e1} || sigma_{-e2} || C || nonce)`
pub fn compute_challenge(
    commitments: &Commitments,
    credential: &Credential,
    nonce: &[u8],
) -> Result<Fr, ProofErrorCause> {
    let mut transcript = ChallengeTranscript::new();

    transcript.absorb_point(&commitments.t_verify)?;
    transcript.absorb_point(&commitments.t_revoke)?;
    transcript.absorb_point(&commitments.t_sig)?;
    transcript.absorb_point(&commitments.t_sig1)?;
    transcript.absorb_point(&commitments.t_sig2)?;
    transcript.absorb_point(&credential.sigma_hat)?;
    transcript.absorb_point(&credential.sigma_hat_e1)?;
    transcript.absorb_point(&credential.sigma_hat_e2)?;
    transcript.absorb_point(&credential.sigma_minus_e1)?;
    transcript.absorb_point(&credential.sigma_minus_e2)?;
    transcript.absorb_point(&credential.pseudonym)?;
    transcript.absorb_bytes(nonce);

    transcript.challenge()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::AffineRepr;

    fn dummy_credential() -> Credential {
        let g = G1::generator();
        Credential {
            pseudonym: g,
            sigma_hat: g,
            sigma_hat_e1: g,
            sigma_hat_e2: g,
            sigma_minus_e1: g,
            sigma_minus_e2: g,
        }
    }

    fn dummy_commitments() -> Commitments {
        let g = G1::generator();
        Commitments { t_verify: g, t_revoke: g, t_sig: g, t_sig1: g, t_sig2: g }
    }

    #[test]
    fn flipping_a_nonce_bit_changes_the_challenge() {
        let commitments = dummy_commitments();
        let credential = dummy_credential();

        let e1 = compute_challenge(&commitments, &credential, b"nonce-value").unwrap();
        let e2 = compute_challenge(&commitments, &credential, b"nonce-values").unwrap();

        assert_ne!(e1, e2);
    }

    #[test]
    fn same_inputs_give_the_same_challenge() {
        let commitments = dummy_commitments();
        let credential = dummy_credential();

        let e1 = compute_challenge(&commitments, &credential, b"fixed-nonce").unwrap();
        let e2 = compute_challenge(&commitments, &credential, b"fixed-nonce").unwrap();

        assert_eq!(e1, e2);
    }
}
