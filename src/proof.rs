//! The proof orchestrator.
//!
//! Wires the disclosure selector, the randomness bundle, the credential
//! randomizer, the commitments, the Fiat–Shamir challenge, and the
//! responses into the single public operation of this crate:
//! [`compute_proof`]. Every validity-check failure short-circuits to a
//! fatal [`ProofError`]; no partial proof is ever returned.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use rand::{CryptoRng, RngCore};

use crate::attributes::UserAttributes;
use crate::commitment;
use crate::credential::{self, Credential};
use crate::errors::{ProofError, ProofErrorCause};
use crate::hash::hash_to_scalar;
use crate::params::{IssuerSignature, RevocationAuthorityParameters, RevocationAuthoritySignature, SystemParameters};
use crate::randomness::RandomnessBundle;
use crate::response::{self, Responses};
use crate::transcript;
use crate::Fr;

/// The non-interactive zero-knowledge proof `pi`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    /// The Fiat–Shamir challenge `e`.
    pub e: Fr,
    /// `s_v`, `s_mr`, `s_i`, `s_e1`, `s_e2`, and `s_mz[j]` for undisclosed
    /// `j` (see [`Responses`]).
    pub responses: Responses,
}

/// Run the full proof computation: disclosure selection, randomness
/// sampling, credential randomization, commitment, challenge, and response
/// derivation, in that order.
///
/// Preconditions (fail with [`ProofErrorCause::EmptyNonce`],
/// [`ProofErrorCause::EmptyEpoch`], [`ProofErrorCause::DisclosureCountOutOfRange`],
/// or [`ProofErrorCause::RandomizerIndexOutOfRange`] otherwise): `nonce` and
/// `epoch` are non-empty; `num_disclosed_attributes <= attributes.len()`;
/// `i`, `ii` index into the revocation authority's randomizer tables. The
/// `1 <= N <= N_MAX` bound is enforced at [`UserAttributes`] construction,
/// before this function ever sees the attribute set.
#[allow(clippy::too_many_arguments)]
pub fn compute_proof<R: RngCore + CryptoRng>(
    rng: &mut R,
    sys: &SystemParameters,
    ra: &RevocationAuthorityParameters,
    ra_sig: &RevocationAuthoritySignature,
    ie_sig: &IssuerSignature,
    i: usize,
    ii: usize,
    nonce: &[u8],
    epoch: &[u8],
    attributes: &mut UserAttributes,
    num_disclosed_attributes: usize,
) -> Result<(Credential, Proof), ProofError> {
    if nonce.is_empty() {
        return Err(ProofErrorCause::EmptyNonce.into());
    }
    if epoch.is_empty() {
        return Err(ProofErrorCause::EmptyEpoch.into());
    }

    // Mark the last-D attributes disclosed.
    attributes
        .select_disclosure(num_disclosed_attributes)
        .map_err(ProofError::new)?;

    // Select the verifier's randomizer pair.
    let randomizers = credential::select_randomizers(ra, i, ii).map_err(ProofError::new)?;

    let hash_epoch = hash_to_scalar(epoch).map_err(ProofError::new)?;

    let pseudonym =
        credential::compute_pseudonym(sys, ra, ra_sig, &randomizers, &hash_epoch).map_err(ProofError::new)?;

    // Draw the commitment-randomness bundle.
    let randomness =
        RandomnessBundle::sample(rng, attributes.undisclosed_indices()).map_err(ProofError::new)?;

    // Randomize the issuer signature.
    let credential_value = credential::compute_credential(sys, ie_sig, &randomizers, &pseudonym, &randomness)
        .map_err(ProofError::new)?;

    // Build the Schnorr commitments (t-values).
    let commitments = commitment::compute_commitments(
        sys,
        ra,
        ie_sig,
        attributes,
        &randomizers,
        &credential_value,
        &randomness,
    )
    .map_err(ProofError::new)?;

    // Derive the Fiat–Shamir challenge.
    let e = transcript::compute_challenge(&commitments, &credential_value, nonce).map_err(ProofError::new)?;

    // Compute the scalar responses (s-values).
    let responses = response::compute_responses(attributes, ra_sig, &randomizers, &pseudonym.i, &e, &randomness)
        .map_err(ProofError::new)?;

    Ok((credential_value, Proof { e, responses }))
}

/// A proof's `s_mz` entries, keyed by attribute index, for callers that
/// only need that slice (e.g. to build a wire encoding).
pub fn undisclosed_responses(proof: &Proof) -> &BTreeMap<usize, Fr> {
    &proof.responses.s_mz
}
