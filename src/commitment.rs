//! Schnorr-style commitments, the "t-values".
//!
//! Five group elements that bind the prover to its randomness: `t_verify`,
//! `t_revoke`, `t_sig`, `t_sig1`, `t_sig2`. Each is normalized and
//! subgroup-validated before being returned.

#![forbid(unsafe_code)]

use crate::algebra::{fr_mul, g1_add, g1_clear_to_identity, g1_is_valid, g1_mul, g1_normalize};
use crate::attributes::UserAttributes;
use crate::credential::{Credential, SelectedRandomizers};
use crate::errors::ProofErrorCause;
use crate::params::{IssuerSignature, RevocationAuthorityParameters, SystemParameters};
use crate::randomness::RandomnessBundle;
use crate::G1;

/// The five Schnorr-style commitments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commitments {
    /// `t_verify = rho_v*G1 + (rho_mr*rho)*sigma_{m_r} + rho*Sum_und`.
    pub t_verify: G1,
    /// `t_revoke = rho_mr*C + rho_i*C`.
    pub t_revoke: G1,
    /// `t_sig = rho_i*G1 + rho_e1*h1 + rho_e2*h2`.
    pub t_sig: G1,
    /// `t_sig1 = rho_v*G1 + rho_e1*sigma_hat_e1`.
    pub t_sig1: G1,
    /// `t_sig2 = rho_v*G1 + rho_e2*sigma_hat_e2`.
    pub t_sig2: G1,
}

/// `Sum_und = Sum_{j: !disclosed} rho_mz[j] * sigma_{x_j}`.
fn sum_undisclosed(
    attributes: &UserAttributes,
    attribute_sigmas: &[G1],
    randomness: &RandomnessBundle,
) -> G1 {
    let mut acc = g1_clear_to_identity();
    for j in attributes.undisclosed_indices() {
        let rho_mz_j = randomness.rho_mz[&j];
        acc = g1_add(&acc, &g1_mul(&attribute_sigmas[j], &rho_mz_j));
    }
    acc
}

/// Compute the five t-values.
///
/// Fails with [`ProofErrorCause::AlgebraInvalid`] if any output point fails
/// its validity predicate.
#[allow(clippy::too_many_arguments)]
pub fn compute_commitments(
    sys: &SystemParameters,
    ra: &RevocationAuthorityParameters,
    ie_sig: &IssuerSignature,
    attributes: &UserAttributes,
    randomizers: &SelectedRandomizers,
    credential: &Credential,
    randomness: &RandomnessBundle,
) -> Result<Commitments, ProofErrorCause> {
    let sum_und = sum_undisclosed(attributes, &ie_sig.attribute_sigmas, randomness);

    let t_verify = {
        let a = g1_mul(&sys.g1, &randomness.rho_v);
        let b = g1_mul(&ie_sig.revocation_sigma, &fr_mul(&randomness.rho_mr, &randomness.rho));
        let c = g1_mul(&sum_und, &randomness.rho);
        g1_normalize(&g1_add(&g1_add(&a, &b), &c))
    };

    let t_revoke = {
        let a = g1_mul(&credential.pseudonym, &randomness.rho_mr);
        let b = g1_mul(&credential.pseudonym, &randomness.rho_i);
        g1_normalize(&g1_add(&a, &b))
    };

    let t_sig = {
        let a = g1_mul(&sys.g1, &randomness.rho_i);
        let b = g1_mul(&ra.alphas_mul[0], &randomness.rho_e1);
        let c = g1_mul(&ra.alphas_mul[1], &randomness.rho_e2);
        g1_normalize(&g1_add(&g1_add(&a, &b), &c))
    };

    let t_sig1 = {
        let a = g1_mul(&sys.g1, &randomness.rho_v);
        let b = g1_mul(&credential.sigma_hat_e1, &randomness.rho_e1);
        g1_normalize(&g1_add(&a, &b))
    };

    let t_sig2 = {
        let a = g1_mul(&sys.g1, &randomness.rho_v);
        let b = g1_mul(&credential.sigma_hat_e2, &randomness.rho_e2);
        g1_normalize(&g1_add(&a, &b))
    };

    for (label, point) in [
        ("t_verify", &t_verify),
        ("t_revoke", &t_revoke),
        ("t_sig", &t_sig),
        ("t_sig1", &t_sig1),
        ("t_sig2", &t_sig2),
    ] {
        if !g1_is_valid(point) {
            return Err(ProofErrorCause::AlgebraInvalid(label));
        }
    }

    Ok(Commitments { t_verify, t_revoke, t_sig, t_sig1, t_sig2 })
}
