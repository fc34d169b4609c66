//! Schnorr-style responses, the "s-values".
//!
//! Sign discipline is normative: commitments built with
//! `+e*x` in the verifier's checking equation yield `+` responses here;
//! commitments built with `-e*x` yield `-`. In particular `s_mr` is
//! computed by **subtraction** — the original C implementation's code
//! subtracts even though an adjacent comment says otherwise; the operation,
//! not the comment, is the resolved convention (see DESIGN.md).

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use crate::algebra::{fr_add, fr_mul, fr_sub};
use crate::attributes::UserAttributes;
use crate::credential::SelectedRandomizers;
use crate::errors::ProofErrorCause;
use crate::hash::attribute_to_scalar;
use crate::params::RevocationAuthoritySignature;
use crate::randomness::RandomnessBundle;
use crate::Fr;

/// The proof's scalar responses (proof `pi`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Responses {
    /// `s_v = rho_v + e*rho`.
    pub s_v: Fr,
    /// `s_mr = rho_mr - e*mr`.
    pub s_mr: Fr,
    /// `s_i = rho_i + e*i`.
    pub s_i: Fr,
    /// `s_e1 = rho_e1 - e*e1`.
    pub s_e1: Fr,
    /// `s_e2 = rho_e2 - e*e2`.
    pub s_e2: Fr,
    /// `s_mz[j] = rho_mz[j] - e*m_{z,j}`, one per undisclosed index `j`.
    /// Meaningless (and absent) for disclosed indices.
    pub s_mz: BTreeMap<usize, Fr>,
}

/// Compute the proof's scalar responses.
///
/// Fails with [`ProofErrorCause::HashConversionFailed`] if an undisclosed
/// attribute's raw bytes do not convert to a canonical field element.
pub fn compute_responses(
    attributes: &UserAttributes,
    ra_sig: &RevocationAuthoritySignature,
    randomizers: &SelectedRandomizers,
    i: &Fr,
    e: &Fr,
    randomness: &RandomnessBundle,
) -> Result<Responses, ProofErrorCause> {
    let mut s_mz = BTreeMap::new();
    for j in attributes.undisclosed_indices() {
        let m_z_j = attribute_to_scalar(&attributes.as_slice()[j].value)?;
        let rho_mz_j = randomness.rho_mz[&j];
        s_mz.insert(j, fr_sub(&rho_mz_j, &fr_mul(e, &m_z_j)));
    }

    let s_v = fr_add(&randomness.rho_v, &fr_mul(e, &randomness.rho));
    let s_mr = fr_sub(&randomness.rho_mr, &fr_mul(e, &ra_sig.mr));
    let s_i = fr_add(&randomness.rho_i, &fr_mul(e, i));
    let s_e1 = fr_sub(&randomness.rho_e1, &fr_mul(e, &randomizers.e1));
    let s_e2 = fr_sub(&randomness.rho_e2, &fr_mul(e, &randomizers.e2));

    Ok(Responses { s_v, s_mr, s_i, s_e1, s_e2, s_mz })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EC_SIZE, G1};
    use ark_ec::AffineRepr;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn attrs(n: usize) -> UserAttributes {
        use crate::attributes::Attribute;
        let values = (0..n)
            .map(|i| {
                let mut v = [0u8; EC_SIZE];
                v[0] = i as u8 + 1;
                Attribute::new(v)
            })
            .collect();
        UserAttributes::new(values, crate::USER_MAX_NUM_ATTRIBUTES).unwrap()
    }

    #[test]
    fn s_mz_present_only_for_undisclosed_indices() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut attributes = attrs(4);
        attributes.select_disclosure(2).unwrap();

        let randomness = RandomnessBundle::sample(&mut rng, attributes.undisclosed_indices()).unwrap();
        let ra_sig = RevocationAuthoritySignature { mr: Fr::from(9u64) };
        let randomizers = SelectedRandomizers {
            e1: Fr::from(3u64),
            e2: Fr::from(4u64),
            sigma_e1: G1::generator(),
            sigma_e2: G1::generator(),
        };
        let i = Fr::from(11u64);
        let e = Fr::from(2u64);

        let responses =
            compute_responses(&attributes, &ra_sig, &randomizers, &i, &e, &randomness).unwrap();

        assert_eq!(responses.s_mz.len(), 2);
        assert!(responses.s_mz.contains_key(&0));
        assert!(responses.s_mz.contains_key(&1));
    }

    #[test]
    fn s_mr_uses_subtraction_convention() {
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        let attributes = attrs(1);
        let randomness = RandomnessBundle::sample(&mut rng, std::iter::empty()).unwrap();
        let ra_sig = RevocationAuthoritySignature { mr: Fr::from(5u64) };
        let randomizers = SelectedRandomizers {
            e1: Fr::from(1u64),
            e2: Fr::from(1u64),
            sigma_e1: G1::generator(),
            sigma_e2: G1::generator(),
        };
        let i = Fr::from(7u64);
        let e = Fr::from(3u64);

        let responses =
            compute_responses(&attributes, &ra_sig, &randomizers, &i, &e, &randomness).unwrap();

        let expected = fr_sub(&randomness.rho_mr, &fr_mul(&e, &ra_sig.mr));
        assert_eq!(responses.s_mr, expected);
    }
}
