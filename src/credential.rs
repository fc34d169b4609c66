//! Randomized credential.
//!
//! Derives the shared scalar `i = alpha_1*e1 + alpha_2*e2`, the pseudonym
//! `C = (i - mr + H(epoch))^{-1} * G1`, and the randomized signature triple
//! `(sigma_hat, sigma_hat_e1, sigma_hat_e2)` together with the auxiliary
//! group elements `(sigma_{-e1}, sigma_{-e2})`. Every output is normalized
//! and subgroup-validated before it is returned: no silent success on an
//! invalid intermediate.

#![forbid(unsafe_code)]

use crate::algebra::{fr_add, fr_div, fr_is_valid, fr_mul, fr_neg, fr_sub, g1_add, g1_is_valid, g1_mul, g1_normalize};
use crate::errors::ProofErrorCause;
use crate::params::{IssuerSignature, RevocationAuthorityParameters, RevocationAuthoritySignature, SystemParameters};
use crate::randomness::RandomnessBundle;
use crate::{Fr, G1};

/// The randomizer pair selected by the verifier's indices `I`, `II`: the
/// two field scalars and their bound group elements.
#[derive(Clone, Copy, Debug)]
pub struct SelectedRandomizers {
    /// `e1 = randomizers[I]`.
    pub e1: Fr,
    /// `e2 = randomizers[II]`.
    pub e2: Fr,
    /// `sigma_e1 = randomizers_sigma[I]`.
    pub sigma_e1: G1,
    /// `sigma_e2 = randomizers_sigma[II]`.
    pub sigma_e2: G1,
}

/// Select and validate the randomizer pair at indices `i`, `ii`.
pub fn select_randomizers(
    ra: &RevocationAuthorityParameters,
    i: usize,
    ii: usize,
) -> Result<SelectedRandomizers, ProofErrorCause> {
    let len = ra.num_randomizers();
    if i >= len {
        return Err(ProofErrorCause::RandomizerIndexOutOfRange { index: i, len });
    }
    if ii >= len {
        return Err(ProofErrorCause::RandomizerIndexOutOfRange { index: ii, len });
    }
    Ok(SelectedRandomizers {
        e1: ra.randomizers[i],
        e2: ra.randomizers[ii],
        sigma_e1: ra.randomizers_sigma[i],
        sigma_e2: ra.randomizers_sigma[ii],
    })
}

/// The randomized credential: the pseudonym and the re-blinded issuer
/// signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Credential {
    /// The per-epoch, per-identifier pseudonym `C`.
    pub pseudonym: G1,
    /// The randomized issuer signature root, `sigma_hat = rho * sigma`.
    pub sigma_hat: G1,
    /// `sigma_hat_e1 = rho * sigma_e1`.
    pub sigma_hat_e1: G1,
    /// `sigma_hat_e2 = rho * sigma_e2`.
    pub sigma_hat_e2: G1,
    /// `sigma_{-e1} = (-e1)*sigma_hat_e1 + rho*G1`.
    pub sigma_minus_e1: G1,
    /// `sigma_{-e2} = (-e2)*sigma_hat_e2 + rho*G1`.
    pub sigma_minus_e2: G1,
}

/// The shared scalar `i` together with the pseudonym `C` it determines.
#[derive(Clone, Copy, Debug)]
pub struct Pseudonym {
    /// `i = alpha_1*e1 + alpha_2*e2`.
    pub i: Fr,
    /// `C = (i - mr + H(epoch))^{-1} * G1`.
    pub c: G1,
}

/// Compute `i` and the pseudonym `C`.
///
/// Fails with [`ProofErrorCause::AlgebraInvalid`] if `i` is not a valid
/// scalar, or if the denominator `i - mr + H(epoch)` is zero.
pub fn compute_pseudonym(
    sys: &SystemParameters,
    ra: &RevocationAuthorityParameters,
    ra_sig: &RevocationAuthoritySignature,
    randomizers: &SelectedRandomizers,
    hash_epoch: &Fr,
) -> Result<Pseudonym, ProofErrorCause> {
    let i = fr_add(&fr_mul(&ra.alphas[0], &randomizers.e1), &fr_mul(&ra.alphas[1], &randomizers.e2));
    if !fr_is_valid(&i) {
        return Err(ProofErrorCause::AlgebraInvalid("i = alpha_1*e1 + alpha_2*e2 is not canonical"));
    }

    let denominator = fr_add(&fr_sub(&i, &ra_sig.mr), hash_epoch);
    let inv = fr_div(&Fr::from(1u64), &denominator)
        .map_err(|_| ProofErrorCause::AlgebraInvalid("i - mr + H(epoch) = 0"))?;

    let c = g1_normalize(&g1_mul(&sys.g1, &inv));
    if !g1_is_valid(&c) {
        return Err(ProofErrorCause::AlgebraInvalid("pseudonym C failed validity check"));
    }

    Ok(Pseudonym { i, c })
}

/// Compute the randomized credential.
///
/// Fails with [`ProofErrorCause::AlgebraInvalid`] if any output point fails
/// its validity predicate.
pub fn compute_credential(
    sys: &SystemParameters,
    ie_sig: &IssuerSignature,
    randomizers: &SelectedRandomizers,
    pseudonym: &Pseudonym,
    randomness: &RandomnessBundle,
) -> Result<Credential, ProofErrorCause> {
    let sigma_hat = g1_normalize(&g1_mul(&ie_sig.sigma, &randomness.rho));
    let sigma_hat_e1 = g1_normalize(&g1_mul(&randomizers.sigma_e1, &randomness.rho));
    let sigma_hat_e2 = g1_normalize(&g1_mul(&randomizers.sigma_e2, &randomness.rho));

    for (label, point) in [("sigma_hat", &sigma_hat), ("sigma_hat_e1", &sigma_hat_e1), ("sigma_hat_e2", &sigma_hat_e2)] {
        if !g1_is_valid(point) {
            return invalid(label);
        }
    }

    let rho_g1 = g1_mul(&sys.g1, &randomness.rho);

    let sigma_minus_e1 = g1_normalize(&g1_add(&g1_mul(&sigma_hat_e1, &fr_neg(&randomizers.e1)), &rho_g1));
    if !g1_is_valid(&sigma_minus_e1) {
        return invalid("sigma_minus_e1");
    }

    let sigma_minus_e2 = g1_normalize(&g1_add(&g1_mul(&sigma_hat_e2, &fr_neg(&randomizers.e2)), &rho_g1));
    if !g1_is_valid(&sigma_minus_e2) {
        return invalid("sigma_minus_e2");
    }

    Ok(Credential {
        pseudonym: pseudonym.c,
        sigma_hat,
        sigma_hat_e1,
        sigma_hat_e2,
        sigma_minus_e1,
        sigma_minus_e2,
    })
}

fn invalid<T>(label: &'static str) -> Result<T, ProofErrorCause> {
    Err(ProofErrorCause::AlgebraInvalid(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{fr_from_csprng, g1_mul as mul};
    use ark_ec::AffineRepr;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn toy_system(rng: &mut ChaCha20Rng) -> (SystemParameters, RevocationAuthorityParameters, RevocationAuthoritySignature, IssuerSignature) {
        let g1 = G1::generator();
        let sys = SystemParameters { g1 };

        let alpha1 = fr_from_csprng(rng);
        let alpha2 = fr_from_csprng(rng);
        let e: Vec<Fr> = (0..4).map(|_| fr_from_csprng(rng)).collect();
        let ra = RevocationAuthorityParameters {
            alphas: [alpha1, alpha2],
            alphas_mul: [mul(&g1, &alpha1), mul(&g1, &alpha2)],
            randomizers_sigma: e.iter().map(|ek| mul(&g1, ek)).collect(),
            randomizers: e,
        };

        let mr = fr_from_csprng(rng);
        let ra_sig = RevocationAuthoritySignature { mr };

        let sigma = mul(&g1, &fr_from_csprng(rng));
        let ie_sig = IssuerSignature {
            sigma,
            revocation_sigma: mul(&sigma, &fr_from_csprng(rng)),
            attribute_sigmas: (0..4).map(|_| mul(&sigma, &fr_from_csprng(rng))).collect(),
        };

        (sys, ra, ra_sig, ie_sig)
    }

    #[test]
    fn rho_one_leaves_signature_unblinded() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let (sys, ra, ra_sig, ie_sig) = toy_system(&mut rng);
        let randomizers = select_randomizers(&ra, 0, 1).unwrap();

        let hash_epoch = fr_from_csprng(&mut rng);
        let pseudonym = compute_pseudonym(&sys, &ra, &ra_sig, &randomizers, &hash_epoch).unwrap();

        let mut randomness = RandomnessBundle::sample(&mut rng, std::iter::empty()).unwrap();
        randomness.rho = Fr::from(1u64);

        let credential = compute_credential(&sys, &ie_sig, &randomizers, &pseudonym, &randomness).unwrap();

        assert_eq!(credential.sigma_hat, ie_sig.sigma);
        assert_eq!(credential.sigma_hat_e1, randomizers.sigma_e1);
        assert_eq!(credential.sigma_hat_e2, randomizers.sigma_e2);

        // sigma_{-e1} = G1 - e1*sigma_e1 when rho = 1.
        let expected = g1_add(&sys.g1, &mul(&randomizers.sigma_e1, &fr_neg(&randomizers.e1)));
        assert_eq!(credential.sigma_minus_e1, expected);
    }

    #[test]
    fn zero_denominator_is_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let (sys, ra, mut ra_sig, _) = toy_system(&mut rng);
        let randomizers = select_randomizers(&ra, 0, 1).unwrap();

        let i = fr_add(&fr_mul(&ra.alphas[0], &randomizers.e1), &fr_mul(&ra.alphas[1], &randomizers.e2));
        let hash_epoch = fr_from_csprng(&mut rng);
        // Force i - mr + H(epoch) = 0.
        ra_sig.mr = fr_add(&i, &hash_epoch);

        let err = compute_pseudonym(&sys, &ra, &ra_sig, &randomizers, &hash_epoch).unwrap_err();
        assert!(matches!(err, ProofErrorCause::AlgebraInvalid(_)));
    }

    #[test]
    fn out_of_range_index_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let (_, ra, _, _) = toy_system(&mut rng);
        assert!(matches!(
            select_randomizers(&ra, 0, 99),
            Err(ProofErrorCause::RandomizerIndexOutOfRange { index: 99, .. })
        ));
    }
}
