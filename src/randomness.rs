//! Commitment-randomness bundle.
//!
//! Samples and holds the commitment randomizers `rho`, `rho_v`, `rho_i`,
//! `rho_mr`, `rho_e1`, `rho_e2`, and `rho_mz[j]` for each undisclosed
//! attribute slot `j`. Every sample is independently and uniformly drawn
//! from `Fr` and re-validated before use, with a bounded resample budget so
//! a misbehaving CSPRNG cannot spin forever (`RandomnessFailed`).

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use rand::{CryptoRng, RngCore};

use crate::algebra::{fr_from_csprng, fr_is_valid};
use crate::errors::ProofErrorCause;
use crate::Fr;

/// Bounded number of resample attempts per scalar before giving up with
/// [`ProofErrorCause::RandomnessFailed`]. `fr_from_csprng` cannot actually
/// produce a non-canonical value with this backend (see
/// [`crate::algebra::fr_from_csprng`]), so this budget is never exhausted in
/// practice; it exists so the failure mode is explicit rather than an
/// infinite loop if that backend guarantee is ever weakened.
const RESAMPLE_BUDGET: usize = 8;

fn sample_valid<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Fr, ProofErrorCause> {
    for _ in 0..RESAMPLE_BUDGET {
        let candidate = fr_from_csprng(rng);
        if fr_is_valid(&candidate) {
            return Ok(candidate);
        }
    }
    Err(ProofErrorCause::RandomnessFailed)
}

/// The commitment-randomness bundle for one proof computation.
#[derive(Clone, Debug)]
pub struct RandomnessBundle {
    /// `rho` — blinds the randomized issuer signature.
    pub rho: Fr,
    /// `rho_v` — blinds `t_verify`/`t_sig1`/`t_sig2`.
    pub rho_v: Fr,
    /// `rho_i` — blinds `t_revoke`/`t_sig`.
    pub rho_i: Fr,
    /// `rho_mr` — blinds `t_verify`/`t_revoke`.
    pub rho_mr: Fr,
    /// `rho_e1` — blinds `t_sig`/`t_sig1`.
    pub rho_e1: Fr,
    /// `rho_e2` — blinds `t_sig`/`t_sig2`.
    pub rho_e2: Fr,
    /// `rho_mz[j]`, one per undisclosed attribute index `j`.
    pub rho_mz: BTreeMap<usize, Fr>,
}

impl RandomnessBundle {
    /// Sample a fresh randomness bundle for the given undisclosed attribute
    /// indices.
    pub fn sample<R: RngCore + CryptoRng>(
        rng: &mut R,
        undisclosed_indices: impl Iterator<Item = usize>,
    ) -> Result<Self, ProofErrorCause> {
        let rho = sample_valid(rng)?;
        let rho_v = sample_valid(rng)?;
        let rho_i = sample_valid(rng)?;
        let rho_mr = sample_valid(rng)?;
        let rho_e1 = sample_valid(rng)?;
        let rho_e2 = sample_valid(rng)?;

        let mut rho_mz = BTreeMap::new();
        for j in undisclosed_indices {
            rho_mz.insert(j, sample_valid(rng)?);
        }

        Ok(RandomnessBundle { rho, rho_v, rho_i, rho_mr, rho_e1, rho_e2, rho_mz })
    }
}
