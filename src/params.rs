//! Immutable parameter and signature data model.
//!
//! These structs describe the public context and per-user signatures the
//! proof orchestrator consumes. They carry no provisioning logic of their
//! own: constructing, issuing, and transporting them is out of scope for
//! this crate and is modeled here only as the data shape a caller
//! supplies.

#![forbid(unsafe_code)]

use crate::{Fr, G1};

/// System-wide parameters: the group generator shared by every prover and
/// verifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemParameters {
    /// The group generator `G1`.
    pub g1: G1,
}

/// Revocation-authority parameters: two field scalars and their
/// group images, plus the per-epoch randomizer tables the verifier selects
/// `I`/`II` into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevocationAuthorityParameters {
    /// `alphas[0..1]` — the two field scalars `(alpha_1, alpha_2)`.
    pub alphas: [Fr; 2],
    /// `alphas_mul[0..1]` — the two group elements `(h_1 = alpha_1*G1, h_2 =
    /// alpha_2*G1)`.
    pub alphas_mul: [G1; 2],
    /// `randomizers[k]` — the field scalars `e_k`, indexed by `I`/`II`.
    pub randomizers: Vec<Fr>,
    /// `randomizers_sigma[k]` — the group elements bound to each
    /// randomizer, indexed in parallel with `randomizers`.
    pub randomizers_sigma: Vec<G1>,
}

impl RevocationAuthorityParameters {
    /// Number of randomizers in the tables, `R`.
    pub fn num_randomizers(&self) -> usize {
        self.randomizers.len()
    }
}

/// The revocation authority's per-user signature: the user's revocation
/// handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevocationAuthoritySignature {
    /// The user's revocation handle, `mr`.
    pub mr: Fr,
}

/// The issuer's per-user signature over the user's attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuerSignature {
    /// The issuer's signature root, `sigma`.
    pub sigma: G1,
    /// The group element bound to the revocation handle, `sigma_{m_r}`.
    pub revocation_sigma: G1,
    /// One group element per attribute slot, `sigma_{x_j}`, indexed in
    /// parallel with the user's attributes.
    pub attribute_sigmas: Vec<G1>,
}
