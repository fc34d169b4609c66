//! Crate root: public surface, core aliases, and protocol-wide invariants
//!
//! This crate implements the **user (prover) side** of an anonymous
//! attribute-based credential protocol with revocation, in the style of the
//! Camenisch–Lysyanskaya family of constructions with a pairing-based
//! signature-of-knowledge. The sole output of the public surface is a single
//! operation, [`proof::compute_proof`], which fuses commitment-randomness
//! generation, group/field arithmetic, a Fiat–Shamir transform, and response
//! computation into one non-interactive zero-knowledge proof.
//!
//! ## Invariants
//!
//! - **Field & curve.** The scalar field is `ark_bn254::Fr` (`Fr` in this
//!   crate); the group is `ark_bn254::G1Affine` (`G1`). All arithmetic is
//!   provided by Arkworks; we **forbid unsafe** throughout the crate.
//! - **Canonicity.** Every emitted `Fr` is canonical and every emitted `G1`
//!   is on-curve and subgroup-valid (see [`algebra`]). No partial proof is
//!   ever returned: any invalid intermediate is a fatal [`errors::ProofError`].
//! - **Disclosure.** Attributes are revealed "last-D": the final `D` of `N`
//!   attribute slots are disclosed, the rest stay hidden (see [`attributes`]).
//! - **Fiat–Shamir.** The challenge is a SHA-1 hash of a fixed transcript
//!   order, zero-padded into the low-order bytes of an `Fr` (see [`hash`] and
//!   [`transcript`]). This convention is inherited from a smart-card
//!   interoperability requirement and is normative: changing it breaks
//!   cross-party verification.
//!
//! This crate performs no I/O, no logging, and holds no process-wide state:
//! a single proof computation is a bounded, single-threaded, straight-line
//! algorithm whose cost is `O(N)` group operations in the number of
//! attributes.

#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms)]

/// Field/group algebra facade over the pairing-friendly curve.
pub mod algebra;
/// Hash-to-scalar convention (SHA-1, zero-padded into `Fr`).
pub mod hash;
/// User attributes and the last-D disclosure selector.
pub mod attributes;
/// System, revocation-authority, and issuer parameter/signature data model.
pub mod params;
/// Commitment-randomness bundle (ρ, ρ_v, ρ_i, ρ_mr, ρ_e1, ρ_e2, ρ_mz[j]).
pub mod randomness;
/// Randomized credential (pseudonym, randomized signature triple).
pub mod credential;
/// Schnorr-style commitments (t-values).
pub mod commitment;
/// Fiat–Shamir transcript and challenge derivation.
pub mod transcript;
/// Schnorr-style responses (s-values).
pub mod response;
/// The proof orchestrator wiring the above into one operation.
pub mod proof;
/// The crate's single public error type and cause taxonomy.
pub mod errors;

/// Scalar field used across the crate (BN254).
pub type Fr = ark_bn254::Fr;

/// Group element used across the crate (first pairing group, BN254).
pub type G1 = ark_bn254::G1Affine;

/// Width, in bytes, of a canonical attribute value and of a canonical `Fr`
/// encoding used by the hash-to-scalar convention.
pub const EC_SIZE: usize = 32;

/// Length, in bytes, of a SHA-1 digest.
pub const SHA_DIGEST_LENGTH: usize = 20;

/// Number of zero bytes used to pad a SHA-1 digest up to [`EC_SIZE`],
/// placed at the **high-order** end of the buffer (i.e. the digest occupies
/// the low-order `SHA_DIGEST_LENGTH` bytes of the little-endian buffer).
pub const SHA_DIGEST_PADDING: usize = EC_SIZE - SHA_DIGEST_LENGTH;

/// Upper bound on the number of attributes a user credential may carry.
pub const USER_MAX_NUM_ATTRIBUTES: usize = 16;

pub use errors::{ProofError, ProofErrorCause};
pub use proof::compute_proof;
