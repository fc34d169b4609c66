//! The crate's single public error type and cause taxonomy.
//!
//! A single error kind is enough for the public contract of the proof
//! orchestrator: [`ProofError`], optionally carrying a [`ProofErrorCause`].
//! All causes are fatal to the current proof computation: no partial proof
//! is ever returned, and the core performs no logging, no I/O, and no
//! retries beyond the bounded CSPRNG resample in [`crate::randomness`].

#![forbid(unsafe_code)]

/// Top-level error returned by every fallible operation in this crate.
#[derive(Debug, thiserror::Error)]
#[error("proof computation failed: {cause}")]
pub struct ProofError {
    /// The specific cause, from the taxonomy in [`ProofErrorCause`].
    pub cause: ProofErrorCause,
}

impl ProofError {
    /// Wrap a [`ProofErrorCause`] into a [`ProofError`].
    pub fn new(cause: ProofErrorCause) -> Self {
        ProofError { cause }
    }
}

impl From<ProofErrorCause> for ProofError {
    fn from(cause: ProofErrorCause) -> Self {
        ProofError::new(cause)
    }
}

/// The taxonomy of causes a [`ProofError`] may carry.
#[derive(Debug, thiserror::Error)]
pub enum ProofErrorCause {
    /// The nonce was empty.
    #[error("nonce must not be empty")]
    EmptyNonce,
    /// The epoch was empty.
    #[error("epoch must not be empty")]
    EmptyEpoch,
    /// `num_attributes` was zero or exceeded the upper bound.
    #[error("num_attributes={n} must be in [1, {max}]")]
    AttributeCountOutOfRange {
        /// The number of attributes supplied.
        n: usize,
        /// The upper bound, [`crate::USER_MAX_NUM_ATTRIBUTES`].
        max: usize,
    },
    /// The requested disclosure count exceeded the attribute count.
    #[error("num_disclosed_attributes={d} exceeds num_attributes={n}")]
    DisclosureCountOutOfRange {
        /// The requested number of disclosed attributes.
        d: usize,
        /// The number of attributes supplied.
        n: usize,
    },
    /// `I` or `II` indexed outside the revocation authority's randomizer
    /// tables.
    #[error("randomizer index {index} out of range (table length {len})")]
    RandomizerIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the randomizer table it was checked against.
        len: usize,
    },
    /// An intermediate `Fr` or `G1` value failed its validity predicate, or
    /// the pseudonym denominator `i - mr + H(epoch)` was zero.
    #[error("algebraic invariant violated: {0}")]
    AlgebraInvalid(&'static str),
    /// The hash-to-scalar output was not a canonical field element.
    #[error("hash-to-scalar conversion produced a non-canonical value")]
    HashConversionFailed,
    /// The CSPRNG produced a non-canonical scalar and the retry budget was
    /// exhausted.
    #[error("randomness sampling exhausted its retry budget")]
    RandomnessFailed,
}
