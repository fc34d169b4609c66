//! User attributes and the last-D disclosure selector.
//!
//! Attributes are an ordered sequence of fixed-width byte values, each with
//! a mutable `disclosed` flag. Disclosure is strictly positional: given `N`
//! attributes and a requested disclosure count `D`, the selector marks the
//! suffix `[N-D, N)` as disclosed and leaves the prefix `[0, N-D)` hidden.
//! No reordering is performed.

#![forbid(unsafe_code)]

use crate::errors::ProofErrorCause;
use crate::EC_SIZE;

/// A single user attribute slot: a fixed-width value and whether the
/// verifier has been told to see it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute's canonical byte value.
    pub value: [u8; EC_SIZE],
    /// Whether this slot is disclosed to the verifier.
    pub disclosed: bool,
}

impl Attribute {
    /// Construct an undisclosed attribute from its raw value.
    pub fn new(value: [u8; EC_SIZE]) -> Self {
        Attribute { value, disclosed: false }
    }
}

/// A user's ordered attribute sequence, `N` in `[1, N_MAX]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserAttributes {
    attributes: Vec<Attribute>,
}

impl UserAttributes {
    /// Wrap an attribute sequence, validating `1 <= len <= max`.
    pub fn new(attributes: Vec<Attribute>, max: usize) -> Result<Self, ProofErrorCause> {
        let n = attributes.len();
        if n == 0 || n > max {
            return Err(ProofErrorCause::AttributeCountOutOfRange { n, max });
        }
        Ok(UserAttributes { attributes })
    }

    /// The number of attribute slots, `N`.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether there are no attribute slots. `N >= 1` is enforced by
    /// [`UserAttributes::new`], so this is always `false` for a validly
    /// constructed instance.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Borrow the attribute slots.
    pub fn as_slice(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Mark the last `d` slots disclosed and the rest hidden ("last-D",
    /// strictly positional, no reordering).
    ///
    /// Fails with [`ProofErrorCause::DisclosureCountOutOfRange`] if
    /// `d > N`.
    pub fn select_disclosure(&mut self, d: usize) -> Result<(), ProofErrorCause> {
        let n = self.attributes.len();
        if d > n {
            return Err(ProofErrorCause::DisclosureCountOutOfRange { d, n });
        }
        let cutover = n - d;
        for (i, attribute) in self.attributes.iter_mut().enumerate() {
            attribute.disclosed = i >= cutover;
        }
        Ok(())
    }

    /// Indices of the undisclosed slots, in ascending order.
    pub fn undisclosed_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.attributes
            .iter()
            .enumerate()
            .filter(|(_, a)| !a.disclosed)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(n: usize) -> UserAttributes {
        let values = (0..n)
            .map(|i| {
                let mut v = [0u8; EC_SIZE];
                v[0] = i as u8;
                Attribute::new(v)
            })
            .collect();
        UserAttributes::new(values, crate::USER_MAX_NUM_ATTRIBUTES).unwrap()
    }

    #[test]
    fn last_d_disclosed() {
        let mut a = attrs(4);
        a.select_disclosure(2).unwrap();
        let flags: Vec<bool> = a.as_slice().iter().map(|x| x.disclosed).collect();
        assert_eq!(flags, vec![false, false, true, true]);
        assert_eq!(a.undisclosed_indices().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn all_hidden_and_all_disclosed_both_succeed() {
        let mut a = attrs(1);
        a.select_disclosure(0).unwrap();
        assert!(!a.as_slice()[0].disclosed);

        let mut a = attrs(1);
        a.select_disclosure(1).unwrap();
        assert!(a.as_slice()[0].disclosed);
    }

    #[test]
    fn disclosure_count_over_n_rejected() {
        let mut a = attrs(4);
        assert!(matches!(
            a.select_disclosure(5),
            Err(ProofErrorCause::DisclosureCountOutOfRange { d: 5, n: 4 })
        ));
    }

    #[test]
    fn zero_or_over_max_attribute_count_rejected() {
        assert!(UserAttributes::new(Vec::new(), crate::USER_MAX_NUM_ATTRIBUTES).is_err());

        let too_many = (0..crate::USER_MAX_NUM_ATTRIBUTES + 1)
            .map(|_| Attribute::new([0u8; EC_SIZE]))
            .collect();
        assert!(UserAttributes::new(too_many, crate::USER_MAX_NUM_ATTRIBUTES).is_err());
    }
}
