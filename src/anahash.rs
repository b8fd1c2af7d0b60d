use ibig::ops::DivRem;
use ibig::UBig;
use num_traits::{One, Zero};

use crate::types::*;

///Trait for objects that can be anahashed (string-like). Implementations assume the string is
///already normalized to a-z (see [`crate::normalize`]).
pub trait Anahashable {
    fn anahash(&self) -> AnaValue;
    fn histogram(&self) -> Histogram;
}

impl Anahashable for str {
    ///Compute the anahash (prime fingerprint) for a given normalized string
    fn anahash(&self) -> AnaValue {
        let mut hash: AnaValue = AnaValue::empty();
        for byte in self.bytes() {
            debug_assert!(byte.is_ascii_lowercase());
            let charvalue = AnaValue::character((byte - b'a') as usize);
            hash = hash.insert(&charvalue);
        }
        hash
    }

    ///Count the letter occurrences in a given normalized string
    fn histogram(&self) -> Histogram {
        let mut histogram: Histogram = [0; ALPHABET_SIZE];
        for byte in self.bytes() {
            debug_assert!(byte.is_ascii_lowercase());
            histogram[(byte - b'a') as usize] += 1;
        }
        histogram
    }
}

/// This trait can be applied to types
/// that can function as anahashes.
/// It can be implemented for integer types.
pub trait Anahash: One + Zero {
    fn character(index: usize) -> AnaValue;
    fn empty() -> AnaValue;
    fn is_empty(&self) -> bool;
    fn insert(&self, value: &AnaValue) -> AnaValue;
    fn delete(&self, value: &AnaValue) -> Option<AnaValue>;
    fn contains(&self, value: &AnaValue) -> bool;
}

impl Anahash for AnaValue {
    /// Computes the anagram value for the n'th letter of the alphabet
    fn character(index: usize) -> AnaValue {
        UBig::from(PRIMES[index])
    }

    /// Insert the characters represented by the anagram value, returning the result
    fn insert(&self, value: &AnaValue) -> AnaValue {
        if self == &AnaValue::zero() {
            value.clone()
        } else {
            self * value
        }
    }

    /// Delete the characters represented by the anagram value, returning the result
    /// Returns None if the anagram was not found
    fn delete(&self, value: &AnaValue) -> Option<AnaValue> {
        let (result, remainder) = self.div_rem(value);
        if remainder == AnaValue::zero() {
            Some(result)
        } else {
            None
        }
    }

    /// Tests if the anagram value contains the specified anagram value, i.e. whether the
    /// characters of `value` form a sub-multiset of our own characters. A value contains itself.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jumble::*;
    /// let ab = "ab".anahash();
    /// let abc = "abc".anahash();
    /// assert!(abc.contains(&ab));
    /// assert!(!ab.contains(&abc));
    /// ```
    fn contains(&self, value: &AnaValue) -> bool {
        if value > self {
            false
        } else {
            (self % value) == AnaValue::zero()
        }
    }

    /// The value of an empty anahash (the empty product)
    fn empty() -> AnaValue {
        AnaValue::one()
    }

    fn is_empty(&self) -> bool {
        self == &AnaValue::empty() || self == &AnaValue::zero()
    }
}
