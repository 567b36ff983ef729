//! Heap-allocated signed big integers.

mod add;
mod bits;
mod cmp;
pub(crate) mod div;
pub(crate) mod encoding;
mod from;
mod mul;
mod neg;
pub(crate) mod shl;
pub(crate) mod shr;
mod sub;

use crate::Limb;
use alloc::vec::Vec;
use core::fmt;

/// Arbitrary-precision signed integer.
///
/// The magnitude is stored as a vector of [`Limb`]s from least significant
/// to most significant, alongside a sign flag.
///
/// The representation is kept canonical: the most significant limb, when
/// present, is non-zero, and zero is the empty limb vector with a positive
/// sign. Every public operation returns a value in canonical form.
///
/// Values are immutable from the caller's perspective: arithmetic
/// operations allocate and return fresh results.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct BigInt {
    /// Sign flag; `false` for zero.
    pub(crate) negative: bool,

    /// Magnitude limbs, least significant first.
    pub(crate) limbs: Vec<Limb>,
}

impl BigInt {
    /// Get the value `0`.
    pub fn zero() -> Self {
        Self {
            negative: false,
            limbs: Vec::new(),
        }
    }

    /// Get the value `1`.
    pub fn one() -> Self {
        Self {
            negative: false,
            limbs: alloc::vec![Limb::ONE],
        }
    }

    /// Is this [`BigInt`] equal to zero?
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Is this [`BigInt`] equal to one?
    pub fn is_one(&self) -> bool {
        !self.negative && self.limbs.len() == 1 && self.limbs[0] == Limb::ONE
    }

    /// Is this [`BigInt`] strictly negative?
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Get the number of limbs in the magnitude.
    #[inline]
    pub fn nlimbs(&self) -> usize {
        self.limbs.len()
    }

    /// Borrow the magnitude limbs, least significant first.
    pub fn as_limbs(&self) -> &[Limb] {
        self.limbs.as_ref()
    }

    /// Get the absolute value.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            limbs: self.limbs.clone(),
        }
    }

    /// Construct a value from a sign and a (possibly non-canonical)
    /// magnitude, normalizing the result.
    pub(crate) fn from_magnitude(negative: bool, limbs: Vec<Limb>) -> Self {
        let mut ret = Self { negative, limbs };
        ret.normalize();
        ret
    }

    /// Remove trailing zero limbs and fix the sign of zero.
    ///
    /// The only helper permitted to observe a non-canonical magnitude.
    pub(crate) fn normalize(&mut self) {
        while let Some(&limb) = self.limbs.last() {
            if !limb.is_zero() {
                break;
            }
            self.limbs.pop();
        }

        if self.limbs.is_empty() {
            self.negative = false;
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({:#x})", self)
    }
}

impl num_traits::Zero for BigInt {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }
}

impl num_traits::One for BigInt {
    fn one() -> Self {
        Self::one()
    }

    fn is_one(&self) -> bool {
        self.is_one()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for BigInt {
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.limbs);
        self.negative = false;
    }
}
