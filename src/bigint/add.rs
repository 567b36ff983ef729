//! [`BigInt`] addition operations.

use super::{sub::sub_magnitudes, BigInt};
use crate::Limb;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ops::{Add, AddAssign};

/// Add two magnitudes given as limb slices, returning the (possibly
/// non-canonical) sum.
pub(crate) fn add_magnitudes(lhs: &[Limb], rhs: &[Limb]) -> Vec<Limb> {
    let (longer, shorter) = if lhs.len() >= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };

    let mut limbs = Vec::with_capacity(longer.len() + 1);
    let mut carry = Limb::ZERO;

    for (i, &a) in longer.iter().enumerate() {
        let b = shorter.get(i).copied().unwrap_or(Limb::ZERO);
        let (sum, c) = a.carrying_add(b, carry);
        limbs.push(sum);
        carry = c;
    }

    if !carry.is_zero() {
        limbs.push(carry);
    }

    limbs
}

/// Add `rhs` into the limb window `lhs` in place, returning the carry out
/// of the window.
///
/// `lhs` must be at least as long as `rhs`.
pub(crate) fn add_slice_assign(lhs: &mut [Limb], rhs: &[Limb]) -> Limb {
    debug_assert!(lhs.len() >= rhs.len());
    let mut carry = Limb::ZERO;

    for (i, &b) in rhs.iter().enumerate() {
        let (sum, c) = lhs[i].carrying_add(b, carry);
        lhs[i] = sum;
        carry = c;
    }

    for limb in lhs.iter_mut().skip(rhs.len()) {
        if carry.is_zero() {
            break;
        }
        let (sum, c) = limb.overflowing_add(carry);
        *limb = sum;
        carry = c;
    }

    carry
}

impl BigInt {
    /// Compute `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Self {
        if self.negative == rhs.negative {
            return Self::from_magnitude(self.negative, add_magnitudes(&self.limbs, &rhs.limbs));
        }

        // mixed signs: subtract the smaller magnitude from the larger; the
        // result takes the sign of the operand with the larger magnitude
        match self.cmp_magnitude(rhs) {
            Ordering::Greater => {
                Self::from_magnitude(self.negative, sub_magnitudes(&self.limbs, &rhs.limbs))
            }
            Ordering::Less => {
                Self::from_magnitude(rhs.negative, sub_magnitudes(&rhs.limbs, &self.limbs))
            }
            Ordering::Equal => Self::zero(),
        }
    }
}

impl Add<BigInt> for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        BigInt::add(&self, &rhs)
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        BigInt::add(&self, rhs)
    }
}

impl Add<BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        BigInt::add(self, &rhs)
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        BigInt::add(self, rhs)
    }
}

impl AddAssign<BigInt> for BigInt {
    fn add_assign(&mut self, rhs: BigInt) {
        *self = BigInt::add(self, &rhs);
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = BigInt::add(self, rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::BigInt;

    #[test]
    fn add_same_sign() {
        let a = BigInt::from(10u8);
        let b = BigInt::from(20u8);
        assert_eq!(a.add(&b), BigInt::from(30u8));

        let a = BigInt::from(-10i8);
        let b = BigInt::from(-20i8);
        assert_eq!(a.add(&b), BigInt::from(-30i8));
    }

    #[test]
    fn add_mixed_signs() {
        let a = BigInt::from(10u8);
        let b = BigInt::from(-20i8);
        assert_eq!(a.add(&b), BigInt::from(-10i8));
        assert_eq!(b.add(&a), BigInt::from(-10i8));
    }

    #[test]
    fn add_equal_magnitudes_cancels() {
        let a = BigInt::from(42u8);
        let b = BigInt::from(-42i8);
        assert_eq!(a.add(&b), BigInt::zero());
    }

    #[test]
    fn add_carries_across_limbs() {
        let a = BigInt::from(u128::MAX);
        let sum = a.add(&BigInt::one());
        assert_eq!(sum, BigInt::from_str_radix("0x100000000000000000000000000000000", 16));
    }

    #[test]
    fn add_round_trip() {
        let a = BigInt::from(123456789u32);
        let b = BigInt::from(-987654321i64);
        assert_eq!(a.add(&b).sub(&b), a);
    }
}
