//! [`BigInt`] subtraction operations.

use super::{add::add_magnitudes, cmp::cmp_slice, BigInt};
use crate::Limb;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ops::{Sub, SubAssign};

/// Subtract `rhs` from `lhs`, both given as limb slices.
///
/// `lhs` must have the larger or equal magnitude, so the final borrow is
/// always zero.
pub(crate) fn sub_magnitudes(lhs: &[Limb], rhs: &[Limb]) -> Vec<Limb> {
    debug_assert!(cmp_slice(lhs, rhs) != Ordering::Less);

    let mut limbs = Vec::with_capacity(lhs.len());
    let mut borrow = Limb::ZERO;

    for (i, &a) in lhs.iter().enumerate() {
        let b = rhs.get(i).copied().unwrap_or(Limb::ZERO);
        let (diff, b2) = a.borrowing_sub(b, borrow);
        limbs.push(diff);
        borrow = b2;
    }

    debug_assert!(borrow.is_zero());
    limbs
}

/// Subtract `rhs` from the limb window `lhs` in place.
///
/// The value in `lhs` must be at least as large as `rhs`, so the borrow
/// never propagates out of the window. `rhs` may be physically longer than
/// `lhs` as long as the excess limbs are zero; long division produces such
/// non-canonical operands.
pub(crate) fn sub_slice_assign(lhs: &mut [Limb], rhs: &[Limb]) {
    let len = lhs.len().min(rhs.len());
    let mut borrow = Limb::ZERO;

    for (i, &b) in rhs[..len].iter().enumerate() {
        let (diff, b2) = lhs[i].borrowing_sub(b, borrow);
        lhs[i] = diff;
        borrow = b2;
    }

    for limb in lhs.iter_mut().skip(len) {
        if borrow.is_zero() {
            break;
        }
        let (diff, b2) = limb.borrowing_sub(Limb::ZERO, borrow);
        *limb = diff;
        borrow = b2;
    }

    debug_assert!(borrow.is_zero());
    debug_assert!(rhs[len..].iter().all(Limb::is_zero));
}

impl BigInt {
    /// Compute `self - rhs`.
    pub fn sub(&self, rhs: &Self) -> Self {
        if self.negative != rhs.negative {
            return Self::from_magnitude(self.negative, add_magnitudes(&self.limbs, &rhs.limbs));
        }

        // same signs: compare magnitudes, swapping and negating when the
        // subtrahend is the larger
        match self.cmp_magnitude(rhs) {
            Ordering::Greater => {
                Self::from_magnitude(self.negative, sub_magnitudes(&self.limbs, &rhs.limbs))
            }
            Ordering::Less => {
                Self::from_magnitude(!self.negative, sub_magnitudes(&rhs.limbs, &self.limbs))
            }
            Ordering::Equal => Self::zero(),
        }
    }
}

impl Sub<BigInt> for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        BigInt::sub(&self, &rhs)
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        BigInt::sub(&self, rhs)
    }
}

impl Sub<BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        BigInt::sub(self, &rhs)
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        BigInt::sub(self, rhs)
    }
}

impl SubAssign<BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: BigInt) {
        *self = BigInt::sub(self, &rhs);
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = BigInt::sub(self, rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::BigInt;

    #[test]
    fn sub_basic() {
        let a = BigInt::from(10u8);
        let b = BigInt::from(20u8);
        assert_eq!(a.sub(&b), BigInt::from(-10i8));
        assert_eq!(b.sub(&a), BigInt::from(10u8));
    }

    #[test]
    fn sub_mixed_signs() {
        let a = BigInt::from(10u8);
        let b = BigInt::from(-20i8);
        assert_eq!(a.sub(&b), BigInt::from(30u8));
        assert_eq!(b.sub(&a), BigInt::from(-30i8));
    }

    #[test]
    fn sub_self_is_zero() {
        let a = BigInt::from(u128::MAX);
        assert_eq!(a.sub(&a), BigInt::zero());
    }

    #[test]
    fn sub_borrows_across_limbs() {
        let a = BigInt::from_str_radix("0x100000000000000000000000000000000", 16);
        assert_eq!(a.sub(&BigInt::one()), BigInt::from(u128::MAX));
    }

    #[test]
    fn sub_round_trip() {
        let a = BigInt::from(-123456789i64);
        let b = BigInt::from(987654321u32);
        assert_eq!(a.sub(&b).add(&b), a);
    }
}
