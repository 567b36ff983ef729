//! [`BigInt`] multiplication operations.

use super::BigInt;
use crate::Limb;
use alloc::{vec, vec::Vec};
use core::ops::{Mul, MulAssign};

/// Schoolbook multiplication of two magnitudes.
///
/// The product has `lhs.len() + rhs.len()` limbs before normalization.
pub(crate) fn mul_magnitudes(lhs: &[Limb], rhs: &[Limb]) -> Vec<Limb> {
    let mut limbs = vec![Limb::ZERO; lhs.len() + rhs.len()];

    for (i, &b) in rhs.iter().enumerate() {
        let mut carry = Limb::ZERO;

        for (j, &a) in lhs.iter().enumerate() {
            let (sum, c) = limbs[i + j].carrying_mul_add(a, b, carry);
            limbs[i + j] = sum;
            carry = c;
        }

        limbs[i + lhs.len()] = carry;
    }

    limbs
}

/// Square a magnitude, skipping the duplicate half of the cross products.
///
/// Accumulates `a[i]·a[j]` for `j > i` once, doubles the accumulator with a
/// one-bit left shift, then adds the `a[i]²` diagonal.
pub(crate) fn square_magnitude(a: &[Limb]) -> Vec<Limb> {
    let mut limbs = vec![Limb::ZERO; a.len() * 2];

    for i in 0..a.len() {
        let mut carry = Limb::ZERO;

        for j in (i + 1)..a.len() {
            let (sum, c) = limbs[i + j].carrying_mul_add(a[i], a[j], carry);
            limbs[i + j] = sum;
            carry = c;
        }

        limbs[i + a.len()] = carry;
    }

    // double the cross products; the shifted-out bit of the top limb is
    // always zero because the doubled sum is bounded by the full square
    let mut carry = Limb::ZERO;
    for limb in limbs.iter_mut() {
        let new_carry = Limb(limb.0 >> (Limb::BITS - 1));
        *limb = Limb((limb.0 << 1) | carry.0);
        carry = new_carry;
    }
    debug_assert!(carry.is_zero());

    // add the diagonal
    let mut carry = Limb::ZERO;
    for (i, &ai) in a.iter().enumerate() {
        let (sum, c) = limbs[2 * i].carrying_mul_add(ai, ai, carry);
        limbs[2 * i] = sum;
        let (sum, c) = limbs[2 * i + 1].carrying_add(c, Limb::ZERO);
        limbs[2 * i + 1] = sum;
        carry = c;
    }
    debug_assert!(carry.is_zero());

    limbs
}

impl BigInt {
    /// Compute `self * rhs`.
    ///
    /// Dispatches to [`BigInt::square`] when the operands are equal.
    pub fn mul(&self, rhs: &Self) -> Self {
        let limbs = if core::ptr::eq(self, rhs) || self == rhs {
            square_magnitude(&self.limbs)
        } else {
            mul_magnitudes(&self.limbs, &rhs.limbs)
        };

        Self::from_magnitude(self.negative != rhs.negative, limbs)
    }

    /// Compute `self * self`.
    pub fn square(&self) -> Self {
        Self::from_magnitude(false, square_magnitude(&self.limbs))
    }
}

impl Mul<BigInt> for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        BigInt::mul(&self, &rhs)
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::mul(&self, rhs)
    }
}

impl Mul<BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        BigInt::mul(self, &rhs)
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::mul(self, rhs)
    }
}

impl MulAssign<BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: BigInt) {
        *self = BigInt::mul(self, &rhs);
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = BigInt::mul(self, rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::BigInt;

    #[test]
    fn mul_zero_and_one() {
        assert!(BigInt::zero().mul(&BigInt::zero()).is_zero());
        assert!(BigInt::zero().mul(&BigInt::one()).is_zero());
        assert!(BigInt::one().mul(&BigInt::zero()).is_zero());
        assert_eq!(BigInt::one().mul(&BigInt::one()), BigInt::one());
    }

    #[test]
    fn mul_primes() {
        let primes: &[u32] = &[3, 5, 17, 257, 65537];

        for &a_int in primes {
            for &b_int in primes {
                let actual = BigInt::from(a_int).mul(&BigInt::from(b_int));
                let expected = BigInt::from(a_int as u64 * b_int as u64);
                assert_eq!(actual, expected);
            }
        }
    }

    #[test]
    fn mul_sign_rules() {
        let a = BigInt::from(-7i8);
        let b = BigInt::from(6u8);
        assert_eq!(a.mul(&b), BigInt::from(-42i8));
        assert_eq!(b.mul(&a), BigInt::from(-42i8));
        assert_eq!(a.mul(&a), BigInt::from(49u8));
    }

    #[test]
    fn mul_equal_operands_squares() {
        let a = BigInt::from(u64::MAX);
        let b = BigInt::from(u64::MAX);
        assert_eq!(a.mul(&b), a.square());
        assert_eq!(
            a.square(),
            BigInt::from(u64::MAX as u128 * u64::MAX as u128)
        );
    }

    #[test]
    fn mul_multi_limb() {
        let a = BigInt::from(u128::MAX);
        let product = a.mul(&a);
        // (2^128 - 1)^2 = 2^256 - 2^129 + 1
        let expected = BigInt::from_str_radix(
            "fffffffffffffffffffffffffffffffe00000000000000000000000000000001",
            16,
        );
        assert_eq!(product, expected);
    }
}
