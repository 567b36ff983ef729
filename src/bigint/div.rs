//! [`BigInt`] division operations.

use super::{
    add::add_slice_assign,
    cmp::cmp_slice,
    mul::mul_magnitudes,
    shl::shl_magnitude,
    shr::shr_magnitude,
    sub::sub_slice_assign,
    BigInt,
};
use crate::Limb;
use alloc::{vec, vec::Vec};
use core::cmp::Ordering;

impl BigInt {
    /// Computes `self / rhs`, returning the quotient and remainder.
    ///
    /// The quotient's sign is the XOR of the operand signs. The remainder
    /// is the common residue: always in `[0, |rhs|)`. The pair satisfies
    /// `q * rhs + r == self` when `self >= 0`, and
    /// `q * rhs + (r - |rhs|) == self` when `self < 0` with `r > 0`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        assert!(!rhs.is_zero(), "attempt to divide by zero");

        let (q_mag, r_mag) = div_rem_magnitude(&self.limbs, &rhs.limbs);
        let quotient = Self::from_magnitude(self.negative != rhs.negative, q_mag);
        let mut remainder = Self::from_magnitude(false, r_mag);

        // a negative dividend with a non-zero pure remainder wraps around
        // to the common residue |rhs| - r
        if self.negative && !remainder.is_zero() {
            remainder = rhs.abs().sub(&remainder);
        }

        (quotient, remainder)
    }

    /// Computes `self mod rhs` as the common residue in `[0, |rhs|)`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    pub fn rem(&self, rhs: &Self) -> Self {
        self.div_rem(rhs).1
    }
}

/// Division of magnitudes, returning (possibly non-canonical) quotient and
/// remainder limb vectors.
///
/// This algorithm is from Knuth, TAOCP vol 2 section 4.3.1, algorithm D
/// (HAC 14.20), in base `2^Limb::BITS`.
pub(crate) fn div_rem_magnitude(lhs: &[Limb], rhs: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(!rhs.is_empty());

    // 0 / x = 0
    if lhs.is_empty() {
        return (Vec::new(), Vec::new());
    }

    // single-limb divisors take the word-division fast path
    if rhs.len() == 1 {
        let (q, r) = div_rem_digit(lhs, rhs[0]);
        let r_mag = if r.is_zero() { Vec::new() } else { vec![r] };
        return (q, r_mag);
    }

    match cmp_slice(lhs, rhs) {
        Ordering::Less => return (Vec::new(), lhs.to_vec()),
        Ordering::Equal => return (vec![Limb::ONE], Vec::new()),
        Ordering::Greater => (),
    }

    // D1: normalize so the highest bit of the divisor's top limb is set;
    // the main loop generates digit guesses from that limb, so it should
    // be the largest value we can efficiently divide by
    let shift = rhs[rhs.len() - 1].leading_zeros();
    let mut a = shl_magnitude(lhs, shift);
    let b = shl_magnitude(rhs, shift);
    let bn = b[b.len() - 1];

    let q_len = a.len() - b.len() + 1;
    let mut q = vec![Limb::ZERO; q_len];

    // The guess q0 for the digit at position j is the tail of the
    // dividend divided by the divisor's top limb. It can exceed the true
    // digit, but only by a small amount; the loop below corrects it by
    // iterated subtraction until q0 * b <= a[j..].
    for j in (0..q_len).rev() {
        // the product of digit j with the divisor's top limb is zero in
        // all positions below offset
        let offset = j + b.len() - 1;
        if offset >= a.len() {
            continue;
        }

        let (mut q0, _) = div_rem_digit(&a[offset..], bn);
        let mut prod = mul_magnitudes(&b, &q0);

        while cmp_slice(&prod, &a[j..]) == Ordering::Greater {
            sub_slice_assign(&mut q0, &[Limb::ONE]);
            sub_slice_assign(&mut prod, &b);
        }

        let carry = add_slice_assign(&mut q[j..], &q0);
        debug_assert!(carry.is_zero());
        sub_slice_assign(&mut a[j..], &prod);
    }

    debug_assert!(cmp_slice(&a, &b) == Ordering::Less);

    // D8: denormalize the remainder
    (q, shr_magnitude(&a, shift))
}

/// Division of a magnitude by a single limb, returning the (trimmed)
/// quotient and the remainder.
pub(crate) fn div_rem_digit(mag: &[Limb], rhs: Limb) -> (Vec<Limb>, Limb) {
    debug_assert!(!rhs.is_zero());

    let mut quotient = vec![Limb::ZERO; mag.len()];
    let mut rem = Limb::ZERO;

    for (i, &d) in mag.iter().enumerate().rev() {
        let (q, r) = Limb::div_wide(rem, d, rhs);
        quotient[i] = q;
        rem = r;
    }

    while quotient.last().map_or(false, |l| l.is_zero()) {
        quotient.pop();
    }

    (quotient, rem)
}
