//! Montgomery modular reduction.
//!
//! Algorithm 14.32 in Handbook of Applied Cryptography
//! <https://cacr.uwaterloo.ca/hac/about/chap14.pdf>.

use crate::bigint::div::div_rem_magnitude;
use crate::{BigInt, Limb, Word};
use alloc::vec;
use core::cmp::Ordering;

/// Montgomery reduction parameters for an odd modulus: the modulus itself
/// and `-(n[0]^-1) mod b`, the only per-limb datum the reduction needs.
pub(crate) struct MontyParams {
    modulus: BigInt,
    mod_neg_inv: Limb,
}

/// Invert an odd word modulo `2^Limb::BITS` by Hensel lifting.
///
/// `w` is its own inverse modulo 8, and each iteration doubles the number
/// of correct low bits, so six iterations cover any word width up to 192.
fn invert_mod_word(w: Word) -> Word {
    debug_assert!(w & 1 == 1);
    let mut inv = w;
    for _ in 0..6 {
        inv = inv.wrapping_mul((2 as Word).wrapping_sub(w.wrapping_mul(inv)));
    }
    inv
}

impl MontyParams {
    /// # Panics
    ///
    /// Panics if the modulus is not odd.
    pub(crate) fn new(modulus: &BigInt) -> Self {
        assert!(
            !modulus.is_negative() && modulus.is_odd(),
            "Montgomery reduction requires an odd modulus"
        );

        let mod_neg_inv = Limb(Word::MIN.wrapping_sub(invert_mod_word(modulus.as_limbs()[0].0)));

        Self {
            modulus: modulus.clone(),
            mod_neg_inv,
        }
    }

    /// Montgomery-reduce `x`: computes `x * b^-k mod n` for non-negative
    /// `x < n * b^k`, where `k` is the modulus limb count.
    ///
    /// Adds `u_i * n << i` for each of the low `k` limbs so they cancel,
    /// then drops them; one conditional final subtraction brings the result
    /// below the modulus.
    pub(crate) fn reduce(&self, x: &BigInt) -> BigInt {
        debug_assert!(!x.is_negative());
        let k = self.modulus.nlimbs();
        debug_assert!(x.nlimbs() <= 2 * k);

        let mut limbs = x.as_limbs().to_vec();
        limbs.resize(2 * k + 1, Limb::ZERO);

        for i in 0..k {
            let u = limbs[i].wrapping_mul(self.mod_neg_inv);
            let mut carry = Limb::ZERO;

            for (j, &m) in self.modulus.as_limbs().iter().enumerate() {
                let (sum, c) = limbs[i + j].carrying_mul_add(u, m, carry);
                limbs[i + j] = sum;
                carry = c;
            }

            let mut j = i + k;
            while !carry.is_zero() {
                let (sum, c) = limbs[j].overflowing_add(carry);
                limbs[j] = sum;
                carry = c;
                j += 1;
            }
        }

        // division by b^k is dropping the cancelled low limbs; the result
        // is below 2n, so a single subtraction finishes the reduction
        let ret = BigInt::from_magnitude(false, limbs[k..].to_vec());
        if ret.cmp_magnitude(&self.modulus) != Ordering::Less {
            ret.sub(&self.modulus)
        } else {
            ret
        }
    }

    /// Lift `x` into Montgomery form: `x * b^k mod n`, by prepending `k`
    /// zero limbs and taking the remainder by division.
    pub(crate) fn lift(&self, x: &BigInt) -> BigInt {
        debug_assert!(!x.is_negative());
        let k = self.modulus.nlimbs();

        let mut limbs = vec![Limb::ZERO; k];
        limbs.extend_from_slice(x.as_limbs());

        let (_, r) = div_rem_magnitude(&limbs, self.modulus.as_limbs());
        BigInt::from_magnitude(false, r)
    }
}
