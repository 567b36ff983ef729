//! Barrett modular reduction.

use crate::bigint::div::div_rem_magnitude;
use crate::{BigInt, Limb};
use alloc::vec;

/// Barrett reduction parameters: `mu = floor(b^(2k) / n)` where `k` is the
/// limb count of the modulus and `b` the limb base.
///
/// Division-free reduction for inputs below `b^(2k)`, i.e. any product of
/// two reduced values.
pub(crate) struct BarrettParams {
    modulus: BigInt,
    mu: BigInt,
    k: usize,
}

/// Drop the `n` least significant limbs: `floor(x / b^n)`.
fn shr_limbs(x: &BigInt, n: usize) -> BigInt {
    if n >= x.nlimbs() {
        return BigInt::zero();
    }
    BigInt::from_magnitude(false, x.as_limbs()[n..].to_vec())
}

/// Keep the `n` least significant limbs: `x mod b^n`.
fn rem_limbs(x: &BigInt, n: usize) -> BigInt {
    let len = x.nlimbs().min(n);
    BigInt::from_magnitude(false, x.as_limbs()[..len].to_vec())
}

impl BarrettParams {
    pub(crate) fn new(modulus: &BigInt) -> Self {
        debug_assert!(!modulus.is_zero() && !modulus.is_negative());
        let k = modulus.nlimbs();

        // b^(2k)
        let mut limbs = vec![Limb::ZERO; 2 * k];
        limbs.push(Limb::ONE);
        let radix_2k = BigInt::from_magnitude(false, limbs);

        let (mu, _) = radix_2k.div_rem(modulus);

        Self {
            modulus: modulus.clone(),
            mu,
            k,
        }
    }

    /// Computes `x mod n` for non-negative `x < b^(2k)`.
    pub(crate) fn reduce(&self, x: &BigInt) -> BigInt {
        debug_assert!(!x.is_negative());
        debug_assert!(x.nlimbs() <= 2 * self.k);

        let q1 = shr_limbs(x, self.k - 1);
        let q3 = shr_limbs(&q1.mul(&self.mu), self.k + 1);

        let mut r1 = rem_limbs(x, self.k + 1);
        let r2 = rem_limbs(&q3.mul(&self.modulus), self.k + 1);

        // borrow b^(k+1) when the truncated difference would go negative
        if r1 < r2 {
            let mut limbs = vec![Limb::ZERO; self.k + 1];
            limbs.push(Limb::ONE);
            r1 = r1.add(&BigInt::from_magnitude(false, limbs));
        }

        let mut r = r1.sub(&r2);
        while r >= self.modulus {
            r = r.sub(&self.modulus);
        }
        r
    }

    /// Initial conversion: a full reduction by division, valid for inputs
    /// of any size.
    pub(crate) fn convert_in(&self, x: &BigInt) -> BigInt {
        debug_assert!(!x.is_negative());
        let (_, r) = div_rem_magnitude(x.as_limbs(), self.modulus.as_limbs());
        BigInt::from_magnitude(false, r)
    }
}

#[cfg(test)]
mod tests {
    use super::BarrettParams;
    use crate::BigInt;

    #[test]
    fn reduce_matches_division() {
        let n = BigInt::from_str_radix("fffffffb", 16);
        let params = BarrettParams::new(&n);

        let samples = [
            BigInt::zero(),
            BigInt::one(),
            BigInt::from(12345u32),
            n.sub(&BigInt::one()),
            n.clone(),
            n.add(&BigInt::one()),
            n.square().sub(&BigInt::one()),
        ];

        for x in &samples {
            assert_eq!(params.reduce(x), x.rem(&n), "x = {x}");
        }
    }

    #[test]
    fn reduce_multi_limb_modulus() {
        let n = BigInt::from_str_radix("100000000000000000000000000000000000000000061", 16);
        let params = BarrettParams::new(&n);
        let x = n.sub(&BigInt::from(5u8)).square();
        assert_eq!(params.reduce(&x), x.rem(&n));
    }

    #[test]
    fn convert_in_oversized_input() {
        let n = BigInt::from(1000003u32);
        let params = BarrettParams::new(&n);
        let x = BigInt::from_str_radix(
            "123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef0",
            16,
        );
        assert_eq!(params.convert_in(&x), x.rem(&n));
    }
}
