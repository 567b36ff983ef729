//! Classic modular reduction by long division.

use crate::bigint::div::div_rem_magnitude;
use crate::BigInt;

/// Reduction by division: no precomputation beyond retaining the modulus.
pub(crate) struct ClassicParams {
    modulus: BigInt,
}

impl ClassicParams {
    pub(crate) fn new(modulus: &BigInt) -> Self {
        debug_assert!(!modulus.is_zero() && !modulus.is_negative());
        Self {
            modulus: modulus.clone(),
        }
    }

    /// Computes `x mod n` for non-negative `x`.
    pub(crate) fn reduce(&self, x: &BigInt) -> BigInt {
        debug_assert!(!x.is_negative());
        let (_, r) = div_rem_magnitude(x.as_limbs(), self.modulus.as_limbs());
        BigInt::from_magnitude(false, r)
    }
}
