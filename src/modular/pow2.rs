//! Modular reduction for power-of-two moduli.

use crate::BigInt;

/// Reduction modulo `2^e` by masking with `2^e - 1`.
pub(crate) struct Pow2Params {
    mask: BigInt,
}

impl Pow2Params {
    /// # Panics
    ///
    /// Panics if the modulus is not a power of two.
    pub(crate) fn new(modulus: &BigInt) -> Self {
        assert!(
            !modulus.is_negative() && modulus.is_power_of_two(),
            "mask reduction requires a power-of-two modulus"
        );
        Self {
            mask: modulus.sub(&BigInt::one()),
        }
    }

    /// Computes `x mod 2^e` for non-negative `x`.
    pub(crate) fn reduce(&self, x: &BigInt) -> BigInt {
        debug_assert!(!x.is_negative());
        x.and_magnitude(&self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::Pow2Params;
    use crate::BigInt;

    #[test]
    fn reduce() {
        let params = Pow2Params::new(&BigInt::from(32u8));
        assert_eq!(params.reduce(&BigInt::from(100u8)), BigInt::from(4u8));
        assert_eq!(params.reduce(&BigInt::from(31u8)), BigInt::from(31u8));
        assert_eq!(params.reduce(&BigInt::from(32u8)), BigInt::zero());
    }

    #[test]
    fn reduce_modulus_one() {
        let params = Pow2Params::new(&BigInt::one());
        assert_eq!(params.reduce(&BigInt::from(100u8)), BigInt::zero());
    }

    #[test]
    #[should_panic(expected = "power-of-two")]
    fn rejects_non_power_of_two() {
        let _ = Pow2Params::new(&BigInt::from(12u8));
    }
}
