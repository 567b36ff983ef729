//! [`BigInt`] negation.

use super::BigInt;
use core::ops::Neg;

impl BigInt {
    /// Compute `-self`.
    pub fn neg(&self) -> Self {
        Self::from_magnitude(!self.negative, self.limbs.clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::neg(&self)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::neg(self)
    }
}
