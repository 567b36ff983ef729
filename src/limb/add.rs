//! Limb addition.

use super::{Limb, WideWord, Word};

impl Limb {
    /// Computes `self + rhs + carry`, returning the result along with the
    /// new carry (0, 1, or 2).
    #[inline(always)]
    #[must_use]
    pub const fn carrying_add(self, rhs: Limb, carry: Limb) -> (Limb, Limb) {
        let a = self.0 as WideWord;
        let b = rhs.0 as WideWord;
        let carry = carry.0 as WideWord;
        let ret = a + b + carry;
        (Limb(ret as Word), Limb((ret >> Self::BITS) as Word))
    }

    /// Computes `self + rhs`, returning the result along with the carry
    /// (0 or 1).
    #[inline(always)]
    #[must_use]
    pub const fn overflowing_add(self, rhs: Limb) -> (Limb, Limb) {
        let (res, carry) = self.0.overflowing_add(rhs.0);
        (Limb(res), Limb(carry as Word))
    }

    /// Perform wrapping addition, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_add(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_add(rhs.0))
    }
}
