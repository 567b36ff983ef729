//! Limb subtraction.

use super::{Limb, Word};

impl Limb {
    /// Computes `self - (rhs + borrow)`, returning the result along with the
    /// new borrow.
    ///
    /// The borrow is all-ones when a borrow occurred and zero otherwise, so
    /// it can be chained directly through multi-limb subtractions.
    #[inline(always)]
    #[must_use]
    pub const fn borrowing_sub(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (ret, b2) = self.0.overflowing_sub(borrow.0 >> (Self::BITS - 1));
        let (ret, b1) = ret.overflowing_sub(rhs.0);
        (Limb(ret), Limb(Word::MIN.wrapping_sub((b1 | b2) as Word)))
    }

    /// Computes `self - rhs`, returning the result along with the borrow
    /// (0 or 1).
    #[inline(always)]
    #[must_use]
    pub const fn overflowing_sub(self, rhs: Limb) -> (Limb, Limb) {
        let (res, borrow) = self.0.overflowing_sub(rhs.0);
        (Limb(res), Limb(borrow as Word))
    }

    /// Perform wrapping subtraction, discarding underflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_sub(rhs.0))
    }
}
