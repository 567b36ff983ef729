//! [`BigInt`] left shift operations on the magnitude.

use super::BigInt;
use crate::Limb;
use alloc::{vec, vec::Vec};

/// Shift a magnitude left by `shift` bits.
///
/// Splits the shift into whole-limb moves and an in-word carry pass.
pub(crate) fn shl_magnitude(mag: &[Limb], shift: u32) -> Vec<Limb> {
    if mag.is_empty() {
        return Vec::new();
    }

    let limb_shift = (shift / Limb::BITS) as usize;
    let bit_shift = shift % Limb::BITS;
    let mut limbs = vec![Limb::ZERO; limb_shift];

    if bit_shift == 0 {
        limbs.extend_from_slice(mag);
        return limbs;
    }

    let mut carry = Limb::ZERO;
    for &limb in mag {
        limbs.push(Limb((limb.0 << bit_shift) | carry.0));
        carry = Limb(limb.0 >> (Limb::BITS - bit_shift));
    }

    if !carry.is_zero() {
        limbs.push(carry);
    }

    limbs
}

impl BigInt {
    /// Compute `self << shift` on the magnitude, preserving the sign.
    pub(crate) fn shl(&self, shift: u32) -> Self {
        Self::from_magnitude(self.negative, shl_magnitude(&self.limbs, shift))
    }
}
