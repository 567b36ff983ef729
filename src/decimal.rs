//! Support for base-10 parsing and encoding.
//!
//! Decimal digits are consumed and emitted in word-sized groups: each group
//! of `LIMB_LOG10` digits is a chunk smaller than one limb, so parsing is a
//! single multiply-and-add per group and formatting is a single-limb
//! division per group.

use crate::bigint::{div::div_rem_digit, encoding::strip_sign, BigInt};
use crate::{Limb, Word};
use alloc::vec::Vec;
use core::fmt;

#[cfg(target_pointer_width = "64")]
const LIMB_LOG10: usize = 19;
#[cfg(not(target_pointer_width = "64"))]
const LIMB_LOG10: usize = 9;

const LIMB_MAX10: Limb = Limb(Word::pow(10, LIMB_LOG10 as u32));

/// Computes `mag = mag * m + a` in place.
fn mul_add_digit(mag: &mut Vec<Limb>, m: Limb, a: Limb) {
    let mut carry = a;

    for limb in mag.iter_mut() {
        let (lo, hi) = carry.carrying_mul_add(*limb, m, Limb::ZERO);
        *limb = lo;
        carry = hi;
    }

    if !carry.is_zero() {
        mag.push(carry);
    }
}

/// Parse a decimal literal: optional leading `-`, non-digit characters
/// skipped, no digits at all parsing as zero.
pub(crate) fn parse(src: &str) -> BigInt {
    let (negative, body) = strip_sign(src);
    let digits: Vec<u8> = body.bytes().filter(u8::is_ascii_digit).collect();

    let mut limbs = Vec::new();
    for group in digits.rchunks(LIMB_LOG10).rev() {
        let mut chunk: Word = 0;
        for &digit in group {
            chunk = chunk * 10 + (digit - b'0') as Word;
        }
        let scale = Limb(Word::pow(10, group.len() as u32));
        mul_add_digit(&mut limbs, scale, Limb(chunk));
    }

    BigInt::from_magnitude(negative, limbs)
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        // peel word-sized decimal groups off the magnitude, least
        // significant first
        let mut groups = Vec::new();
        let mut mag = self.limbs.clone();
        while !mag.is_empty() {
            let (q, r) = div_rem_digit(&mag, LIMB_MAX10);
            groups.push(r);
            mag = q;
        }

        if self.negative {
            f.write_str("-")?;
        }

        let mut iter = groups.iter().rev();
        if let Some(hi) = iter.next() {
            write!(f, "{}", hi.0)?;
        }
        for group in iter {
            write!(f, "{:0width$}", group.0, width = LIMB_LOG10)?;
        }

        Ok(())
    }
}
