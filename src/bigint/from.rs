//! `From`-like conversions for [`BigInt`].

use super::BigInt;
use crate::{Limb, Word};
use alloc::vec::Vec;

impl BigInt {
    fn from_u128_with_sign(negative: bool, mut n: u128) -> Self {
        let mut limbs = Vec::new();
        while n != 0 {
            limbs.push(Limb(n as Word));
            n >>= Limb::BITS;
        }
        Self::from_magnitude(negative, limbs)
    }
}

impl From<u8> for BigInt {
    fn from(n: u8) -> Self {
        Self::from_u128_with_sign(false, n.into())
    }
}

impl From<u16> for BigInt {
    fn from(n: u16) -> Self {
        Self::from_u128_with_sign(false, n.into())
    }
}

impl From<u32> for BigInt {
    fn from(n: u32) -> Self {
        Self::from_u128_with_sign(false, n.into())
    }
}

impl From<u64> for BigInt {
    fn from(n: u64) -> Self {
        Self::from_u128_with_sign(false, n.into())
    }
}

impl From<u128> for BigInt {
    fn from(n: u128) -> Self {
        Self::from_u128_with_sign(false, n)
    }
}

impl From<i8> for BigInt {
    fn from(n: i8) -> Self {
        Self::from_u128_with_sign(n < 0, n.unsigned_abs().into())
    }
}

impl From<i16> for BigInt {
    fn from(n: i16) -> Self {
        Self::from_u128_with_sign(n < 0, n.unsigned_abs().into())
    }
}

impl From<i32> for BigInt {
    fn from(n: i32) -> Self {
        Self::from_u128_with_sign(n < 0, n.unsigned_abs().into())
    }
}

impl From<i64> for BigInt {
    fn from(n: i64) -> Self {
        Self::from_u128_with_sign(n < 0, n.unsigned_abs().into())
    }
}

impl From<i128> for BigInt {
    fn from(n: i128) -> Self {
        Self::from_u128_with_sign(n < 0, n.unsigned_abs())
    }
}
