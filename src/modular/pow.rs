//! Modular exponentiation: sliding-window exponentiator and the `mod_pow`
//! orchestrator.

use super::Reducer;
use crate::BigInt;
use alloc::vec::Vec;

/// Modular reduction strategy for [`BigInt::mod_pow_with`].
///
/// A closed set of strategies sharing one contract: reduce an intermediate
/// value modulo the modulus. Each carries different precomputed data and a
/// different requirement on the modulus.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Reduction {
    /// Montgomery reduction; requires an odd modulus.
    Montgomery,

    /// Barrett reduction using a precomputed reciprocal.
    Barrett,

    /// Masking; requires a power-of-two modulus.
    PowerOfTwo,

    /// Remainder by long division.
    Classic,

    /// No reduction: computes the plain power.
    None,
}

/// Exponent bit lengths up to which each window width (1 through 6) wins;
/// larger exponents clamp to 6.
const WINDOW_RANGES: [u32; 6] = [7, 25, 81, 241, 673, 1793];

/// Sliding-window exponentiation (HAC 14.85) with a reduction after every
/// squaring and multiplication.
fn sliding_window(base: &BigInt, exponent: &BigInt, reducer: &Reducer) -> BigInt {
    let bits = exponent.bits();
    if bits == 0 {
        return reducer.convert_out(reducer.convert_in(&BigInt::one()));
    }

    let window = WINDOW_RANGES
        .iter()
        .position(|&range| bits <= range)
        .map(|i| i as u32 + 1)
        .unwrap_or(6);

    // precompute the odd powers: powers[i] holds base^(2i+1) in the
    // working domain
    let first = reducer.convert_in(base);
    let mut powers = Vec::with_capacity(1 << (window - 1));
    powers.push(first);

    if window > 1 {
        let square = reducer.reduce(powers[0].square());
        for i in 1..(1usize << (window - 1)) {
            powers.push(reducer.reduce(powers[i - 1].mul(&square)));
        }
    }

    let mut result = reducer.convert_in(&BigInt::one());
    let mut i = bits as i64 - 1;

    while i >= 0 {
        if !exponent.bit(i as u32) {
            result = reducer.reduce(result.square());
            i -= 1;
            continue;
        }

        // take the widest window of at most `window` bits that ends in a
        // set bit
        let mut j = (i - window as i64 + 1).max(0);
        while !exponent.bit(j as u32) {
            j += 1;
        }

        let mut value: usize = 0;
        for t in (j..=i).rev() {
            value = (value << 1) | exponent.bit(t as u32) as usize;
        }

        for _ in j..=i {
            result = reducer.reduce(result.square());
        }
        result = reducer.reduce(result.mul(&powers[value >> 1]));

        i = j - 1;
    }

    reducer.convert_out(result)
}

impl BigInt {
    /// Computes `self ^ exponent mod modulus`, returning a value in
    /// `[0, modulus)`.
    ///
    /// A zero exponent yields one. Odd moduli use Montgomery reduction;
    /// even moduli are split into an odd part and a power-of-two part,
    /// solved separately, and recombined by the Chinese Remainder Theorem.
    ///
    /// # Panics
    ///
    /// Panics if `self` or `exponent` is negative, or `modulus` is not
    /// positive.
    pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Self {
        assert!(!self.is_negative(), "negative base");
        assert!(!exponent.is_negative(), "negative exponent");
        assert!(
            !modulus.is_negative() && !modulus.is_zero(),
            "modulus must be positive"
        );

        if exponent.is_zero() {
            return Self::one();
        }
        if exponent.is_one() {
            return self.rem(modulus);
        }
        if *exponent == Self::from(2u8) {
            return self.square().rem(modulus);
        }

        if modulus.is_odd() {
            let reducer = Reducer::new(Reduction::Montgomery, modulus);
            return sliding_window(self, exponent, &reducer);
        }

        // even modulus: split off the power-of-two part, n = 2^j * m with
        // m odd, and recombine the sub-results by CRT
        let j = modulus.trailing_zeros();
        let m = modulus.shr(j);
        let two_j = Self::one().shl(j);

        let part2 = {
            let reducer = Reducer::new(Reduction::PowerOfTwo, &two_j);
            sliding_window(self, exponent, &reducer)
        };

        if m.is_one() {
            return part2;
        }

        let part1 = {
            let reducer = Reducer::new(Reduction::Montgomery, &m);
            sliding_window(self, exponent, &reducer)
        };

        // y1 = (2^j)^-1 mod m and y2 = m^-1 mod 2^j always exist: the two
        // factors are coprime
        let y1 = two_j.mod_inverse(&m).expect("odd part is coprime to 2^j");
        let y2 = m.mod_inverse(&two_j).expect("2^j is coprime to the odd part");

        part1
            .mul(&two_j)
            .mul(&y1)
            .add(&part2.mul(&m).mul(&y2))
            .rem(modulus)
    }

    /// Computes `self ^ exponent` under the caller-selected reduction
    /// strategy.
    ///
    /// With [`Reduction::None`] no reduction is applied and the plain power
    /// is returned; the modulus is ignored.
    ///
    /// # Panics
    ///
    /// Panics if `self` or `exponent` is negative; if `modulus` is not
    /// positive; or if the modulus does not satisfy the strategy's
    /// requirement (odd for [`Reduction::Montgomery`], a power of two for
    /// [`Reduction::PowerOfTwo`]).
    pub fn mod_pow_with(&self, exponent: &Self, modulus: &Self, mode: Reduction) -> Self {
        assert!(!self.is_negative(), "negative base");
        assert!(!exponent.is_negative(), "negative exponent");
        assert!(
            !modulus.is_negative() && !modulus.is_zero(),
            "modulus must be positive"
        );

        let reducer = Reducer::new(mode, modulus);
        sliding_window(self, exponent, &reducer)
    }
}
