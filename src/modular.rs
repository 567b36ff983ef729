//! Modular arithmetic: pluggable reduction strategies, modular
//! exponentiation, and modular inversion.

mod barrett;
mod classic;
mod inv;
mod monty;
mod pow;
mod pow2;

pub use pow::Reduction;

use crate::BigInt;
use barrett::BarrettParams;
use classic::ClassicParams;
use monty::MontyParams;
use pow2::Pow2Params;

/// A reduction strategy instantiated for one modulus.
///
/// Carries the per-modulus precomputed data for the duration of one
/// exponentiation, so every reduction inside the loop reuses the setup.
/// All inputs and outputs are non-negative.
pub(crate) enum Reducer {
    Montgomery(MontyParams),
    Barrett(BarrettParams),
    PowerOfTwo(Pow2Params),
    Classic(ClassicParams),
    None,
}

impl Reducer {
    /// Precompute the reduction data for `modulus` under the given
    /// strategy.
    ///
    /// # Panics
    ///
    /// Panics if the modulus does not satisfy the strategy's requirement:
    /// odd for Montgomery, a power of two for the mask reducer.
    pub(crate) fn new(mode: Reduction, modulus: &BigInt) -> Self {
        match mode {
            Reduction::Montgomery => Self::Montgomery(MontyParams::new(modulus)),
            Reduction::Barrett => Self::Barrett(BarrettParams::new(modulus)),
            Reduction::PowerOfTwo => Self::PowerOfTwo(Pow2Params::new(modulus)),
            Reduction::Classic => Self::Classic(ClassicParams::new(modulus)),
            Reduction::None => Self::None,
        }
    }

    /// Reduce an intermediate value (a product of two already-converted
    /// values) back into the working domain.
    pub(crate) fn reduce(&self, x: BigInt) -> BigInt {
        match self {
            Self::Montgomery(params) => params.reduce(&x),
            Self::Barrett(params) => params.reduce(&x),
            Self::PowerOfTwo(params) => params.reduce(&x),
            Self::Classic(params) => params.reduce(&x),
            Self::None => x,
        }
    }

    /// Convert a value into the working domain: the Montgomery lift, or an
    /// initial reduction for the other strategies.
    ///
    /// Unlike [`Reducer::reduce`], this accepts inputs of any size, so the
    /// Barrett path falls back to a full division here.
    pub(crate) fn convert_in(&self, x: &BigInt) -> BigInt {
        match self {
            Self::Montgomery(params) => params.lift(x),
            Self::Barrett(params) => params.convert_in(x),
            _ => self.reduce(x.clone()),
        }
    }

    /// Convert a result out of the working domain: one more Montgomery
    /// reduction, or a final reduction for the other strategies.
    pub(crate) fn convert_out(&self, x: BigInt) -> BigInt {
        self.reduce(x)
    }
}
