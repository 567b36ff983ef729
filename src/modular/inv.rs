//! Modular inversion by binary extended GCD.

use crate::BigInt;

impl BigInt {
    /// Computes `self^-1 mod modulus`: the value `y` in `[0, modulus)` with
    /// `self * y == 1 (mod modulus)`.
    ///
    /// `self` is reduced to its common residue modulo `modulus` up front,
    /// so any sign or magnitude is accepted. Returns `None` when the
    /// inverse does not exist, i.e. when `gcd(self, modulus) != 1`.
    ///
    /// The loop is the right-shift binary extended GCD (HAC 14.61): no
    /// multi-precision division, only halvings and subtractions.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is not positive.
    pub fn mod_inverse(&self, modulus: &Self) -> Option<Self> {
        assert!(
            !modulus.is_negative() && !modulus.is_zero(),
            "modulus must be positive"
        );

        let x = self.rem(modulus);

        if x.is_zero() {
            // gcd(0, n) == n: zero is invertible only modulo one
            return modulus.is_one().then(Self::zero);
        }
        if x.is_even() && modulus.is_even() {
            return None;
        }

        let mut u = modulus.clone();
        let mut v = x.clone();

        // invariants: a*n + b*x == u and c*n + d*x == v
        let mut a = Self::one();
        let mut b = Self::zero();
        let mut c = Self::zero();
        let mut d = Self::one();

        while !u.is_zero() {
            while u.is_even() {
                u = u.shr1();
                if a.is_odd() || b.is_odd() {
                    a = a.add(&x);
                    b = b.sub(modulus);
                }
                a = a.shr1();
                b = b.shr1();
            }

            while v.is_even() {
                v = v.shr1();
                if c.is_odd() || d.is_odd() {
                    c = c.add(&x);
                    d = d.sub(modulus);
                }
                c = c.shr1();
                d = d.shr1();
            }

            if u >= v {
                u = u.sub(&v);
                a = a.sub(&c);
                b = b.sub(&d);
            } else {
                v = v.sub(&u);
                c = c.sub(&a);
                d = d.sub(&b);
            }
        }

        // v now holds gcd(x, modulus), and c*n + d*x == v
        if !v.is_one() {
            return None;
        }

        Some(d.rem(modulus))
    }
}
