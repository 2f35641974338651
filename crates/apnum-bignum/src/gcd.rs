//! GCD, extended Euclidean algorithm, and modular inverse.

use crate::magnitude::Magnitude;
use crate::signed::{Sign, SignedInt};

impl Magnitude {
    /// Greatest common divisor by the Euclidean algorithm.
    ///
    /// # Panics
    ///
    /// Panics if both operands are zero; `gcd(0, 0)` is undefined.
    pub fn gcd(&self, other: &Magnitude) -> Magnitude {
        assert!(
            !(self.is_zero() && other.is_zero()),
            "gcd(0, 0) is undefined"
        );
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        let mut a = self.clone();
        let mut b = other.clone();
        if a < b {
            std::mem::swap(&mut a, &mut b);
        }
        loop {
            let (_, rem) = a.div_rem(&b);
            if rem.is_zero() {
                return b;
            }
            a = b;
            b = rem;
        }
    }
}

impl SignedInt {
    /// Greatest common divisor; always non-negative.
    ///
    /// # Panics
    ///
    /// Panics if both operands are zero.
    pub fn gcd(&self, other: &SignedInt) -> SignedInt {
        SignedInt::from_magnitude(self.magnitude().gcd(other.magnitude()))
    }

    /// Extended Euclidean algorithm: returns `(g, x, y)` with
    /// `self * x + other * y == g` and `g == gcd(self, other) >= 0`.
    ///
    /// # Panics
    ///
    /// Panics if both operands are zero.
    pub fn extended_gcd(&self, other: &SignedInt) -> (SignedInt, SignedInt, SignedInt) {
        assert!(
            !(self.is_zero() && other.is_zero()),
            "gcd(0, 0) is undefined"
        );
        let (g, x, y) = extended_gcd_inner(self, other);
        if g.sign() == Sign::Minus {
            (g.neg(), x.neg(), y.neg())
        } else {
            (g, x, y)
        }
    }

    /// Modular inverse: the `x` Bezout coefficient of
    /// `extended_gcd(self, modulus)`, which may be negative.
    ///
    /// The result only satisfies `self * x ≡ 1 (mod modulus)` when
    /// `gcd(self, modulus) == 1`. **For non-coprime operands the returned
    /// value is unspecified** — no error is raised and nothing is
    /// validated; callers must ensure coprimality themselves.
    pub fn inv_mod(&self, modulus: &SignedInt) -> SignedInt {
        let (_, x, _) = self.extended_gcd(modulus);
        x
    }
}

/// Recursive core: base case `a == 0 => (b, 0, 1)`, otherwise recurse on
/// `(b mod a, a)` and back-substitute `x = y1 - (b div a) * x1`, `y = x1`.
/// Depth is O(log min(|a|, |b|)).
fn extended_gcd_inner(a: &SignedInt, b: &SignedInt) -> (SignedInt, SignedInt, SignedInt) {
    if a.is_zero() {
        return (b.clone(), SignedInt::zero(), SignedInt::one());
    }
    let (q, r) = b.div_rem(a);
    let (g, x1, y1) = extended_gcd_inner(&r, a);
    let x = y1.sub(&q.mul(&x1));
    (g, x, x1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic() {
        let a = Magnitude::from_word(1398);
        let b = Magnitude::from_word(324);
        assert_eq!(a.gcd(&b), Magnitude::from_word(6));
        assert_eq!(b.gcd(&a), Magnitude::from_word(6));
    }

    #[test]
    fn test_gcd_coprime() {
        let a = Magnitude::from_word(17);
        let b = Magnitude::from_word(13);
        assert!(a.gcd(&b).is_one());
    }

    #[test]
    fn test_gcd_one_zero() {
        let a = Magnitude::from_word(42);
        let z = Magnitude::zero();
        assert_eq!(a.gcd(&z), a);
        assert_eq!(z.gcd(&a), a);
    }

    #[test]
    #[should_panic(expected = "gcd(0, 0)")]
    fn test_gcd_both_zero_panics() {
        let z = Magnitude::zero();
        let _ = z.gcd(&z);
    }

    #[test]
    fn test_extended_gcd_bezout() {
        let cases = [(240i64, 46), (1398, 324), (17, 13), (-240, 46), (240, -46), (-7, -3)];
        for (av, bv) in cases {
            let a = SignedInt::from_i64(av);
            let b = SignedInt::from_i64(bv);
            let (g, x, y) = a.extended_gcd(&b);
            assert!(!g.is_negative());
            assert_eq!(g, a.gcd(&b), "gcd mismatch for ({av}, {bv})");
            assert_eq!(
                a.mul(&x).add(&b.mul(&y)),
                g,
                "Bezout identity failed for ({av}, {bv})"
            );
        }
    }

    #[test]
    fn test_extended_gcd_base_cases() {
        let b = SignedInt::from_i64(9);
        let (g, x, y) = SignedInt::zero().extended_gcd(&b);
        assert_eq!(g, b);
        assert_eq!(x, SignedInt::zero());
        assert_eq!(y, SignedInt::one());
    }

    #[test]
    fn test_inv_mod_coprime() {
        let a = SignedInt::from_i64(3);
        let m = SignedInt::from_i64(7);
        let inv = a.inv_mod(&m);
        // The coefficient itself may be negative; its residue is the inverse.
        assert_eq!(a.mul(&inv).rem_floor(&m), SignedInt::one());

        let a = SignedInt::from_i64(17);
        let m = SignedInt::from_i64(97);
        assert_eq!(a.mul(&a.inv_mod(&m)).rem_floor(&m), SignedInt::one());
    }
}
