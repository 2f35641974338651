//! Modular exponentiation by square-and-multiply.

use crate::signed::SignedInt;

impl SignedInt {
    /// Modular exponentiation: `self^exponent mod modulus`.
    ///
    /// Square-and-multiply over the exponent's bits, most significant
    /// first, reducing after every step; the cost is O(bit_len(exponent))
    /// multiplications through the ordinary schoolbook primitives.
    ///
    /// A negative modulus signals a negative power: the base is first
    /// replaced by `base.inv_mod(|modulus|)` and the computation proceeds
    /// modulo `|modulus|`. The result is then only meaningful when the
    /// base and modulus are coprime (see [`inv_mod`](SignedInt::inv_mod)).
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    pub fn mod_pow(&self, exponent: &SignedInt, modulus: &SignedInt) -> SignedInt {
        assert!(!modulus.is_zero(), "mod_pow with zero modulus");
        let m = modulus.abs();
        if m.magnitude().is_one() {
            return SignedInt::zero();
        }
        let base = if modulus.is_negative() {
            self.inv_mod(&m)
        } else {
            self.clone()
        };
        let base = base.rem_floor(&m);

        let mut x = SignedInt::one();
        let bits = exponent.magnitude().bit_len();
        for i in (0..bits).rev() {
            x = x.mul(&x).rem_floor(&m);
            if exponent.magnitude().bit(i) {
                x = x.mul(&base).rem_floor(&m);
            }
        }
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_pow_mod(base: i64, exp: u32, m: i64) -> i64 {
        // Repeated multiplication, the slow way
        let mut acc = 1i128;
        for _ in 0..exp {
            acc = acc * base as i128 % m as i128;
        }
        acc.rem_euclid(m as i128) as i64
    }

    #[test]
    fn test_matches_reference() {
        for (base, exp, m) in [(3i64, 4u32, 97i64), (5, 0, 13), (7, 13, 11), (2, 30, 1_000_003)] {
            let got = SignedInt::from_i64(base)
                .mod_pow(&SignedInt::from_i64(exp as i64), &SignedInt::from_i64(m));
            assert_eq!(
                got,
                SignedInt::from_i64(reference_pow_mod(base, exp, m)),
                "mod_pow({base}, {exp}, {m})"
            );
        }
    }

    #[test]
    fn test_fermat_little_theorem() {
        // a^(p-1) ≡ 1 (mod p) for prime p and a not divisible by p
        let p = SignedInt::from_i64(97);
        let p_minus_1 = SignedInt::from_i64(96);
        for a in [2i64, 3, 5, 42, 96] {
            assert_eq!(
                SignedInt::from_i64(a).mod_pow(&p_minus_1, &p),
                SignedInt::one(),
                "a={a}"
            );
        }
    }

    #[test]
    fn test_negative_base_reduced_first() {
        // (-2)^3 mod 7 = -8 mod 7 = 6
        let got = SignedInt::from_i64(-2)
            .mod_pow(&SignedInt::from_i64(3), &SignedInt::from_i64(7));
        assert_eq!(got, SignedInt::from_i64(6));
    }

    #[test]
    fn test_negative_modulus_inverts_base() {
        // 3^(-1) mod 7 = 5, so mod_pow(3, 2, -7) = 5^2 mod 7 = 4
        let got = SignedInt::from_i64(3)
            .mod_pow(&SignedInt::from_i64(2), &SignedInt::from_i64(-7));
        assert_eq!(got, SignedInt::from_i64(4));
    }

    #[test]
    fn test_modulus_one() {
        let got = SignedInt::from_i64(10)
            .mod_pow(&SignedInt::from_i64(3), &SignedInt::one());
        assert_eq!(got, SignedInt::zero());
    }

    #[test]
    fn test_large_operands() {
        // 2^128 mod (2^64 - 59): 2^64 ≡ 59, so 2^128 ≡ 59^2 = 3481
        let m = SignedInt::from_magnitude(crate::Magnitude::from_word(u64::MAX - 58));
        let got = SignedInt::from_i64(2).mod_pow(&SignedInt::from_i64(128), &m);
        assert_eq!(got, SignedInt::from_i64(3481));
    }
}
