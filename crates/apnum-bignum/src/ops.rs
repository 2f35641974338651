//! Magnitude arithmetic: addition, subtraction, multiplication, long
//! division, shifts, and word-wise bitwise operations.

use crate::buffer::WordBuf;
use crate::magnitude::{adc, mac, Magnitude, Word, WORD_BITS};

impl Magnitude {
    /// Add: `self + other`, growing by one word on a final carry.
    pub fn add(&self, other: &Magnitude) -> Magnitude {
        let len = self.num_words().max(other.num_words());
        let mut words = vec![0; len];
        let mut carry: Word = 0;
        for (i, w) in words.iter_mut().enumerate() {
            let (sum, c) = adc(self.word(i), other.word(i), carry);
            *w = sum;
            carry = c;
        }
        if carry != 0 {
            words.push(carry);
        }
        Magnitude::from_words(words)
    }

    /// Add restricted to `self`'s width: a final carry out of the top word
    /// is silently dropped (wraparound semantics).
    pub fn wrapping_add(&self, other: &Magnitude) -> Magnitude {
        let len = self.num_words();
        let mut words = vec![0; len];
        let mut carry: Word = 0;
        for (i, w) in words.iter_mut().enumerate() {
            let (sum, c) = adc(self.word(i), other.word(i), carry);
            *w = sum;
            carry = c;
        }
        Magnitude::from_words(words)
    }

    /// Subtract: `self - other`, as the wrapping addition of `other`'s
    /// two's complement at `self`'s width.
    ///
    /// Only defined for `self >= other`; a magnitude has no negative
    /// representation, so the signed wrapper selects operand order first.
    pub fn sub(&self, other: &Magnitude) -> Magnitude {
        debug_assert!(self >= other, "magnitude subtraction underflow");
        let len = self.num_words();
        let mut words = vec![0; len];
        // Complement-plus-one folds into the initial carry.
        let mut carry: Word = 1;
        for (i, w) in words.iter_mut().enumerate() {
            let (sum, c) = adc(self.word(i), !other.word(i), carry);
            *w = sum;
            carry = c;
        }
        Magnitude::from_words(words)
    }

    /// Multiply: schoolbook, O(n*m) word operations.
    pub fn mul(&self, other: &Magnitude) -> Magnitude {
        if self.is_zero() || other.is_zero() {
            return Magnitude::zero();
        }
        if self.is_one() {
            return other.clone();
        }
        if other.is_one() {
            return self.clone();
        }

        let a = self.words();
        let b = other.words();
        let mut words = vec![0; a.len() + b.len()];
        for i in 0..a.len() {
            let mut carry: Word = 0;
            for j in 0..b.len() {
                let (lo, hi) = mac(a[i], b[j], words[i + j], carry);
                words[i + j] = lo;
                carry = hi;
            }
            words[i + b.len()] = carry;
        }
        Magnitude::from_words(words)
    }

    /// Long division: returns `(quotient, remainder)` with
    /// `divisor * quotient + remainder == self` and `remainder < divisor`.
    ///
    /// Quotient digits are estimated from the leading words of the running
    /// remainder and divisor, then corrected downward by halving until the
    /// trial product no longer overshoots.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero; callers must check.
    pub fn div_rem(&self, divisor: &Magnitude) -> (Magnitude, Magnitude) {
        assert!(!divisor.is_zero(), "magnitude division by zero");
        if self < divisor {
            return (Magnitude::zero(), self.clone());
        }
        if divisor.is_one() {
            return (self.clone(), Magnitude::zero());
        }

        let d_len = divisor.num_words();
        let d_top = *divisor.words().last().unwrap();
        let mut rem = self.clone();
        // Quotient accumulates in a fixed-width buffer; leading zeros stay
        // until the final conversion.
        let mut quot = WordBuf::zeroed(self.num_words());

        while rem >= *divisor {
            let r_top = *rem.words().last().unwrap();
            let word_gap = rem.num_words() - d_len;
            let mut est = if r_top >= d_top {
                Magnitude::from_word(r_top / d_top).shl(word_gap * WORD_BITS)
            } else {
                // Leading word smaller than the divisor's: fall back to
                // aligning the operands' bit widths.
                Magnitude::one().shl(rem.bit_len() - divisor.bit_len())
            };
            let mut prod = divisor.mul(&est);
            while prod > rem {
                // est == 1 implies prod == divisor <= rem, so the halving
                // never reaches zero.
                est = est.shr(1);
                debug_assert!(!est.is_zero());
                prod = divisor.mul(&est);
            }
            quot.add_assign(&est);
            rem = rem.sub(&prod);
        }
        (quot.into_magnitude(), rem)
    }

    /// Left shift by `shift` bits, growing as needed.
    pub fn shl(&self, shift: usize) -> Magnitude {
        if self.is_zero() || shift == 0 {
            return self.clone();
        }
        let word_shift = shift / WORD_BITS;
        let bit_shift = shift % WORD_BITS;
        let n = self.num_words();
        // One extra word absorbs bits pushed past the old top word.
        let mut words = vec![0; n + word_shift + 1];
        words[word_shift..word_shift + n].copy_from_slice(self.words());
        if bit_shift > 0 {
            let mut carry: Word = 0;
            for w in words[word_shift..].iter_mut() {
                let spill = *w >> (WORD_BITS - bit_shift);
                *w = (*w << bit_shift) | carry;
                carry = spill;
            }
        }
        Magnitude::from_words(words)
    }

    /// Right shift by `shift` bits; never grows, and shifting out every
    /// significant bit yields zero.
    pub fn shr(&self, shift: usize) -> Magnitude {
        let word_shift = shift / WORD_BITS;
        let bit_shift = shift % WORD_BITS;
        if word_shift >= self.num_words() {
            return Magnitude::zero();
        }
        let mut words: Vec<Word> = self.words()[word_shift..].to_vec();
        if bit_shift > 0 {
            let mut carry: Word = 0;
            for w in words.iter_mut().rev() {
                let spill = *w << (WORD_BITS - bit_shift);
                *w = (*w >> bit_shift) | carry;
                carry = spill;
            }
        }
        Magnitude::from_words(words)
    }

    fn bitwise(&self, other: &Magnitude, f: impl Fn(Word, Word) -> Word) -> Magnitude {
        let len = self.num_words().max(other.num_words());
        let words = (0..len).map(|i| f(self.word(i), other.word(i))).collect();
        Magnitude::from_words(words)
    }
}

impl std::ops::BitAnd for &Magnitude {
    type Output = Magnitude;
    fn bitand(self, rhs: &Magnitude) -> Magnitude {
        self.bitwise(rhs, |a, b| a & b)
    }
}

impl std::ops::BitOr for &Magnitude {
    type Output = Magnitude;
    fn bitor(self, rhs: &Magnitude) -> Magnitude {
        self.bitwise(rhs, |a, b| a | b)
    }
}

impl std::ops::BitXor for &Magnitude {
    type Output = Magnitude;
    fn bitxor(self, rhs: &Magnitude) -> Magnitude {
        self.bitwise(rhs, |a, b| a ^ b)
    }
}

impl std::ops::Shl<usize> for &Magnitude {
    type Output = Magnitude;
    fn shl(self, shift: usize) -> Magnitude {
        Magnitude::shl(self, shift)
    }
}

impl std::ops::Shr<usize> for &Magnitude {
    type Output = Magnitude;
    fn shr(self, shift: usize) -> Magnitude {
        Magnitude::shr(self, shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_basic() {
        let a = Magnitude::from_word(100);
        let b = Magnitude::from_word(200);
        assert_eq!(a.add(&b), Magnitude::from_word(300));
    }

    #[test]
    fn test_add_grows_on_carry() {
        let a = Magnitude::from_word(Word::MAX);
        let c = a.add(&Magnitude::one());
        assert_eq!(c, Magnitude::from_words(vec![0, 1]));
        assert_eq!(c.num_words(), 2);
    }

    #[test]
    fn test_wrapping_add_drops_carry() {
        let a = Magnitude::from_word(Word::MAX);
        assert_eq!(a.wrapping_add(&Magnitude::one()), Magnitude::zero());
        // Multi-word wraparound at the receiver's width
        let b = Magnitude::from_words(vec![Word::MAX, Word::MAX]);
        assert_eq!(b.wrapping_add(&Magnitude::one()), Magnitude::zero());
    }

    #[test]
    fn test_sub_borrow_chain() {
        let a = Magnitude::from_words(vec![0, 1]);
        let c = a.sub(&Magnitude::one());
        assert_eq!(c, Magnitude::from_word(Word::MAX));
        assert_eq!(a.sub(&a), Magnitude::zero());
    }

    #[test]
    fn test_mul_multiword() {
        // 0x2DEE4E2519 * 0x2000000000 = 0x5BDC9C4A32000000000
        let a = Magnitude::from_word(0x2DEE4E2519);
        let b = Magnitude::from_word(0x2000000000);
        let expect = Magnitude::from_words(vec![0xC9C4A32000000000, 0x5BD]);
        assert_eq!(a.mul(&b), expect);
        assert_eq!(b.mul(&a), expect);
    }

    #[test]
    fn test_mul_identities() {
        let a = Magnitude::from_words(vec![0xDEADBEEF, 0xCAFE]);
        assert_eq!(a.mul(&Magnitude::zero()), Magnitude::zero());
        assert_eq!(a.mul(&Magnitude::one()), a);
    }

    #[test]
    fn test_div_rem_exact() {
        // 0x1DA627265E343E9E14DA / 0x2DEE4E2519 = 0xA5406B0CEA remainder 0
        let n = Magnitude::from_words(vec![0x27265E343E9E14DA, 0x1DA6]);
        let d = Magnitude::from_word(0x2DEE4E2519);
        let (q, r) = n.div_rem(&d);
        assert_eq!(q, Magnitude::from_word(0xA5406B0CEA));
        assert!(r.is_zero());
    }

    #[test]
    fn test_div_rem_law() {
        let n = Magnitude::from_words(vec![0x0123456789ABCDEF, 0xFEDCBA9876543210, 0x1D]);
        for d in [
            Magnitude::from_word(7),
            Magnitude::from_word(Word::MAX),
            Magnitude::from_words(vec![0x1111111111111111, 0x2222]),
        ] {
            let (q, r) = n.div_rem(&d);
            assert!(r < d);
            assert_eq!(d.mul(&q).add(&r), n);
        }
    }

    #[test]
    fn test_div_small_by_large() {
        let n = Magnitude::from_word(5);
        let d = Magnitude::from_words(vec![0, 1]);
        let (q, r) = n.div_rem(&d);
        assert!(q.is_zero());
        assert_eq!(r, n);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_by_zero_panics() {
        let _ = Magnitude::from_word(1).div_rem(&Magnitude::zero());
    }

    #[test]
    fn test_shl_crosses_word_boundary() {
        let a = Magnitude::one();
        let b = a.shl(64);
        assert_eq!(b, Magnitude::from_words(vec![0, 1]));
        let c = Magnitude::from_word(Word::MAX).shl(4);
        assert_eq!(c, Magnitude::from_words(vec![Word::MAX << 4, 0xF]));
    }

    #[test]
    fn test_shr_to_zero() {
        let a = Magnitude::from_words(vec![0, 0, 1]);
        assert_eq!(a.shr(129), Magnitude::zero());
        assert_eq!(a.shr(128), Magnitude::one());
    }

    #[test]
    fn test_shift_inverse() {
        let x = Magnitude::from_words(vec![0xDEADBEEFCAFEF00D, 0x1234]);
        for k in [0, 1, 7, 63, 64, 65, 200] {
            assert_eq!(x.shl(k).shr(k), x, "shift inverse failed for k={k}");
        }
    }

    #[test]
    fn test_bitwise_zero_extension() {
        let a = Magnitude::from_words(vec![0xF0F0, 0xFFFF]);
        let b = Magnitude::from_word(0xFF00);
        assert_eq!(&a & &b, Magnitude::from_word(0xF000));
        assert_eq!(&a | &b, Magnitude::from_words(vec![0xFFF0, 0xFFFF]));
        assert_eq!(&a ^ &a, Magnitude::zero());
    }

    #[test]
    fn test_add_mul_commute_associate() {
        let a = Magnitude::from_words(vec![0x1111111111111111, 0x9]);
        let b = Magnitude::from_word(0xABCDEF);
        let c = Magnitude::from_words(vec![5, 0x77]);
        assert_eq!(a.add(&b), b.add(&a));
        assert_eq!(a.mul(&b), b.mul(&a));
        assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        // Distributivity ties the two together
        assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
    }
}
