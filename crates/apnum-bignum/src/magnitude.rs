//! Unsigned magnitude type and word-level primitives.

use zeroize::Zeroize;

/// Word type for the positional representation (64-bit on 64-bit platforms).
pub type Word = u64;
/// Double-width type for multiplication intermediates.
pub(crate) type DoubleWord = u128;

/// Bits per word.
pub const WORD_BITS: usize = 64;

/// Full-width multiply-accumulate: `a * b + c + d` as `(lo, hi)`.
///
/// Never overflows: `(B-1)^2 + 2*(B-1) = B^2 - 1` fits two words exactly.
pub(crate) fn mac(a: Word, b: Word, c: Word, d: Word) -> (Word, Word) {
    let t = a as DoubleWord * b as DoubleWord + c as DoubleWord + d as DoubleWord;
    (t as Word, (t >> WORD_BITS) as Word)
}

/// Overflow-reporting add: `a + b + carry` as `(sum, carry_out)`, carry in {0, 1}.
pub(crate) fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let t = a as DoubleWord + b as DoubleWord + carry as DoubleWord;
    (t as Word, (t >> WORD_BITS) as Word)
}

/// An unsigned arbitrary-precision integer, zeroized on drop.
///
/// Internally a little-endian array of `u64` words. Always normalized:
/// the most significant word is nonzero, except for the canonical zero
/// which is a single zero word (never an empty array).
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Magnitude {
    /// Little-endian words (words[0] is the least significant).
    words: Vec<Word>,
}

impl Magnitude {
    /// The value zero.
    pub fn zero() -> Self {
        Self { words: vec![0] }
    }

    /// The value one.
    pub fn one() -> Self {
        Self { words: vec![1] }
    }

    /// Create a Magnitude from a single word.
    pub fn from_word(value: Word) -> Self {
        Self { words: vec![value] }
    }

    /// Create a Magnitude from a vector of little-endian words.
    pub fn from_words(words: Vec<Word>) -> Self {
        let mut m = Self {
            words: if words.is_empty() { vec![0] } else { words },
        };
        m.normalize();
        m
    }

    /// Return the words as a slice.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub(crate) fn words_mut(&mut self) -> &mut Vec<Word> {
        &mut self.words
    }

    /// Return the number of stored words.
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Return the number of significant bits. Zero has bit length 0.
    pub fn bit_len(&self) -> usize {
        for i in (0..self.words.len()).rev() {
            if self.words[i] != 0 {
                return i * WORD_BITS + (WORD_BITS - self.words[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// Return true if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Return true if this value equals 1.
    pub fn is_one(&self) -> bool {
        self.words.len() == 1 && self.words[0] == 1
    }

    /// Return true if this value is even.
    pub fn is_even(&self) -> bool {
        self.words[0] & 1 == 0
    }

    /// Return true if this value is odd.
    pub fn is_odd(&self) -> bool {
        self.words[0] & 1 == 1
    }

    /// Word at index `idx`; zero for out-of-range reads.
    pub fn word(&self, idx: usize) -> Word {
        self.words.get(idx).copied().unwrap_or(0)
    }

    /// Write the word at index `idx`, growing storage for out-of-range writes.
    pub fn set_word(&mut self, idx: usize, value: Word) {
        if idx >= self.words.len() {
            self.words.resize(idx + 1, 0);
        }
        self.words[idx] = value;
        self.normalize();
    }

    /// Bit at position `idx` (0-indexed from the LSB); zero when out of range.
    pub fn bit(&self, idx: usize) -> bool {
        let word_idx = idx / WORD_BITS;
        let bit_idx = idx % WORD_BITS;
        if word_idx >= self.words.len() {
            false
        } else {
            (self.words[word_idx] >> bit_idx) & 1 == 1
        }
    }

    /// Set bit at position `idx`, growing storage as needed.
    pub fn set_bit(&mut self, idx: usize) {
        let word_idx = idx / WORD_BITS;
        let bit_idx = idx % WORD_BITS;
        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }
        self.words[word_idx] |= 1 << bit_idx;
    }

    /// Clear bit at position `idx`, re-normalizing if a leading word empties.
    pub fn clear_bit(&mut self, idx: usize) {
        let word_idx = idx / WORD_BITS;
        let bit_idx = idx % WORD_BITS;
        if word_idx < self.words.len() {
            self.words[word_idx] &= !(1 << bit_idx);
            self.normalize();
        }
    }

    /// Remove leading zero words, keeping at least one word.
    pub(crate) fn normalize(&mut self) {
        while self.words.len() > 1 && *self.words.last().unwrap() == 0 {
            self.words.pop();
        }
    }
}

impl std::fmt::Debug for Magnitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Magnitude(0x{})", self.to_hex())
    }
}

impl PartialEq for Magnitude {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Magnitude {}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // More normalized words means a larger value.
        if self.words.len() != other.words.len() {
            return self.words.len().cmp(&other.words.len());
        }
        for i in (0..self.words.len()).rev() {
            if self.words[i] != other.words[i] {
                return self.words[i].cmp(&other.words[i]);
            }
        }
        std::cmp::Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mac_saturated() {
        // (B-1)*(B-1) + (B-1) + (B-1) must not overflow the double word
        let (lo, hi) = mac(Word::MAX, Word::MAX, Word::MAX, Word::MAX);
        assert_eq!(lo, Word::MAX);
        assert_eq!(hi, Word::MAX);
    }

    #[test]
    fn test_adc_carry() {
        let (sum, carry) = adc(Word::MAX, 1, 0);
        assert_eq!(sum, 0);
        assert_eq!(carry, 1);
        let (sum, carry) = adc(Word::MAX, Word::MAX, 1);
        assert_eq!(sum, Word::MAX);
        assert_eq!(carry, 1);
    }

    #[test]
    fn test_zero_canonical() {
        let z = Magnitude::zero();
        assert!(z.is_zero());
        assert_eq!(z.num_words(), 1);
        assert_eq!(z.bit_len(), 0);
    }

    #[test]
    fn test_from_words_normalizes() {
        let m = Magnitude::from_words(vec![7, 0, 0, 0]);
        assert_eq!(m.num_words(), 1);
        assert_eq!(m, Magnitude::from_word(7));
        assert_eq!(Magnitude::from_words(vec![]), Magnitude::zero());
    }

    #[test]
    fn test_bit_len() {
        assert_eq!(Magnitude::from_word(0xFF).bit_len(), 8);
        assert_eq!(Magnitude::from_words(vec![0, 1]).bit_len(), 65);
    }

    #[test]
    fn test_word_access() {
        let mut m = Magnitude::from_word(3);
        assert_eq!(m.word(5), 0);
        m.set_word(2, 9);
        assert_eq!(m.num_words(), 3);
        assert_eq!(m.word(2), 9);
        m.set_word(2, 0);
        assert_eq!(m.num_words(), 1);
    }

    #[test]
    fn test_set_clear_bit_across_words() {
        let mut m = Magnitude::zero();
        m.set_bit(256);
        assert!(m.bit(256));
        assert_eq!(m.bit_len(), 257);
        m.clear_bit(256);
        assert!(m.is_zero());
        assert_eq!(m.bit_len(), 0);
        assert_eq!(m.num_words(), 1);
    }

    #[test]
    fn test_ordering() {
        let a = Magnitude::from_words(vec![0, 1]);
        let b = Magnitude::from_word(Word::MAX);
        assert!(a > b);
        assert!(Magnitude::zero() < Magnitude::one());
        assert_eq!(a.cmp(&a), std::cmp::Ordering::Equal);
    }
}
