//! Scoped unnormalized working buffer.

use crate::magnitude::{adc, Magnitude, Word};

/// A fixed-width word buffer that keeps leading zero words.
///
/// Multi-step algorithms that want a stable width — long division
/// accumulating quotient digits, hex parsing assembling nibbles — build
/// into a `WordBuf` and convert to a normalized [`Magnitude`] only on
/// completion via [`into_magnitude`](WordBuf::into_magnitude). The buffer
/// is never observable as a value by any arithmetic operation.
pub struct WordBuf {
    words: Vec<Word>,
}

impl WordBuf {
    /// A zero-filled buffer of `num_words` words (at least one).
    pub fn zeroed(num_words: usize) -> Self {
        Self {
            words: vec![0; num_words.max(1)],
        }
    }

    /// Return the number of words, counting leading zeros.
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Word at index `idx`; zero for out-of-range reads.
    pub fn word(&self, idx: usize) -> Word {
        self.words.get(idx).copied().unwrap_or(0)
    }

    /// OR `value` into the word at `idx`, growing storage as needed.
    pub fn or_word(&mut self, idx: usize, value: Word) {
        if idx >= self.words.len() {
            self.words.resize(idx + 1, 0);
        }
        self.words[idx] |= value;
    }

    /// Add a magnitude into the buffer in place, growing on a final carry.
    pub fn add_assign(&mut self, rhs: &Magnitude) {
        let rhs_words = rhs.words();
        let len = self.words.len().max(rhs_words.len());
        if self.words.len() < len {
            self.words.resize(len, 0);
        }
        let mut carry: Word = 0;
        for i in 0..len {
            let b = rhs_words.get(i).copied().unwrap_or(0);
            let (sum, c) = adc(self.words[i], b, carry);
            self.words[i] = sum;
            carry = c;
        }
        if carry != 0 {
            self.words.push(carry);
        }
    }

    /// Consume the buffer, producing a normalized magnitude.
    pub fn into_magnitude(self) -> Magnitude {
        Magnitude::from_words(self.words)
    }
}
