//! Hex string parsing and formatting.

use apnum_types::NumError;

use crate::buffer::WordBuf;
use crate::magnitude::{Magnitude, Word, WORD_BITS};
use crate::signed::{Sign, SignedInt};

/// Hex digits per word.
const DIGITS_PER_WORD: usize = WORD_BITS / 4;

impl Magnitude {
    /// Parse a hex string: optional `0x`/`0X` prefix, case-insensitive
    /// digits, any leading zeros. The empty string parses to zero.
    pub fn from_hex(s: &str) -> Result<Magnitude, NumError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() {
            return Ok(Magnitude::zero());
        }

        // Nibbles assemble into a fixed-width buffer; normalization
        // happens once on conversion.
        let mut buf = WordBuf::zeroed(digits.len().div_ceil(DIGITS_PER_WORD));
        for (i, ch) in digits.chars().rev().enumerate() {
            let nibble = ch.to_digit(16).ok_or(NumError::InvalidHexDigit(ch))? as Word;
            buf.or_word(i / DIGITS_PER_WORD, nibble << ((i % DIGITS_PER_WORD) * 4));
        }
        Ok(buf.into_magnitude())
    }

    /// Format as lowercase hex with leading zeros stripped; zero formats
    /// as the single digit `0`.
    pub fn to_hex(&self) -> String {
        let words = self.words();
        let mut s = format!("{:x}", words[words.len() - 1]);
        for w in words[..words.len() - 1].iter().rev() {
            s.push_str(&format!("{w:016x}"));
        }
        s
    }

    /// Format as hex grouped with `_` every 4 digits, counted from the
    /// least significant end.
    pub fn to_hex_grouped(&self) -> String {
        let plain = self.to_hex();
        let mut out = String::with_capacity(plain.len() + plain.len() / 4);
        for (i, ch) in plain.chars().enumerate() {
            if i > 0 && (plain.len() - i) % 4 == 0 {
                out.push('_');
            }
            out.push(ch);
        }
        out
    }
}

impl SignedInt {
    /// Parse a hex string with an optional leading `-`.
    pub fn from_hex(s: &str) -> Result<SignedInt, NumError> {
        match s.strip_prefix('-') {
            Some(rest) => Ok(SignedInt::new(Sign::Minus, Magnitude::from_hex(rest)?)),
            None => Ok(SignedInt::from_magnitude(Magnitude::from_hex(s)?)),
        }
    }

    /// Format as hex with a `-` prefix for negative values.
    pub fn to_hex(&self) -> String {
        if self.is_negative() {
            format!("-{}", self.magnitude().to_hex())
        } else {
            self.magnitude().to_hex()
        }
    }
}
