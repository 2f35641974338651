//! Conversions between magnitudes, machine integers, floats, and raw
//! byte buffers.

use apnum_types::NumError;

use crate::magnitude::{Magnitude, Word, WORD_BITS};
use crate::signed::{Sign, SignedInt};

impl Magnitude {
    /// Construct from a raw little-endian byte buffer.
    pub fn from_bytes_le(bytes: &[u8]) -> Magnitude {
        if bytes.is_empty() {
            return Magnitude::zero();
        }
        let mut words = vec![0 as Word; bytes.len().div_ceil(8)];
        for (i, &byte) in bytes.iter().enumerate() {
            words[i / 8] |= (byte as Word) << ((i % 8) * 8);
        }
        Magnitude::from_words(words)
    }

    /// Reinterpret the word storage as a little-endian byte buffer
    /// (`num_words * 8` bytes, trailing zeros included).
    pub fn to_bytes_le(&self) -> Vec<u8> {
        self.words().iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    /// Construct from big-endian bytes.
    pub fn from_bytes_be(bytes: &[u8]) -> Magnitude {
        let le: Vec<u8> = bytes.iter().rev().copied().collect();
        Magnitude::from_bytes_le(&le)
    }

    /// Export to big-endian bytes with leading zeros trimmed; zero
    /// exports as a single zero byte.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let num_bytes = self.bit_len().div_ceil(8).max(1);
        let mut bytes = vec![0u8; num_bytes];
        for (i, b) in bytes.iter_mut().enumerate() {
            let src = num_bytes - 1 - i;
            *b = (self.word(src / 8) >> ((src % 8) * 8)) as u8;
        }
        bytes
    }

    /// Exact conversion from a float. Fails for negative, non-finite, or
    /// fractional values; no magnitude is produced.
    pub fn from_f64_exact(value: f64) -> Result<Magnitude, NumError> {
        if !value.is_finite() {
            return Err(NumError::Unrepresentable("non-finite float"));
        }
        if value < 0.0 {
            return Err(NumError::Unrepresentable("negative float"));
        }
        if value.fract() != 0.0 {
            return Err(NumError::Unrepresentable("fractional float"));
        }
        if value == 0.0 {
            return Ok(Magnitude::zero());
        }

        // Decompose into mantissa * 2^exponent. An integral value keeps
        // the low bits of the mantissa zero whenever the exponent is
        // negative, so the shift below is exact.
        let bits = value.to_bits();
        let exponent = ((bits >> 52) & 0x7FF) as i64 - 1075;
        let mantissa = (bits & ((1 << 52) - 1)) | (1 << 52);
        let m = Magnitude::from_word(mantissa);
        Ok(if exponent >= 0 {
            m.shl(exponent as usize)
        } else {
            m.shr((-exponent) as usize)
        })
    }

    /// Truncating conversion from a float: the fractional part is
    /// dropped. Fails for non-finite values and values at or below -1.
    pub fn from_f64_truncating(value: f64) -> Result<Magnitude, NumError> {
        if !value.is_finite() {
            return Err(NumError::Unrepresentable("non-finite float"));
        }
        let truncated = value.trunc();
        if truncated < 0.0 {
            return Err(NumError::Unrepresentable("negative float"));
        }
        Magnitude::from_f64_exact(truncated)
    }

    /// Clamping conversion from a float: negative values clamp to zero,
    /// the fractional part is dropped. Fails only for NaN or infinity.
    pub fn from_f64_clamping(value: f64) -> Result<Magnitude, NumError> {
        if !value.is_finite() {
            return Err(NumError::Unrepresentable("non-finite float"));
        }
        if value <= 0.0 {
            return Ok(Magnitude::zero());
        }
        Magnitude::from_f64_exact(value.trunc())
    }

    /// Truncating conversion from a signed integer: the raw two's
    /// complement bit pattern becomes the value.
    pub fn from_i64_truncating(value: i64) -> Magnitude {
        Magnitude::from_word(value as u64)
    }

    /// Clamping conversion from a signed integer: negatives clamp to zero.
    pub fn from_i64_clamping(value: i64) -> Magnitude {
        Magnitude::from_word(value.max(0) as u64)
    }

    /// Checked narrowing to a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        if self.num_words() == 1 {
            Some(self.word(0))
        } else {
            None
        }
    }
}

// Unsigned primitives fit a single word (u128 aside); signed primitives
// convert exactly into a magnitude only when non-negative.
macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Magnitude {
            fn from(value: $t) -> Self {
                Magnitude::from_word(value as Word)
            }
        }

        impl From<$t> for SignedInt {
            fn from(value: $t) -> Self {
                SignedInt::from_magnitude(Magnitude::from_word(value as Word))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, usize);

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for Magnitude {
            type Error = NumError;

            /// Exact conversion; negative values are not representable.
            fn try_from(value: $t) -> Result<Self, NumError> {
                if value < 0 {
                    return Err(NumError::Unrepresentable("negative integer"));
                }
                Ok(Magnitude::from_word(value as Word))
            }
        }

        impl From<$t> for SignedInt {
            fn from(value: $t) -> Self {
                SignedInt::from_i64(value as i64)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, isize);

impl From<u128> for Magnitude {
    fn from(value: u128) -> Self {
        Magnitude::from_words(vec![value as Word, (value >> WORD_BITS) as Word])
    }
}

impl From<u128> for SignedInt {
    fn from(value: u128) -> Self {
        SignedInt::from_magnitude(Magnitude::from(value))
    }
}

impl TryFrom<i128> for Magnitude {
    type Error = NumError;

    fn try_from(value: i128) -> Result<Self, NumError> {
        if value < 0 {
            return Err(NumError::Unrepresentable("negative integer"));
        }
        Ok(Magnitude::from(value as u128))
    }
}

impl From<i128> for SignedInt {
    fn from(value: i128) -> Self {
        let mag = Magnitude::from(value.unsigned_abs());
        match value {
            0 => SignedInt::zero(),
            v if v < 0 => SignedInt::new(Sign::Minus, mag),
            _ => SignedInt::new(Sign::Plus, mag),
        }
    }
}

impl SignedInt {
    /// Checked narrowing to an `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        let word = self.magnitude().to_u64()?;
        match self.sign() {
            Sign::Zero => Some(0),
            Sign::Plus => i64::try_from(word).ok(),
            Sign::Minus => {
                if word <= 1 << 63 {
                    Some((word as i64).wrapping_neg())
                } else {
                    None
                }
            }
        }
    }
}
