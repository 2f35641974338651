//! Random value generation backed by the OS randomness source.

use apnum_types::NumError;

use crate::magnitude::Magnitude;
use crate::signed::SignedInt;

impl Magnitude {
    /// Generate a uniform random value of at most `bits` bits.
    ///
    /// Fills whole random bytes, then masks the excess so the value lies
    /// in `[0, 2^bits)`.
    pub fn random(bits: usize) -> Result<Magnitude, NumError> {
        if bits == 0 {
            return Ok(Magnitude::zero());
        }
        let num_bytes = bits.div_ceil(8);
        let mut buf = vec![0u8; num_bytes];
        getrandom::getrandom(&mut buf).map_err(|_| NumError::RandSourceFailed)?;

        // Mask excess bits in the most significant byte
        let excess = num_bytes * 8 - bits;
        if excess > 0 {
            buf[num_bytes - 1] &= 0xFF >> excess;
        }

        Ok(Magnitude::from_bytes_le(&buf))
    }

    /// Generate a uniform random value in `[0, bound)` by rejection
    /// sampling: candidates use just enough bits to cover the range and
    /// out-of-range draws are discarded, avoiding modulo bias.
    pub fn random_below(bound: &Magnitude) -> Result<Magnitude, NumError> {
        if bound.is_zero() {
            return Err(NumError::EmptyRange);
        }
        let bits = bound.bit_len();
        loop {
            let candidate = Magnitude::random(bits)?;
            if candidate < *bound {
                return Ok(candidate);
            }
        }
    }

    /// Generate a uniform random value in the half-open range `[low, high)`.
    pub fn random_range(low: &Magnitude, high: &Magnitude) -> Result<Magnitude, NumError> {
        if low >= high {
            return Err(NumError::EmptyRange);
        }
        let width = high.sub(low);
        Ok(low.add(&Magnitude::random_below(&width)?))
    }

    /// Generate a uniform random value in the closed range `[low, high]`.
    pub fn random_range_inclusive(
        low: &Magnitude,
        high: &Magnitude,
    ) -> Result<Magnitude, NumError> {
        if low > high {
            return Err(NumError::EmptyRange);
        }
        let width = high.sub(low).add(&Magnitude::one());
        Ok(low.add(&Magnitude::random_below(&width)?))
    }
}

impl SignedInt {
    /// Generate a uniform random value in the half-open range `[low, high)`,
    /// sampled as an offset into the range's width.
    pub fn random_range(low: &SignedInt, high: &SignedInt) -> Result<SignedInt, NumError> {
        if low >= high {
            return Err(NumError::EmptyRange);
        }
        let width = high.sub(low);
        let offset = Magnitude::random_below(width.magnitude())?;
        Ok(low.add(&SignedInt::from_magnitude(offset)))
    }
}
