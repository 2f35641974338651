//! Fermat probable-prime testing and probable-prime generation.

use apnum_types::NumError;

use crate::magnitude::Magnitude;
use crate::signed::SignedInt;

/// Small primes for the trial-division screen.
const SMALL_PRIMES: [u64; 11] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31];

/// Product of `SMALL_PRIMES`; a shared factor with this means composite.
const SMALL_PRIME_PRODUCT: u64 = 200_560_490_130;

/// Number of random Fermat witnesses tried before reporting probable prime.
const FERMAT_ROUNDS: usize = 128;

impl SignedInt {
    /// Fermat probable-prime test.
    ///
    /// Screens against the small primes, then runs [`FERMAT_ROUNDS`]
    /// rounds with uniform random witnesses `a` in `[2, n)`, declaring
    /// composite on any `a^(n-1) mod n != 1`.
    ///
    /// The test is one-sided: a prime is never reported composite, but a
    /// known class of composites (Carmichael numbers) passes every Fermat
    /// round and is misreported as probably prime. This is a documented
    /// limitation of the design, not a bug; callers needing a strong test
    /// must bring their own.
    pub fn is_probable_prime(&self) -> Result<bool, NumError> {
        let one = SignedInt::one();
        if self <= &one {
            return Ok(false);
        }

        for &p in &SMALL_PRIMES {
            if self == &SignedInt::from_i64(p as i64) {
                return Ok(true);
            }
        }
        let product = Magnitude::from_word(SMALL_PRIME_PRODUCT);
        if !self.magnitude().gcd(&product).is_one() {
            return Ok(false);
        }

        let n_minus_1 = self.sub(&one);
        let two = Magnitude::from_word(2);
        for _ in 0..FERMAT_ROUNDS {
            let witness = Magnitude::random_range(&two, self.magnitude())?;
            let a = SignedInt::from_magnitude(witness);
            if a.mod_pow(&n_minus_1, self) != one {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Generate a probable prime of at most `bits` bits by resampling
    /// until [`is_probable_prime`](SignedInt::is_probable_prime) accepts.
    ///
    /// The loop is unbounded; by the prime number theorem the expected
    /// attempt count is on the order of `ln(2^bits)`.
    pub fn gen_prime(bits: usize) -> Result<SignedInt, NumError> {
        loop {
            let candidate = SignedInt::from_magnitude(Magnitude::random(bits)?);
            if candidate.is_probable_prime()? {
                return Ok(candidate);
            }
        }
    }
}
