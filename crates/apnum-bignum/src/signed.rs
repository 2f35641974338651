//! Signed arbitrary-precision integer: a tri-state sign over a magnitude.

use crate::magnitude::Magnitude;
use zeroize::Zeroize;

/// Sign of a [`SignedInt`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Minus,
    Zero,
    Plus,
}

impl Sign {
    fn flip(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::Zero => Sign::Zero,
            Sign::Plus => Sign::Minus,
        }
    }

    fn product(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Plus,
            _ => Sign::Minus,
        }
    }
}

/// A signed arbitrary-precision integer.
///
/// Invariant: `sign == Sign::Zero` exactly when the magnitude is zero;
/// the magnitude itself never encodes sign.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SignedInt {
    #[zeroize(skip)]
    sign: Sign,
    mag: Magnitude,
}

impl SignedInt {
    /// The value zero.
    pub fn zero() -> Self {
        Self {
            sign: Sign::Zero,
            mag: Magnitude::zero(),
        }
    }

    /// The value one.
    pub fn one() -> Self {
        Self {
            sign: Sign::Plus,
            mag: Magnitude::one(),
        }
    }

    /// Build from a sign and magnitude, canonicalizing zero.
    ///
    /// # Panics
    ///
    /// Panics if `sign` is `Sign::Zero` while `mag` is nonzero.
    pub fn new(sign: Sign, mag: Magnitude) -> Self {
        if mag.is_zero() {
            return Self::zero();
        }
        assert!(sign != Sign::Zero, "zero sign with nonzero magnitude");
        Self { sign, mag }
    }

    /// Build a non-negative value from a magnitude.
    pub fn from_magnitude(mag: Magnitude) -> Self {
        let sign = if mag.is_zero() { Sign::Zero } else { Sign::Plus };
        Self { sign, mag }
    }

    /// Build from a machine integer.
    pub fn from_i64(value: i64) -> Self {
        let sign = match value {
            0 => Sign::Zero,
            v if v < 0 => Sign::Minus,
            _ => Sign::Plus,
        };
        Self {
            sign,
            mag: Magnitude::from_word(value.unsigned_abs()),
        }
    }

    /// Return the sign.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Return the magnitude.
    pub fn magnitude(&self) -> &Magnitude {
        &self.mag
    }

    /// Return true if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// Return true if this value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    /// Absolute value.
    pub fn abs(&self) -> SignedInt {
        SignedInt::from_magnitude(self.mag.clone())
    }

    /// Sign as a value: -1, 0, or +1.
    pub fn signum(&self) -> SignedInt {
        match self.sign {
            Sign::Minus => SignedInt::from_i64(-1),
            Sign::Zero => SignedInt::zero(),
            Sign::Plus => SignedInt::one(),
        }
    }

    /// Add: dispatch on the sign combination, reducing to a magnitude
    /// add or subtract with the final sign chosen by the larger operand.
    pub fn add(&self, other: &SignedInt) -> SignedInt {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        if self.sign == other.sign {
            return SignedInt::new(self.sign, self.mag.add(&other.mag));
        }
        match self.mag.cmp(&other.mag) {
            std::cmp::Ordering::Equal => SignedInt::zero(),
            std::cmp::Ordering::Greater => SignedInt::new(self.sign, self.mag.sub(&other.mag)),
            std::cmp::Ordering::Less => SignedInt::new(other.sign, other.mag.sub(&self.mag)),
        }
    }

    /// Subtract: `self + (-other)`.
    pub fn sub(&self, other: &SignedInt) -> SignedInt {
        self.add(&other.neg())
    }

    /// Multiply; the result sign is the product of the operand signs.
    pub fn mul(&self, other: &SignedInt) -> SignedInt {
        SignedInt::new(self.sign.product(other.sign), self.mag.mul(&other.mag))
    }

    /// Negate.
    pub fn neg(&self) -> SignedInt {
        SignedInt {
            sign: self.sign.flip(),
            mag: self.mag.clone(),
        }
    }

    /// Truncating division: quotient rounds toward zero, the remainder
    /// takes the dividend's sign, and `divisor * q + r == self`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_rem(&self, divisor: &SignedInt) -> (SignedInt, SignedInt) {
        let (q, r) = self.mag.div_rem(&divisor.mag);
        (
            SignedInt::new(self.sign.product(divisor.sign), q),
            SignedInt::new(self.sign, r),
        )
    }

    /// Remainder whose sign tracks the divisor: the truncated remainder,
    /// corrected by adding the divisor when the signs disagree. For a
    /// positive divisor this is the Euclidean (non-negative) remainder,
    /// unlike the truncating `div_rem` remainder which tracks the
    /// dividend.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn rem_floor(&self, divisor: &SignedInt) -> SignedInt {
        let (_, r) = self.div_rem(divisor);
        if !r.is_zero() && r.sign != divisor.sign {
            r.add(divisor)
        } else {
            r
        }
    }
}

impl std::fmt::Debug for SignedInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "SignedInt({sign}0x{})", self.mag.to_hex())
    }
}

impl PartialEq for SignedInt {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.mag == other.mag
    }
}

impl Eq for SignedInt {}

impl PartialOrd for SignedInt {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SignedInt {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        fn rank(s: Sign) -> i8 {
            match s {
                Sign::Minus => -1,
                Sign::Zero => 0,
                Sign::Plus => 1,
            }
        }
        match rank(self.sign).cmp(&rank(other.sign)) {
            Ordering::Equal if self.sign == Sign::Minus => {
                // Both negative: the larger magnitude is the smaller value.
                other.mag.cmp(&self.mag)
            }
            Ordering::Equal => self.mag.cmp(&other.mag),
            ord => ord,
        }
    }
}

impl std::ops::Add for &SignedInt {
    type Output = SignedInt;
    fn add(self, rhs: &SignedInt) -> SignedInt {
        SignedInt::add(self, rhs)
    }
}

impl std::ops::Sub for &SignedInt {
    type Output = SignedInt;
    fn sub(self, rhs: &SignedInt) -> SignedInt {
        SignedInt::sub(self, rhs)
    }
}

impl std::ops::Mul for &SignedInt {
    type Output = SignedInt;
    fn mul(self, rhs: &SignedInt) -> SignedInt {
        SignedInt::mul(self, rhs)
    }
}

impl std::ops::Div for &SignedInt {
    type Output = SignedInt;
    fn div(self, rhs: &SignedInt) -> SignedInt {
        self.div_rem(rhs).0
    }
}

impl std::ops::Rem for &SignedInt {
    type Output = SignedInt;
    fn rem(self, rhs: &SignedInt) -> SignedInt {
        self.rem_floor(rhs)
    }
}

impl std::ops::Neg for &SignedInt {
    type Output = SignedInt;
    fn neg(self) -> SignedInt {
        SignedInt::neg(self)
    }
}
