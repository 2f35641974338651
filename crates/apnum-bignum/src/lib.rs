#![forbid(unsafe_code)]
#![doc = "Arbitrary-precision integer arithmetic: unsigned magnitudes, signed integers, modular arithmetic, and probable-prime generation."]

mod buffer;
mod convert;
mod gcd;
mod hex;
mod magnitude;
mod modexp;
mod ops;
mod prime;
mod rand;
mod signed;

pub use buffer::WordBuf;
pub use magnitude::{Magnitude, Word, WORD_BITS};
pub use signed::{Sign, SignedInt};
