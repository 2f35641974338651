#![forbid(unsafe_code)]
#![doc = "Umbrella crate re-exporting the apnum arbitrary-precision arithmetic workspace."]

pub use apnum_bignum::{Magnitude, Sign, SignedInt, WordBuf};
pub use apnum_types::NumError;
