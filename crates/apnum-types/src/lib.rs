#![forbid(unsafe_code)]
#![doc = "Common error types shared across the apnum workspace."]

pub mod error;

pub use error::*;
