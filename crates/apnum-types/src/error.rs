/// Arithmetic and conversion errors.
#[derive(Debug, thiserror::Error)]
pub enum NumError {
    // String parsing errors
    #[error("invalid hex digit {0:?}")]
    InvalidHexDigit(char),

    // Conversion errors
    #[error("value not representable: {0}")]
    Unrepresentable(&'static str),

    // Random generation errors
    #[error("random source failed")]
    RandSourceFailed,
    #[error("sampling range is empty")]
    EmptyRange,
}
