use thiserror::Error;

/// Error type for pluscode-rs operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlusCodeError {
    /// The input is not a valid full Plus Code.
    #[error("Invalid code: {0:?}")]
    InvalidCode(String),
    /// The code length is outside the supported range (2-15).
    #[error("Invalid code length: {0}")]
    InvalidLength(u8),
    /// The output buffer cannot hold the encoded code.
    #[error("Buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

impl PlusCodeError {
    pub(crate) fn invalid_code(code: &[u8]) -> Self {
        PlusCodeError::InvalidCode(String::from_utf8_lossy(code).into_owned())
    }
}
