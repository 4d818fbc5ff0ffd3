use crate::core::constants::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, MIN_CODE_LENGTH};
use crate::core::numeric::{encoded_len, normalize_code_length};
use crate::util::error::PlusCodeError;
use serde::{Deserialize, Serialize};

/// Encoding settings shared by [`PlusCode`](crate::PlusCode) and the batch helpers.
///
/// Deserialises from JSON (or any serde format) with missing fields taking
/// their defaults, so `{}` yields a 10-digit configuration.
///
/// # Example
/// ```
/// use pluscode_rs::EncodeConfig;
///
/// let config = EncodeConfig::new(7);
/// assert_eq!(config.effective_length(), 8);
/// assert_eq!(config.encoded_len(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    /// Requested number of significant digits. Normalised by the encoder.
    pub code_length: u8,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl EncodeConfig {
    /// Lenient constructor: any length is accepted and normalised at encode time.
    pub fn new(code_length: u8) -> Self {
        Self { code_length }
    }

    /// Accepts only lengths the encoder would use unchanged.
    ///
    /// # Errors
    ///
    /// [`PlusCodeError::InvalidLength`] for lengths outside 2-15 and for odd
    /// lengths below 8.
    pub fn strict(code_length: u8) -> Result<Self, PlusCodeError> {
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code_length)
            || normalize_code_length(code_length) != code_length
        {
            return Err(PlusCodeError::InvalidLength(code_length));
        }
        Ok(Self { code_length })
    }

    pub fn code_length(mut self, code_length: u8) -> Self {
        self.code_length = code_length;
        self
    }

    /// The number of digits the encoder will actually emit.
    pub fn effective_length(&self) -> u8 {
        normalize_code_length(self.code_length)
    }

    /// Size in bytes of a code produced with this configuration.
    pub fn encoded_len(&self) -> usize {
        encoded_len(self.effective_length())
    }
}
