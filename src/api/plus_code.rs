use crate::api::config::EncodeConfig;
use crate::core::area::CodeArea;
use crate::core::constants::{MAX_CODE_LENGTH, MAX_ENCODED_LEN, PADDING_CHARACTER, SEPARATOR};
use crate::core::decode::decode;
use crate::core::encode::encode;
use crate::core::validate::{is_full, is_short, is_valid};
use crate::util::coord::Coordinate;
use crate::util::error::PlusCodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An owned, validated Plus Code.
///
/// Construction always goes through the encoder or through [`FromStr`], so a
/// `PlusCode` is valid by construction. It may still be short, in which case
/// [`PlusCode::decode`] fails.
///
/// # Example
///
/// ```
/// use pluscode_rs::PlusCode;
///
/// # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
/// // (lng, lat), same order as geo-types points
/// let code = PlusCode::from_wgs84(&(-0.1278, 51.5074), 10)?;
/// assert_eq!(code.as_str(), "9C3XGV4C+XV");
///
/// let area = code.decode()?;
/// assert!(area.contains(&(-0.1278, 51.5074)));
///
/// let parsed: PlusCode = "9C3XGV4C+XV".parse()?;
/// assert_eq!(parsed, code);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlusCode(String);

impl PlusCode {
    /// Encode a latitude/longitude pair.
    pub fn from_lat_lng(
        latitude: f64,
        longitude: f64,
        code_length: u8,
    ) -> Result<Self, PlusCodeError> {
        let mut buf = [0u8; MAX_ENCODED_LEN];
        let written = encode(latitude, longitude, code_length, &mut buf)?;
        Ok(Self(buf[..written].iter().map(|&byte| byte as char).collect()))
    }

    /// Encode a WGS84 coordinate given as `x = longitude`, `y = latitude`.
    pub fn from_wgs84<C: Coordinate>(coord: &C, code_length: u8) -> Result<Self, PlusCodeError> {
        Self::from_lat_lng(coord.latitude(), coord.longitude(), code_length)
    }

    pub fn with_config<C: Coordinate>(
        coord: &C,
        config: &EncodeConfig,
    ) -> Result<Self, PlusCodeError> {
        Self::from_wgs84(coord, config.code_length)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_full(&self) -> bool {
        is_full(&self.0)
    }

    pub fn is_short(&self) -> bool {
        is_short(&self.0)
    }

    /// Number of significant digits, excluding separator and padding.
    ///
    /// Digits past the fifteenth carry no precision and are not counted.
    pub fn code_length(&self) -> usize {
        self.0
            .bytes()
            .filter(|&byte| byte != SEPARATOR && byte != PADDING_CHARACTER)
            .count()
            .min(MAX_CODE_LENGTH as usize)
    }

    /// Decode to the area this code covers. Fails for short codes.
    pub fn decode(&self) -> Result<CodeArea, PlusCodeError> {
        decode(&self.0)
    }
}

impl FromStr for PlusCode {
    type Err = PlusCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid(s) {
            tracing::debug!(code = s, "rejecting invalid plus code");
            return Err(PlusCodeError::invalid_code(s.as_bytes()));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for PlusCode {
    type Error = PlusCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !is_valid(&value) {
            tracing::debug!(code = %value, "rejecting invalid plus code");
            return Err(PlusCodeError::InvalidCode(value));
        }
        Ok(Self(value))
    }
}

impl From<PlusCode> for String {
    fn from(code: PlusCode) -> Self {
        code.0
    }
}

impl fmt::Display for PlusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlusCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<[u8]> for PlusCode {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
