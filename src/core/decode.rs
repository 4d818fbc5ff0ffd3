use crate::core::area::CodeArea;
use crate::core::constants::{
    GRID_COLUMNS, GRID_ROWS, LATITUDE_MAX, LONGITUDE_MAX, MAX_CODE_LENGTH, PADDING_CHARACTER,
    PAIR_CODE_LENGTH, PAIR_RESOLUTIONS, SEPARATOR, digit_value,
};
use crate::core::validate::is_full;
use crate::util::error::PlusCodeError;

/// Decodes a full Plus Code into the area it identifies.
///
/// Separator and padding are ignored; digits past the fifteenth add no
/// precision and are skipped.
///
/// # Errors
///
/// Returns [`PlusCodeError::InvalidCode`] unless `code` is a valid full code.
///
/// # Example
/// ```
/// use pluscode_rs::decode;
///
/// # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
/// let area = decode("849VQHFJ+X6")?;
/// assert_eq!(area.code_length, 10);
/// assert!((area.center_latitude() - 37.7749).abs() < 0.001);
/// # Ok(())
/// # }
/// ```
pub fn decode(code: impl AsRef<[u8]>) -> Result<CodeArea, PlusCodeError> {
    let code = code.as_ref();
    if !is_full(code) {
        tracing::debug!(
            code = %String::from_utf8_lossy(code),
            "rejecting code that is not a valid full code"
        );
        return Err(PlusCodeError::invalid_code(code));
    }

    let digits = code
        .iter()
        .filter(|&&byte| byte != SEPARATOR && byte != PADDING_CHARACTER)
        .filter_map(|&byte| digit_value(byte))
        .take(MAX_CODE_LENGTH as usize);

    let mut lat_sum = 0.0;
    let mut lng_sum = 0.0;
    let mut lat_resolution = PAIR_RESOLUTIONS[0];
    let mut lng_resolution = PAIR_RESOLUTIONS[0];
    let mut code_length = 0u8;

    for (index, value) in digits.enumerate() {
        let value = value as usize;
        if index < PAIR_CODE_LENGTH {
            let resolution = PAIR_RESOLUTIONS[index / 2];
            if index % 2 == 0 {
                lat_sum += value as f64 * resolution;
                lat_resolution = resolution;
            } else {
                lng_sum += value as f64 * resolution;
                lng_resolution = resolution;
            }
        } else {
            lat_resolution /= GRID_ROWS as f64;
            lng_resolution /= GRID_COLUMNS as f64;
            lat_sum += (value / GRID_COLUMNS) as f64 * lat_resolution;
            lng_sum += (value % GRID_COLUMNS) as f64 * lng_resolution;
        }
        code_length += 1;
    }

    let south = lat_sum - LATITUDE_MAX;
    let west = lng_sum - LONGITUDE_MAX;
    Ok(CodeArea::new(
        south,
        west,
        south + lat_resolution,
        west + lng_resolution,
        code_length,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_decode_reference_code() -> Result<(), PlusCodeError> {
        let area = decode("849VQHFJ+X6")?;

        assert_close(area.south_latitude, 37.774875);
        assert_close(area.north_latitude, 37.775);
        assert_close(area.west_longitude, -122.4195);
        assert_close(area.east_longitude, -122.419375);
        assert_eq!(area.code_length, 10);
        Ok(())
    }

    #[test]
    fn test_decode_origin() -> Result<(), PlusCodeError> {
        let area = decode("6FG22222+22")?;

        assert_close(area.south_latitude, 0.0);
        assert_close(area.west_longitude, 0.0);
        assert_close(area.north_latitude, 0.000125);
        assert_close(area.east_longitude, 0.000125);
        Ok(())
    }

    #[test]
    fn test_decode_padded_code() -> Result<(), PlusCodeError> {
        let area = decode("6FG20000+")?;

        assert_eq!(area.code_length, 4);
        assert_close(area.south_latitude, 0.0);
        assert_close(area.north_latitude, 1.0);
        assert_close(area.east_longitude, 1.0);
        Ok(())
    }

    #[test]
    fn test_decode_single_latitude_digit_after_separator() -> Result<(), PlusCodeError> {
        let area = decode("849VQHFJ+X")?;

        assert_eq!(area.code_length, 9);
        assert_close(area.north_latitude - area.south_latitude, 0.000125);
        assert_close(area.east_longitude - area.west_longitude, 0.0025);
        Ok(())
    }

    #[test]
    fn test_decode_grid_digits() -> Result<(), PlusCodeError> {
        let area = decode("849VQHFJ+X69")?;

        assert_eq!(area.code_length, 11);
        assert_close(area.south_latitude, 37.7749);
        assert_close(area.west_longitude, -122.41940625);
        assert_close(area.north_latitude - area.south_latitude, 0.000025);
        assert_close(area.east_longitude - area.west_longitude, 0.00003125);
        Ok(())
    }

    #[test]
    fn test_digits_past_fifteen_are_ignored() -> Result<(), PlusCodeError> {
        let exact = decode("849VQHFJ+X692525")?;
        let longer = decode("849VQHFJ+X692525XXXX")?;

        assert_eq!(longer.code_length, 15);
        assert_eq!(exact, longer);
        Ok(())
    }

    #[test]
    fn test_decode_rejects_invalid_input() {
        for code in ["invalid", "", "849VQHFJX6", "QHFJ+X6", "F2222222+22", "849VQHFJ+X6+"] {
            assert!(
                matches!(decode(code), Err(PlusCodeError::InvalidCode(_))),
                "{code} should be rejected"
            );
        }
    }
}
