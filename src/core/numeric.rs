use crate::core::constants::{
    DEFAULT_CODE_LENGTH, GRID_ROWS, LATITUDE_MAX, LONGITUDE_MAX, MAX_CODE_LENGTH,
    MIN_CODE_LENGTH, PAIR_CODE_LENGTH, PAIR_RESOLUTIONS, SEPARATOR_POSITION,
};

/// Clamps a latitude into `[-90, 90]`.
#[inline]
pub fn clip_latitude(latitude: f64) -> f64 {
    latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX)
}

/// Wraps a longitude into `[-180, 180)`.
///
/// In-range values are returned untouched so no rounding is introduced.
#[inline]
pub fn normalize_longitude(longitude: f64) -> f64 {
    if (-LONGITUDE_MAX..LONGITUDE_MAX).contains(&longitude) {
        return longitude;
    }
    let wrapped = (longitude + LONGITUDE_MAX).rem_euclid(2.0 * LONGITUDE_MAX) - LONGITUDE_MAX;
    // rem_euclid can round a tiny negative remainder up to a full turn.
    if wrapped >= LONGITUDE_MAX {
        -LONGITUDE_MAX
    } else {
        wrapped
    }
}

/// Resolves a requested code length to the number of digits the encoder emits.
///
/// Lengths below 2 fall back to 10, lengths above 15 are clamped, and odd
/// lengths before the separator are rounded up so both halves of the last
/// pair are present.
pub fn normalize_code_length(code_length: u8) -> u8 {
    let normalized = if code_length < MIN_CODE_LENGTH {
        DEFAULT_CODE_LENGTH
    } else if code_length > MAX_CODE_LENGTH {
        MAX_CODE_LENGTH
    } else if (code_length as usize) < SEPARATOR_POSITION && code_length % 2 == 1 {
        code_length + 1
    } else {
        code_length
    };

    if normalized != code_length {
        tracing::trace!(
            requested = code_length,
            effective = normalized,
            "adjusted code length"
        );
    }
    normalized
}

/// Number of bytes `encode` writes for an already normalised length: the
/// digits, any padding up to the separator position, and the separator.
#[inline]
pub fn encoded_len(normalized_length: u8) -> usize {
    (normalized_length as usize).max(SEPARATOR_POSITION) + 1
}

/// Height in degrees of the area a code of `code_length` digits covers.
pub fn compute_latitude_precision(code_length: u8) -> f64 {
    let code_length = code_length.max(1) as usize;
    if code_length <= PAIR_CODE_LENGTH {
        return PAIR_RESOLUTIONS[code_length.div_ceil(2) - 1];
    }
    let grid_digits = (code_length - PAIR_CODE_LENGTH) as i32;
    PAIR_RESOLUTIONS[PAIR_RESOLUTIONS.len() - 1] / (GRID_ROWS as f64).powi(grid_digits)
}
