/// The 20 symbols used for code digits, indexed by digit value.
pub const CODE_ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";

/// Number of symbols in [`CODE_ALPHABET`].
pub const ENCODING_BASE: usize = 20;

/// Separates the first eight digits from the rest of the code.
pub const SEPARATOR: u8 = b'+';

/// Index of the separator in a full code.
pub const SEPARATOR_POSITION: usize = 8;

/// Fills the unused pair digits of codes shorter than [`SEPARATOR_POSITION`].
pub const PADDING_CHARACTER: u8 = b'0';

/// Number of digits encoded as alternating latitude/longitude pairs.
pub const PAIR_CODE_LENGTH: usize = 10;

/// Length used when the caller asks for fewer than [`MIN_CODE_LENGTH`] digits.
pub const DEFAULT_CODE_LENGTH: u8 = 10;

/// Smallest meaningful code length (one digit pair).
pub const MIN_CODE_LENGTH: u8 = 2;

/// Longest supported code length; further digits add no precision.
pub const MAX_CODE_LENGTH: u8 = 15;

/// Longest encoded code in bytes: fifteen digits plus the separator.
pub const MAX_ENCODED_LEN: usize = MAX_CODE_LENGTH as usize + 1;

/// Grid refinement rows (latitude).
pub const GRID_ROWS: usize = 5;

/// Grid refinement columns (longitude).
pub const GRID_COLUMNS: usize = 4;

pub const LATITUDE_MAX: f64 = 90.0;
pub const LONGITUDE_MAX: f64 = 180.0;

/// Cell height/width in degrees for each of the five digit pairs.
pub const PAIR_RESOLUTIONS: [f64; 5] = [20.0, 1.0, 0.05, 0.0025, 0.000125];

/// Sentinel in [`DECODE_TABLE`] for bytes outside the alphabet.
pub(crate) const INVALID_DIGIT: u8 = u8::MAX;

/// Inverse of [`CODE_ALPHABET`]: maps an ASCII byte to its digit value.
pub(crate) const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID_DIGIT; 128];
    let mut i = 0;
    while i < ENCODING_BASE {
        table[CODE_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the digit value of `byte`, or `None` if it is not in the alphabet.
#[inline]
pub(crate) fn digit_value(byte: u8) -> Option<u8> {
    match DECODE_TABLE.get(byte as usize) {
        Some(&INVALID_DIGIT) | None => None,
        Some(&value) => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_table_inverts_alphabet() {
        for (value, &symbol) in CODE_ALPHABET.iter().enumerate() {
            assert_eq!(digit_value(symbol), Some(value as u8));
        }
    }

    #[test]
    fn test_excluded_symbols_have_no_value() {
        for byte in [b'0', b'1', b'A', b'I', b'L', b'O', b'+', b'c', 0xC3] {
            assert_eq!(digit_value(byte), None);
        }
    }
}
