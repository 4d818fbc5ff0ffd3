use crate::core::constants::{
    LATITUDE_MAX, LONGITUDE_MAX, PADDING_CHARACTER, PAIR_RESOLUTIONS, SEPARATOR,
    SEPARATOR_POSITION, digit_value,
};

/// Exclusive bound on the first latitude digit of a full code.
const FIRST_LATITUDE_DIGIT_LIMIT: u8 = (2.0 * LATITUDE_MAX / PAIR_RESOLUTIONS[0]) as u8;
/// Exclusive bound on the first longitude digit of a full code.
const FIRST_LONGITUDE_DIGIT_LIMIT: u8 = (2.0 * LONGITUDE_MAX / PAIR_RESOLUTIONS[0]) as u8;

/// Checks whether `code` is a well-formed Plus Code, full or short.
///
/// A valid code has exactly one `+` at an even index no greater than 8.
/// Padding (`0`) may only appear as a contiguous run ending at the separator
/// of a full code, starting at an even index, with nothing after the separator.
/// Every other character must come from the code alphabet.
///
/// # Example
/// ```
/// use pluscode_rs::is_valid;
///
/// assert!(is_valid("849VQHFJ+X6"));
/// assert!(is_valid("QHFJ+X6"));
/// assert!(!is_valid("849VQHFJX6"));
/// assert!(!is_valid("849LQHFJ+X6"));
/// ```
pub fn is_valid(code: impl AsRef<[u8]>) -> bool {
    separator_index(code.as_ref()).is_some()
}

/// Checks whether `code` is valid and has its separator at index 8.
///
/// The first two digits must also place the area on the globe, which rules
/// out first latitude digits of `C` and above and first longitude digits of `W`
/// and above.
pub fn is_full(code: impl AsRef<[u8]>) -> bool {
    let code = code.as_ref();
    if separator_index(code) != Some(SEPARATOR_POSITION) {
        return false;
    }
    let within = |byte: u8, limit: u8| digit_value(byte).is_some_and(|value| value < limit);
    within(code[0], FIRST_LATITUDE_DIGIT_LIMIT) && within(code[1], FIRST_LONGITUDE_DIGIT_LIMIT)
}

/// Checks whether `code` is valid and has its separator before index 8.
pub fn is_short(code: impl AsRef<[u8]>) -> bool {
    separator_index(code.as_ref()).is_some_and(|index| index < SEPARATOR_POSITION)
}

/// Returns the separator index of a valid code, or `None` if `code` is invalid.
pub(crate) fn separator_index(code: &[u8]) -> Option<usize> {
    if code.len() < 2 {
        return None;
    }

    let mut separator = None;
    let mut padding_start = None;

    for (index, &byte) in code.iter().enumerate() {
        match byte {
            SEPARATOR => {
                if separator.is_some() || index > SEPARATOR_POSITION || index % 2 == 1 {
                    return None;
                }
                separator = Some(index);
            }
            PADDING_CHARACTER => {
                if separator.is_some() {
                    return None;
                }
                if padding_start.is_none() {
                    if index == 0 || index % 2 == 1 {
                        return None;
                    }
                    padding_start = Some(index);
                }
            }
            _ => {
                if padding_start.is_some() && separator.is_none() {
                    return None;
                }
                digit_value(byte)?;
            }
        }
    }

    let separator = separator?;
    if padding_start.is_some() && (separator != SEPARATOR_POSITION || separator + 1 != code.len())
    {
        return None;
    }
    Some(separator)
}
