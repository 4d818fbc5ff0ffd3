use crate::core::constants::{
    CODE_ALPHABET, ENCODING_BASE, GRID_COLUMNS, GRID_ROWS, LATITUDE_MAX, LONGITUDE_MAX,
    PADDING_CHARACTER, PAIR_CODE_LENGTH, PAIR_RESOLUTIONS, SEPARATOR, SEPARATOR_POSITION,
};
use crate::core::numeric::{
    clip_latitude, compute_latitude_precision, encoded_len, normalize_code_length,
    normalize_longitude,
};
use crate::util::error::PlusCodeError;

/// Encodes a coordinate into `out` and returns the number of bytes written.
///
/// Latitude is clamped to `[-90, 90]` and longitude wrapped into `[-180, 180)`.
/// `code_length` is the number of significant digits: values below 2 mean 10,
/// values above 15 are clamped, and odd lengths below 8 are rounded up.
///
/// `out` must hold the digits, any padding and the separator, i.e.
/// `max(code_length, 8) + 1` bytes. Nothing is written when it is too small.
///
/// # Example
/// ```
/// use pluscode_rs::encode;
///
/// # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
/// let mut buf = [0u8; 16];
/// let len = encode(37.7749, -122.4194, 10, &mut buf)?;
/// assert_eq!(&buf[..len], b"849VQHFJ+X6");
/// # Ok(())
/// # }
/// ```
pub fn encode(
    latitude: f64,
    longitude: f64,
    code_length: u8,
    out: &mut [u8],
) -> Result<usize, PlusCodeError> {
    let code_length = normalize_code_length(code_length);
    let needed = encoded_len(code_length);
    if out.len() < needed {
        return Err(PlusCodeError::BufferTooSmall {
            needed,
            available: out.len(),
        });
    }

    // Values that round onto the pole or the antimeridian after shifting
    // would produce a first digit past the edge of the globe.
    let mut lat_val = clip_latitude(latitude) + LATITUDE_MAX;
    if lat_val >= 2.0 * LATITUDE_MAX {
        lat_val = 2.0 * LATITUDE_MAX - compute_latitude_precision(code_length);
    }
    let mut lng_val = normalize_longitude(longitude) + LONGITUDE_MAX;
    if lng_val >= 2.0 * LONGITUDE_MAX {
        lng_val = 0.0;
    }

    let digits = code_length as usize;
    let mut writer = CodeWriter::new(out);

    for digit in 0..digits.min(PAIR_CODE_LENGTH) {
        let resolution = PAIR_RESOLUTIONS[digit / 2];
        let value = if digit % 2 == 0 {
            take_digit(&mut lat_val, resolution, ENCODING_BASE)
        } else {
            take_digit(&mut lng_val, resolution, ENCODING_BASE)
        };
        writer.push_digit(value);
    }

    if digits < SEPARATOR_POSITION {
        writer.pad_to_separator();
    }

    let mut lat_step = PAIR_RESOLUTIONS[PAIR_RESOLUTIONS.len() - 1];
    let mut lng_step = lat_step;
    for _ in PAIR_CODE_LENGTH..digits {
        lat_step /= GRID_ROWS as f64;
        lng_step /= GRID_COLUMNS as f64;
        let row = take_digit(&mut lat_val, lat_step, GRID_ROWS);
        let col = take_digit(&mut lng_val, lng_step, GRID_COLUMNS);
        writer.push_digit(row * GRID_COLUMNS + col);
    }

    debug_assert_eq!(writer.pos, needed);
    Ok(writer.pos)
}

/// Takes the next digit (in `0..base`) off `remaining` at the given step size.
///
/// The clamp absorbs float rounding at the upper edge of a cell.
#[inline]
fn take_digit(remaining: &mut f64, step: f64, base: usize) -> usize {
    let value = ((*remaining / step).floor().max(0.0) as usize).min(base - 1);
    *remaining -= value as f64 * step;
    value
}

struct CodeWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    digits: usize,
}

impl<'a> CodeWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            digits: 0,
        }
    }

    fn push(&mut self, byte: u8) {
        self.buf[self.pos] = byte;
        self.pos += 1;
    }

    fn push_digit(&mut self, value: usize) {
        self.push(CODE_ALPHABET[value]);
        self.digits += 1;
        if self.digits == SEPARATOR_POSITION {
            self.push(SEPARATOR);
        }
    }

    fn pad_to_separator(&mut self) {
        while self.pos < SEPARATOR_POSITION {
            self.push(PADDING_CHARACTER);
        }
        self.push(SEPARATOR);
    }
}
