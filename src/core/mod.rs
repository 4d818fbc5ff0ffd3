pub mod area;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod numeric;
pub mod validate;

pub use area::CodeArea;
pub use constants::{
    CODE_ALPHABET, DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, MAX_ENCODED_LEN, MIN_CODE_LENGTH,
    PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION,
};
pub use decode::decode;
pub use encode::encode;
pub use numeric::{
    clip_latitude, compute_latitude_precision, encoded_len, normalize_code_length,
    normalize_longitude,
};
pub use validate::{is_full, is_short, is_valid};
