//! # pluscode-rs
//!
//! Encoding and decoding of [Open Location Codes](https://maps.google.com/pluscodes/)
//! ("Plus Codes"): short strings such as `849VQHFJ+X6` that identify a
//! rectangle on the Earth's surface.
//!
//! There are currently three main entry points.
//!
//! ### 1. Codec functions - no allocation
//!
//! ```
//! use pluscode_rs::{decode, encode, is_full};
//!
//! # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
//! let mut buf = [0u8; pluscode_rs::MAX_ENCODED_LEN];
//! let len = encode(51.5074, -0.1278, 10, &mut buf)?;
//! assert_eq!(&buf[..len], b"9C3XGV4C+XV");
//! assert!(is_full(&buf[..len]));
//!
//! let area = decode(&buf[..len])?;
//! println!("{}, {}", area.center_latitude(), area.center_longitude());
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `PlusCode` - owned codes
//!
//! ```
//! use pluscode_rs::PlusCode;
//! use geo_types::point;
//!
//! # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
//! let code = PlusCode::from_wgs84(&point! { x: 139.6503, y: 35.6762 }, 11)?;
//! println!("{}", code);
//! let polygon = code.decode()?.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Batches - parallel over slices
//!
//! ```
//! use pluscode_rs::{EncodeConfig, PlusCodesToAreas, encode_many};
//!
//! # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
//! let coords = vec![(-122.4194, 37.7749), (151.2093, -33.8688)];
//! let codes = encode_many(&coords, &EncodeConfig::new(12))?;
//! let polygons = codes.to_polygons();
//! assert_eq!(polygons.len(), 2);
//! # Ok(())
//! # }
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::{EncodeConfig, PlusCode, PlusCodesToAreas, decode_many, encode_many};
pub use crate::core::{
    CODE_ALPHABET, CodeArea, DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, MAX_ENCODED_LEN,
    MIN_CODE_LENGTH, PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION,
    clip_latitude, compute_latitude_precision, decode, encode, encoded_len, is_full, is_short,
    is_valid, normalize_code_length, normalize_longitude,
};
pub use crate::util::{Coordinate, PlusCodeError};

pub use geo_types;
