use crate::api::config::EncodeConfig;
use crate::api::plus_code::PlusCode;
use crate::core::area::CodeArea;
use crate::core::decode::decode;
use crate::util::coord::Coordinate;
use crate::util::error::PlusCodeError;
use geo_types::Polygon;
use rayon::prelude::*;

/// Encodes every coordinate in parallel, preserving input order.
///
/// # Example
/// ```
/// use pluscode_rs::{EncodeConfig, encode_many};
///
/// # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
/// let coords = [(0.0, 0.0), (-122.4194, 37.7749)];
/// let codes = encode_many(&coords, &EncodeConfig::default())?;
/// assert_eq!(codes[1].as_str(), "849VQHFJ+X6");
/// # Ok(())
/// # }
/// ```
pub fn encode_many<C>(coords: &[C], config: &EncodeConfig) -> Result<Vec<PlusCode>, PlusCodeError>
where
    C: Coordinate + Sync,
{
    tracing::debug!(
        count = coords.len(),
        code_length = config.effective_length(),
        "encoding batch"
    );
    coords
        .par_iter()
        .map(|coord| PlusCode::with_config(coord, config))
        .collect()
}

/// Decodes every code in parallel. Each entry fails independently.
pub fn decode_many<S>(codes: &[S]) -> Vec<Result<CodeArea, PlusCodeError>>
where
    S: AsRef<[u8]> + Sync,
{
    tracing::debug!(count = codes.len(), "decoding batch");
    codes.par_iter().map(|code| decode(code)).collect()
}

/// Trait for converting collections of [`PlusCode`]s to areas and geometries.
///
/// Implemented for `[PlusCode]` and therefore `Vec<PlusCode>`.
pub trait PlusCodesToAreas {
    /// Decodes each code; short codes yield an error in their slot.
    fn to_areas(&self) -> Vec<Result<CodeArea, PlusCodeError>>;
    /// Rectangles of the decodable codes, skipping short ones.
    fn to_polygons(&self) -> Vec<Polygon<f64>>;
}

impl PlusCodesToAreas for [PlusCode] {
    fn to_areas(&self) -> Vec<Result<CodeArea, PlusCodeError>> {
        decode_many(self)
    }

    fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.par_iter()
            .filter_map(|code| code.decode().ok())
            .map(|area| area.to_polygon())
            .collect()
    }
}
