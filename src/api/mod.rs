pub mod batch;
pub mod config;
pub mod plus_code;

pub use batch::{PlusCodesToAreas, decode_many, encode_many};
pub use config::EncodeConfig;
pub use plus_code::PlusCode;
