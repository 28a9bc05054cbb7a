//! The byte-level codec: tag and length grammar, recursive
//! encoding/decoding of TLV trees.

mod decoder;
mod encoder;
pub(crate) mod length;
pub(crate) mod tag;

pub use decoder::decode;
pub use encoder::encode;
