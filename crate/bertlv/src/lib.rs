//! BER-TLV (Basic Encoding Rules Tag-Length-Value) encoding and decoding,
//! as used by EMV and other smart-card protocols.
//!
//! The crate decodes a byte buffer into a tree of [`Tlv`] nodes and encodes
//! such a tree back to the identical byte sequence. On top of the codec sit
//! tag-addressed lookup helpers ([`find_by_path`], [`find_first`],
//! [`TagMap`]), a serde-based struct mapper ([`from_tlv`]) and a
//! pretty-printer with masking filters for sensitive fields.

mod display;
mod emv_tags;
mod error;
pub mod filters;
mod lookup;
mod tlv;
mod unmarshal;
mod wire;

pub use display::{pretty_print, pretty_print_with};
pub use error::{
    TlvError,
    result::{TlvResult, TlvResultHelper},
};
pub use filters::{FilterRegistry, ValueFilter, mask_pan, mask_track2};
pub use lookup::{TagMap, TagMapStats, find_by_path, find_first};
pub use tlv::{Tlv, TlvValue, copy_tags};
pub use unmarshal::from_tlv;
pub use wire::{decode, encode};

#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
#[cfg(test)]
mod tests;
