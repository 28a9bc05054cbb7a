//! Length grammar.
//!
//! Short form (length < 128): a single byte holding the length itself.
//! Long form (length >= 128): a lead byte `0x80 | k` where `k` is the
//! minimal number of big-endian bytes needed to represent the length,
//! followed by those `k` bytes.

use crate::error::{TlvError, result::TlvResult};

const LONG_FORM_MASK: u8 = 0b1000_0000;

/// Encode a value length into its short or long form bytes.
#[must_use]
pub(crate) fn encode(length: usize) -> Vec<u8> {
    if length < 128 {
        // short form
        return vec![u8::try_from(length).unwrap_or_default()];
    }

    // long form: minimal big-endian bytes, prefixed with 0x80 | count
    let mut length_bytes = Vec::new();
    let mut remaining = length;
    while remaining > 0 {
        length_bytes.insert(0, u8::try_from(remaining & 0xFF).unwrap_or_default());
        remaining >>= 8;
    }

    let mut encoded = vec![LONG_FORM_MASK | u8::try_from(length_bytes.len()).unwrap_or_default()];
    encoded.extend_from_slice(&length_bytes);
    encoded
}

/// Read one length from the head of `data`, returning the length and the
/// number of bytes consumed.
pub(crate) fn read(data: &[u8]) -> TlvResult<(usize, usize)> {
    let Some(&lead) = data.first() else {
        return Err(TlvError::InvalidLength("length is empty".to_owned()));
    };

    if lead < 128 {
        // short form
        return Ok((usize::from(lead), 1));
    }

    // long form
    let length_bytes = usize::from(lead & !LONG_FORM_MASK);
    if length_bytes > size_of::<usize>() {
        return Err(TlvError::InvalidLength(format!(
            "length of {length_bytes} bytes is too large"
        )));
    }
    if data.len() < length_bytes + 1 {
        return Err(TlvError::InvalidLength("length is incomplete".to_owned()));
    }

    let mut length: usize = 0;
    for &byte in &data[1..=length_bytes] {
        length = length << 8 | usize::from(byte);
    }

    Ok((length, length_bytes + 1))
}
