use tracing::trace;

use crate::{
    error::{TlvError, result::TlvResult},
    tlv::Tlv,
    wire::{length, tag},
};

/// Nesting ceiling for decoded trees. Externally supplied data must not be
/// able to exhaust the stack through recursion.
const MAX_DEPTH: usize = 64;

/// Decode wire bytes into a list of TLVs.
///
/// Tag text is normalized to uppercase hex. A lone `0x00` tag byte between
/// data objects is treated as meaningless padding and skipped. Any
/// malformed tag or length, or a value longer than the remaining buffer,
/// aborts the whole call; no partial tree is returned.
pub fn decode(data: &[u8]) -> TlvResult<Vec<Tlv>> {
    decode_level(data, 0)
}

fn decode_level(mut data: &[u8], depth: usize) -> TlvResult<Vec<Tlv>> {
    if depth > MAX_DEPTH {
        return Err(TlvError::NestingTooDeep(MAX_DEPTH));
    }

    let mut tlvs = Vec::new();

    while !data.is_empty() {
        let (tag_bytes, consumed) = tag::read(data)?;

        // Before, between, or after TLV-coded data objects, '00' bytes
        // without any meaning may occur (for example, due to erased
        // or modified TLV-coded data objects). Ignore them.
        if tag_bytes == [0x00] {
            data = &data[consumed..];
            continue;
        }

        let hex_tag = hex::encode_upper(tag_bytes);
        data = &data[consumed..];

        let (value_length, consumed) = length::read(data).map_err(|e| match e {
            TlvError::InvalidLength(msg) => {
                TlvError::InvalidLength(format!("tag {hex_tag}: {msg}"))
            }
            other => other,
        })?;
        data = &data[consumed..];

        if data.len() < value_length {
            return Err(TlvError::InsufficientData {
                tag: hex_tag,
                expected: value_length,
                remaining: data.len(),
            });
        }
        let (value, rest) = data.split_at(value_length);
        data = rest;

        trace!("decoded tag {hex_tag} with {value_length} value bytes");

        if tag::is_constructed(tag_bytes[0]) {
            let children = decode_level(value, depth + 1)?;
            tlvs.push(Tlv::constructed(hex_tag, children));
        } else {
            tlvs.push(Tlv::primitive(hex_tag, value));
        }
    }

    Ok(tlvs)
}
