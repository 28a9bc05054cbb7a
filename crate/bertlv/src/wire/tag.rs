//! Tag grammar: shape classification, validation and stream decoding.
//!
//! The low 5 bits of the first tag byte, all set, signal a multi-byte tag.
//! In a multi-byte tag every byte after the first except the last carries
//! the continuation bit (MSB); the last byte must not. Bit 0x20 of the
//! first byte marks the tag as constructed, independent of tag length.

use crate::{
    error::{TlvError, result::TlvResult},
    tlv_ensure,
};

const MULTI_BYTE_MASK: u8 = 0b0001_1111;
const CONSTRUCTED_MASK: u8 = 0b0010_0000;
const CONTINUATION_MASK: u8 = 0b1000_0000;

/// Whether a tag starting with `first` spans more than one byte.
#[must_use]
pub(crate) const fn is_multi_byte(first: u8) -> bool {
    first & MULTI_BYTE_MASK == MULTI_BYTE_MASK
}

/// Whether a tag starting with `first` is constructed (carries nested TLVs
/// rather than raw value bytes).
#[must_use]
pub(crate) const fn is_constructed(first: u8) -> bool {
    first & CONSTRUCTED_MASK == CONSTRUCTED_MASK
}

/// Validate the shape of complete tag bytes.
pub(crate) fn validate(tag: &[u8]) -> TlvResult<()> {
    let Some(&first) = tag.first() else {
        return Err(TlvError::InvalidTag("tag cannot be empty".to_owned()));
    };

    if !is_multi_byte(first) {
        tlv_ensure!(
            tag.len() == 1,
            TlvError::InvalidTag(
                "single-byte tag should not have additional bytes".to_owned()
            )
        );
        return Ok(());
    }

    tlv_ensure!(
        tag.len() >= 2,
        TlvError::InvalidTag(
            "multi-byte tag is incomplete; additional bytes are required".to_owned()
        )
    );

    // the last byte terminates the tag and must not carry the
    // continuation bit
    tlv_ensure!(
        tag[tag.len() - 1] & CONTINUATION_MASK == 0,
        TlvError::InvalidTag("last byte must not have MSB set".to_owned())
    );

    // every byte between the first and the last carries the continuation bit
    for (i, byte) in tag.iter().enumerate().take(tag.len() - 1).skip(1) {
        tlv_ensure!(
            byte & CONTINUATION_MASK == CONTINUATION_MASK,
            TlvError::InvalidTag(format!("byte {i} should have MSB set"))
        );
    }

    Ok(())
}

/// Read one tag from the head of `data`, returning the tag bytes and the
/// number of bytes consumed.
pub(crate) fn read(data: &[u8]) -> TlvResult<(&[u8], usize)> {
    let Some(&first) = data.first() else {
        return Err(TlvError::InvalidTag("tag is empty".to_owned()));
    };

    if !is_multi_byte(first) {
        return Ok((&data[..1], 1));
    }

    // scan for the terminating byte, the one without the continuation bit
    for (i, byte) in data.iter().enumerate().skip(1) {
        if byte & CONTINUATION_MASK != CONTINUATION_MASK {
            return Ok((&data[..=i], i + 1));
        }
    }

    Err(TlvError::InvalidTag("tag is incomplete".to_owned()))
}
