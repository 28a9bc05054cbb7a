use tracing::trace;

use crate::{
    error::{TlvError, result::TlvResult},
    tlv::{Tlv, TlvValue},
    wire::{length, tag},
};

/// Encode a list of TLVs into their wire bytes.
///
/// Tags are accepted as mixed-case hex text. Output order equals input
/// order; there is no re-sorting or canonicalization. A node with children
/// whose tag does not carry the constructed bit fails with
/// [`TlvError::NotConstructed`].
pub fn encode(tlvs: &[Tlv]) -> TlvResult<Vec<u8>> {
    let mut encoded = Vec::new();

    for tlv in tlvs {
        let tag_bytes = hex::decode(&tlv.tag)
            .map_err(|e| TlvError::InvalidTag(format!("{}: {e}", tlv.tag)))?;
        tag::validate(&tag_bytes).map_err(|e| match e {
            TlvError::InvalidTag(msg) => TlvError::InvalidTag(format!("{}: {msg}", tlv.tag)),
            other => other,
        })?;

        let value = match &tlv.value {
            TlvValue::Constructed(children) => {
                if !tag::is_constructed(tag_bytes[0]) {
                    return Err(TlvError::NotConstructed(tlv.tag.clone()));
                }
                // encode the nested TLVs to form the value
                encode(children)?
            }
            TlvValue::Primitive(value) => value.clone(),
        };

        trace!("encoding tag {} with {} value bytes", tlv.tag, value.len());

        encoded.extend_from_slice(&tag_bytes);
        encoded.extend_from_slice(&length::encode(value.len()));
        encoded.extend_from_slice(&value);
    }

    Ok(encoded)
}
