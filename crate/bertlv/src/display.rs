//! Human-readable rendering of a TLV tree.

use std::fmt::Write;

use crate::{
    emv_tags,
    filters::FilterRegistry,
    tlv::{Tlv, TlvValue},
};

/// Render the TLVs as an indented tree, masking sensitive values with the
/// default filter registry.
#[must_use]
pub fn pretty_print(tlvs: &[Tlv]) -> String {
    pretty_print_with(tlvs, &FilterRegistry::default())
}

/// Render the TLVs as an indented tree, masking values through `filters`.
///
/// Each line holds the tag, the value (uppercase hex unless a filter is
/// registered for the tag, `(empty)` for a zero-length value) and the EMV
/// tag name when known. Purely presentational; the tree is not modified.
#[must_use]
pub fn pretty_print_with(tlvs: &[Tlv], filters: &FilterRegistry) -> String {
    let mut out = String::new();
    render(tlvs, filters, &mut out, 0);
    out
}

fn render(tlvs: &[Tlv], filters: &FilterRegistry, out: &mut String, level: usize) {
    for tlv in tlvs {
        for _ in 0..level {
            out.push_str("  ");
        }
        out.push_str(&tlv.tag);

        match &tlv.value {
            TlvValue::Constructed(children) => {
                if let Some(name) = emv_tags::tag_name(&tlv.tag) {
                    let _ = write!(out, " - {name}");
                }
                out.push('\n');
                render(children, filters, out, level + 1);
            }
            TlvValue::Primitive(value) => {
                let rendered = filters.apply(&tlv.tag, value).unwrap_or_else(|| {
                    if value.is_empty() {
                        "(empty)".to_owned()
                    } else {
                        hex::encode_upper(value)
                    }
                });
                let _ = write!(out, " {rendered}");

                if let Some(name) = emv_tags::tag_name(&tlv.tag) {
                    let _ = write!(out, " - {name}");
                }
                out.push('\n');
            }
        }
    }
}
