//! The TLV tree node model.

/// A single BER-TLV data object.
///
/// The tag is kept as hexadecimal text; [`crate::decode`] normalizes it to
/// uppercase, [`crate::encode`] accepts either case. A node is either a
/// primitive carrying raw value bytes or a constructed object carrying an
/// ordered list of children, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv {
    pub tag: String,
    pub value: TlvValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlvValue {
    /// Raw payload bytes of a primitive data object.
    Primitive(Vec<u8>),
    /// Ordered children of a constructed data object.
    Constructed(Vec<Tlv>),
}

impl Tlv {
    /// A primitive data object with raw value bytes.
    #[must_use]
    pub fn primitive<T: Into<String>, V: Into<Vec<u8>>>(tag: T, value: V) -> Self {
        Self {
            tag: tag.into(),
            value: TlvValue::Primitive(value.into()),
        }
    }

    /// A constructed data object holding nested TLVs.
    #[must_use]
    pub fn constructed<T: Into<String>>(tag: T, children: Vec<Self>) -> Self {
        Self {
            tag: tag.into(),
            value: TlvValue::Constructed(children),
        }
    }

    /// The raw value bytes, `None` for a constructed object.
    #[must_use]
    pub fn value(&self) -> Option<&[u8]> {
        match &self.value {
            TlvValue::Primitive(value) => Some(value),
            TlvValue::Constructed(_) => None,
        }
    }

    /// The nested TLVs, `None` for a primitive object.
    #[must_use]
    pub fn children(&self) -> Option<&[Self]> {
        match &self.value {
            TlvValue::Primitive(_) => None,
            TlvValue::Constructed(children) => Some(children),
        }
    }
}

/// Create a new list containing only the top-level TLVs whose tag is in
/// `tags`, with value bytes and entire child subtrees copied into fresh
/// storage. Useful to produce redacted/subset copies for logging or storage
/// without aliasing the source buffers.
#[must_use]
pub fn copy_tags(tlvs: &[Tlv], tags: &[&str]) -> Vec<Tlv> {
    tlvs.iter()
        .filter(|tlv| tags.contains(&tlv.tag.as_str()))
        .cloned()
        .collect()
}
