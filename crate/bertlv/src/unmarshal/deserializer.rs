use std::collections::HashMap;

use serde::{
    de::{self, DeserializeOwned, IntoDeserializer, MapAccess, Visitor, value::SeqDeserializer},
    forward_to_deserialize_any,
};
use tracing::trace;

use super::field_spec::FieldSpec;
use crate::{
    error::{TlvError, result::TlvResult},
    tlv::{Tlv, TlvValue},
};

/// Map a decoded TLV list onto a typed record.
///
/// See the [module documentation](super) for the field binding rules.
pub fn from_tlv<T>(tlvs: &[Tlv]) -> TlvResult<T>
where
    T: DeserializeOwned,
{
    trace!("from_tlv: {} sibling(s)", tlvs.len());
    T::deserialize(TlvDeserializer { tlvs })
}

/// Root deserializer over a sibling slice. Only structs can be
/// unmarshalled at the top level.
struct TlvDeserializer<'a> {
    tlvs: &'a [Tlv],
}

impl<'de> de::Deserializer<'de> for TlvDeserializer<'_> {
    type Error = TlvError;

    fn deserialize_any<V>(self, _visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(TlvError::Default(
            "unmarshal target must be a struct".to_owned(),
        ))
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_map(FieldAccess::new(self.tlvs, fields))
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map enum identifier ignored_any
    }
}

/// Walks the declared fields of a struct, yielding only those whose bound
/// tag is present among the siblings. Missing tags produce no map entry at
/// all, so the corresponding fields keep their defaults.
struct FieldAccess<'a> {
    by_tag: HashMap<&'a str, &'a Tlv>,
    fields: std::slice::Iter<'static, &'static str>,
    pending: Option<(&'static str, &'a Tlv)>,
}

impl<'a> FieldAccess<'a> {
    fn new(tlvs: &'a [Tlv], fields: &'static [&'static str]) -> Self {
        // sibling lookup map; a duplicate tag shadows earlier occurrences
        let mut by_tag = HashMap::with_capacity(tlvs.len());
        for tlv in tlvs {
            by_tag.insert(tlv.tag.as_str(), tlv);
        }

        Self {
            by_tag,
            fields: fields.iter(),
            pending: None,
        }
    }
}

impl<'de> MapAccess<'de> for FieldAccess<'_> {
    type Error = TlvError;

    fn next_key_seed<K>(&mut self, seed: K) -> TlvResult<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        for &field in self.fields.by_ref() {
            let spec = FieldSpec::parse(field);
            if let Some(&tlv) = self.by_tag.get(spec.tag) {
                trace!("unmarshalling tag {} into field {field}", tlv.tag);
                self.pending = Some((field, tlv));
                return seed.deserialize(field.into_deserializer()).map(Some);
            }
        }

        Ok(None)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> TlvResult<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        let (field, tlv) = self
            .pending
            .take()
            .ok_or_else(|| TlvError::Default("value requested before key".to_owned()))?;
        let ascii = FieldSpec::parse(field).has_option("ascii");

        seed.deserialize(ValueDeserializer { field, tlv, ascii })
    }
}

/// Deserializes one bound TLV into one field, converting according to the
/// field type and the declared hints.
struct ValueDeserializer<'a> {
    field: &'static str,
    tlv: &'a Tlv,
    ascii: bool,
}

impl<'a> ValueDeserializer<'a> {
    fn conversion_error(&self, reason: impl ToString) -> TlvError {
        TlvError::Unmarshal {
            field: self.field.to_owned(),
            reason: reason.to_string(),
        }
    }

    /// The raw value bytes; a constructed node cannot feed a scalar field.
    fn value(&self) -> TlvResult<&'a [u8]> {
        self.tlv
            .value()
            .ok_or_else(|| self.conversion_error("constructed tag bound to a scalar field"))
    }

    /// The value as text: ASCII with the `ascii` hint, uppercase hex
    /// otherwise.
    fn text(&self) -> TlvResult<String> {
        let value = self.value()?;
        if self.ascii {
            String::from_utf8(value.to_vec()).map_err(|e| self.conversion_error(e))
        } else {
            Ok(hex::encode_upper(value))
        }
    }

    /// The value as an integer: the textual form of [`Self::text`] parsed
    /// as base-10 digits.
    fn integer(&self) -> TlvResult<i64> {
        let text = self.text()?;
        text.parse().map_err(|e| self.conversion_error(e))
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer<'_> {
    type Error = TlvError;

    fn deserialize_any<V>(self, _visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(self.conversion_error("unsupported field type"))
    }

    fn deserialize_str<V>(self, visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        let text = self.text()?;
        visitor.visit_string(text)
    }

    fn deserialize_string<V>(self, visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_i8<V>(self, visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_i64(visitor)
    }

    fn deserialize_i16<V>(self, visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_i64(visitor)
    }

    fn deserialize_i32<V>(self, visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_i64(visitor)
    }

    fn deserialize_i64<V>(self, visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        let value = self.integer()?;
        visitor.visit_i64(value)
    }

    fn deserialize_u8<V>(self, visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_u64(visitor)
    }

    fn deserialize_u16<V>(self, visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_u64(visitor)
    }

    fn deserialize_u32<V>(self, visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_u64(visitor)
    }

    fn deserialize_u64<V>(self, visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        let value = self.integer()?;
        let value = u64::try_from(value).map_err(|e| self.conversion_error(e))?;
        visitor.visit_u64(value)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        let value = self.value()?;
        visitor.visit_byte_buf(value.to_vec())
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    // serde derive maps `Vec<u8>` fields here
    fn deserialize_seq<V>(self, visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        let value = self.value()?;
        visitor.visit_seq(SeqDeserializer::new(value.iter().copied()))
    }

    fn deserialize_option<V>(self, visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        // a bound tag that is absent never reaches the deserializer, so a
        // present one is always `Some`
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        // a nested record resolves its bindings against this node's
        // children; a primitive node simply has none to offer
        let children = match &self.tlv.value {
            TlvValue::Constructed(children) => children.as_slice(),
            TlvValue::Primitive(_) => &[],
        };
        visitor.visit_map(FieldAccess::new(children, fields))
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> TlvResult<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    forward_to_deserialize_any! {
        bool i128 u128 f32 f64 char unit unit_struct tuple tuple_struct map
        enum identifier
    }
}
