use crate::codec::NamingPolicy;
use serde::de::value::StringDeserializer;
use serde::de::{self, DeserializeSeed, Deserializer as _, Error as _, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;
use serde_json::{Error, Map, Value};


/// Reads a [`Value`] into a target type, mapping wire names back to the fields each struct
/// declares.
///
/// Wire names that match no declared field are passed through unchanged, so unknown members are
/// still ignored or rejected by the target type as usual.
#[derive(Debug)]
pub(crate) struct MappedDeserializer {
  value: Value,
  naming_policy: NamingPolicy,
}

impl MappedDeserializer {
  pub(crate) fn new(value: Value, naming_policy: NamingPolicy) -> Self {
    Self { value, naming_policy }
  }

  fn entries(
    members: Map<String, Value>,
    naming_policy: NamingPolicy,
    fields: Option<&'static [&'static str]>,
  ) -> Entries {
    Entries {
      members: members.into_iter(),
      pending_value: None,
      naming_policy,
      fields,
    }
  }
}

impl<'de> de::Deserializer<'de> for MappedDeserializer {
  type Error = Error;

  fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
    match self.value {
      Value::Array(elements) => visitor.visit_seq(Elements {
        elements: elements.into_iter(),
        naming_policy: self.naming_policy,
      }),
      Value::Object(members) => visitor.visit_map(Self::entries(members, self.naming_policy, None)),
      scalar => scalar.deserialize_any(visitor),
    }
  }

  fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
    match self.value {
      Value::Null => visitor.visit_none(),
      _ => visitor.visit_some(self),
    }
  }

  fn deserialize_newtype_struct<V: Visitor<'de>>(self, _name: &'static str, visitor: V) -> Result<V::Value, Error> {
    visitor.visit_newtype_struct(self)
  }

  fn deserialize_struct<V: Visitor<'de>>(
    self,
    _name: &'static str,
    fields: &'static [&'static str],
    visitor: V,
  ) -> Result<V::Value, Error> {
    match self.value {
      Value::Object(members) => visitor.visit_map(Self::entries(members, self.naming_policy, Some(fields))),
      other => MappedDeserializer::new(other, self.naming_policy).deserialize_any(visitor),
    }
  }

  fn deserialize_enum<V: Visitor<'de>>(
    self,
    name: &'static str,
    variants: &'static [&'static str],
    visitor: V,
  ) -> Result<V::Value, Error> {
    match self.value {
      Value::Object(members) => {
        let mut members = members.into_iter();
        match (members.next(), members.next()) {
          (Some((variant, value)), None) => visitor.visit_enum(Variant {
            variant,
            value,
            naming_policy: self.naming_policy,
          }),
          _ => Err(Error::invalid_value(de::Unexpected::Map, &"map with a single key")),
        }
      }
      other => other.deserialize_enum(name, variants, visitor),
    }
  }

  forward_to_deserialize_any! {
    bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
    bytes byte_buf unit unit_struct seq tuple tuple_struct map identifier ignored_any
  }
}

struct Elements {
  elements: std::vec::IntoIter<Value>,
  naming_policy: NamingPolicy,
}

impl<'de> de::SeqAccess<'de> for Elements {
  type Error = Error;

  fn next_element_seed<T: DeserializeSeed<'de>>(&mut self, seed: T) -> Result<Option<T::Value>, Error> {
    self
      .elements
      .next()
      .map(|element| seed.deserialize(MappedDeserializer::new(element, self.naming_policy)))
      .transpose()
  }

  fn size_hint(&self) -> Option<usize> {
    Some(self.elements.len())
  }
}

struct Entries {
  members: serde_json::map::IntoIter,
  pending_value: Option<Value>,
  naming_policy: NamingPolicy,
  /// Declared fields when the entries belong to a struct; `None` for maps.
  fields: Option<&'static [&'static str]>,
}

impl<'de> de::MapAccess<'de> for Entries {
  type Error = Error;

  fn next_key_seed<K: DeserializeSeed<'de>>(&mut self, seed: K) -> Result<Option<K::Value>, Error> {
    let Some((key, value)) = self.members.next() else {
      return Ok(None);
    };
    self.pending_value = Some(value);
    let key = match self.fields {
      Some(fields) => self
        .naming_policy
        .field_for_wire_name(&key, fields)
        .map(str::to_string)
        .unwrap_or(key),
      None => key,
    };
    let key: StringDeserializer<Error> = key.into_deserializer();
    seed.deserialize(key).map(Some)
  }

  fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, Error> {
    match self.pending_value.take() {
      Some(value) => seed.deserialize(MappedDeserializer::new(value, self.naming_policy)),
      None => Err(Error::custom("value is missing")),
    }
  }

  fn size_hint(&self) -> Option<usize> {
    Some(self.members.len())
  }
}

struct Variant {
  variant: String,
  value: Value,
  naming_policy: NamingPolicy,
}

impl<'de> de::EnumAccess<'de> for Variant {
  type Error = Error;
  type Variant = VariantContent;

  fn variant_seed<V: DeserializeSeed<'de>>(self, seed: V) -> Result<(V::Value, VariantContent), Error> {
    let variant: StringDeserializer<Error> = self.variant.into_deserializer();
    let tag = seed.deserialize(variant)?;
    Ok((
      tag,
      VariantContent {
        content: MappedDeserializer::new(self.value, self.naming_policy),
      },
    ))
  }
}

struct VariantContent {
  content: MappedDeserializer,
}

impl<'de> de::VariantAccess<'de> for VariantContent {
  type Error = Error;

  fn unit_variant(self) -> Result<(), Error> {
    match self.content.value {
      Value::Null => Ok(()),
      _ => Err(Error::invalid_type(de::Unexpected::Map, &"unit variant")),
    }
  }

  fn newtype_variant_seed<T: DeserializeSeed<'de>>(self, seed: T) -> Result<T::Value, Error> {
    seed.deserialize(self.content)
  }

  fn tuple_variant<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value, Error> {
    self.content.deserialize_seq(visitor)
  }

  fn struct_variant<V: Visitor<'de>>(self, fields: &'static [&'static str], visitor: V) -> Result<V::Value, Error> {
    self.content.deserialize_struct("", fields, visitor)
  }
}
