use crate::codec::MappingOptions;
use serde::ser::{self, Error as _, Serialize, Serializer as _};
use serde_json::{Error, Map, Value};

#[cfg(test)]
mod tests;

/// Builds a [`Value`] while applying [`MappingOptions`] to struct fields.
///
/// Struct fields are renamed with the naming policy and dropped when `null` and nulls are ignored.
/// Map keys, enum variant tags and sequence elements are left as they are.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MappedSerializer<'a> {
  options: &'a MappingOptions,
}

impl<'a> MappedSerializer<'a> {
  pub(crate) fn new(options: &'a MappingOptions) -> Self {
    Self { options }
  }

  fn field(&self, key: &str, value: Value) -> Option<(String, Value)> {
    if self.options.ignore_null_values && value.is_null() {
      return None;
    }
    Some((self.options.naming_policy.to_wire_name(key), value))
  }
}

fn tagged(variant: &str, value: Value) -> Value {
  let mut object = Map::new();
  object.insert(variant.to_string(), value);
  Value::Object(object)
}

fn map_key(key: Value) -> Result<String, Error> {
  match key {
    Value::String(key) => Ok(key),
    Value::Number(key) => Ok(key.to_string()),
    Value::Bool(key) => Ok(key.to_string()),
    _ => Err(Error::custom("key must be a string")),
  }
}

impl<'a> ser::Serializer for MappedSerializer<'a> {
  type Ok = Value;
  type Error = Error;
  type SerializeSeq = SerializeElements<'a>;
  type SerializeTuple = SerializeElements<'a>;
  type SerializeTupleStruct = SerializeElements<'a>;
  type SerializeTupleVariant = SerializeElements<'a>;
  type SerializeMap = SerializeEntries<'a>;
  type SerializeStruct = SerializeFields<'a>;
  type SerializeStructVariant = SerializeFields<'a>;

  fn serialize_bool(self, v: bool) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_bool(v)
  }

  fn serialize_i8(self, v: i8) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_i8(v)
  }

  fn serialize_i16(self, v: i16) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_i16(v)
  }

  fn serialize_i32(self, v: i32) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_i32(v)
  }

  fn serialize_i64(self, v: i64) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_i64(v)
  }

  fn serialize_i128(self, v: i128) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_i128(v)
  }

  fn serialize_u8(self, v: u8) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_u8(v)
  }

  fn serialize_u16(self, v: u16) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_u16(v)
  }

  fn serialize_u32(self, v: u32) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_u32(v)
  }

  fn serialize_u64(self, v: u64) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_u64(v)
  }

  fn serialize_u128(self, v: u128) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_u128(v)
  }

  fn serialize_f32(self, v: f32) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_f32(v)
  }

  fn serialize_f64(self, v: f64) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_f64(v)
  }

  fn serialize_char(self, v: char) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_char(v)
  }

  fn serialize_str(self, v: &str) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_str(v)
  }

  fn serialize_bytes(self, v: &[u8]) -> Result<Value, Error> {
    serde_json::value::Serializer.serialize_bytes(v)
  }

  fn serialize_none(self) -> Result<Value, Error> {
    Ok(Value::Null)
  }

  fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value, Error> {
    value.serialize(self)
  }

  fn serialize_unit(self) -> Result<Value, Error> {
    Ok(Value::Null)
  }

  fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, Error> {
    Ok(Value::Null)
  }

  fn serialize_unit_variant(
    self,
    _name: &'static str,
    _variant_index: u32,
    variant: &'static str,
  ) -> Result<Value, Error> {
    Ok(Value::String(variant.to_string()))
  }

  fn serialize_newtype_struct<T: ?Sized + Serialize>(self, _name: &'static str, value: &T) -> Result<Value, Error> {
    value.serialize(self)
  }

  fn serialize_newtype_variant<T: ?Sized + Serialize>(
    self,
    _name: &'static str,
    _variant_index: u32,
    variant: &'static str,
    value: &T,
  ) -> Result<Value, Error> {
    Ok(tagged(variant, value.serialize(self)?))
  }

  fn serialize_seq(self, len: Option<usize>) -> Result<SerializeElements<'a>, Error> {
    Ok(SerializeElements {
      serializer: self,
      variant: None,
      elements: Vec::with_capacity(len.unwrap_or(0)),
    })
  }

  fn serialize_tuple(self, len: usize) -> Result<SerializeElements<'a>, Error> {
    self.serialize_seq(Some(len))
  }

  fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeElements<'a>, Error> {
    self.serialize_seq(Some(len))
  }

  fn serialize_tuple_variant(
    self,
    _name: &'static str,
    _variant_index: u32,
    variant: &'static str,
    len: usize,
  ) -> Result<SerializeElements<'a>, Error> {
    Ok(SerializeElements {
      serializer: self,
      variant: Some(variant),
      elements: Vec::with_capacity(len),
    })
  }

  fn serialize_map(self, _len: Option<usize>) -> Result<SerializeEntries<'a>, Error> {
    Ok(SerializeEntries {
      serializer: self,
      entries: Map::new(),
      pending_key: None,
    })
  }

  fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeFields<'a>, Error> {
    Ok(SerializeFields {
      serializer: self,
      variant: None,
      fields: Map::new(),
    })
  }

  fn serialize_struct_variant(
    self,
    _name: &'static str,
    _variant_index: u32,
    variant: &'static str,
    _len: usize,
  ) -> Result<SerializeFields<'a>, Error> {
    Ok(SerializeFields {
      serializer: self,
      variant: Some(variant),
      fields: Map::new(),
    })
  }
}

pub(crate) struct SerializeElements<'a> {
  serializer: MappedSerializer<'a>,
  variant: Option<&'static str>,
  elements: Vec<Value>,
}

impl SerializeElements<'_> {
  fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
    self.elements.push(value.serialize(self.serializer)?);
    Ok(())
  }

  fn finish(self) -> Result<Value, Error> {
    let elements = Value::Array(self.elements);
    Ok(match self.variant {
      Some(variant) => tagged(variant, elements),
      None => elements,
    })
  }
}

impl ser::SerializeSeq for SerializeElements<'_> {
  type Ok = Value;
  type Error = Error;

  fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
    self.push(value)
  }

  fn end(self) -> Result<Value, Error> {
    self.finish()
  }
}

impl ser::SerializeTuple for SerializeElements<'_> {
  type Ok = Value;
  type Error = Error;

  fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
    self.push(value)
  }

  fn end(self) -> Result<Value, Error> {
    self.finish()
  }
}

impl ser::SerializeTupleStruct for SerializeElements<'_> {
  type Ok = Value;
  type Error = Error;

  fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
    self.push(value)
  }

  fn end(self) -> Result<Value, Error> {
    self.finish()
  }
}

impl ser::SerializeTupleVariant for SerializeElements<'_> {
  type Ok = Value;
  type Error = Error;

  fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
    self.push(value)
  }

  fn end(self) -> Result<Value, Error> {
    self.finish()
  }
}

pub(crate) struct SerializeEntries<'a> {
  serializer: MappedSerializer<'a>,
  entries: Map<String, Value>,
  pending_key: Option<String>,
}

impl ser::SerializeMap for SerializeEntries<'_> {
  type Ok = Value;
  type Error = Error;

  fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), Error> {
    self.pending_key = Some(map_key(key.serialize(serde_json::value::Serializer)?)?);
    Ok(())
  }

  fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
    let key = self
      .pending_key
      .take()
      .ok_or_else(|| Error::custom("serialize_value called before serialize_key"))?;
    self.entries.insert(key, value.serialize(self.serializer)?);
    Ok(())
  }

  fn end(self) -> Result<Value, Error> {
    Ok(Value::Object(self.entries))
  }
}

pub(crate) struct SerializeFields<'a> {
  serializer: MappedSerializer<'a>,
  variant: Option<&'static str>,
  fields: Map<String, Value>,
}

impl SerializeFields<'_> {
  fn insert<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<(), Error> {
    let value = value.serialize(self.serializer)?;
    if let Some((name, value)) = self.serializer.field(key, value) {
      self.fields.insert(name, value);
    }
    Ok(())
  }

  fn finish(self) -> Result<Value, Error> {
    let fields = Value::Object(self.fields);
    Ok(match self.variant {
      Some(variant) => tagged(variant, fields),
      None => fields,
    })
  }
}

impl ser::SerializeStruct for SerializeFields<'_> {
  type Ok = Value;
  type Error = Error;

  fn serialize_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<(), Error> {
    self.insert(key, value)
  }

  fn end(self) -> Result<Value, Error> {
    self.finish()
  }
}

impl ser::SerializeStructVariant for SerializeFields<'_> {
  type Ok = Value;
  type Error = Error;

  fn serialize_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<(), Error> {
    self.insert(key, value)
  }

  fn end(self) -> Result<Value, Error> {
    self.finish()
  }
}
