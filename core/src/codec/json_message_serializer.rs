use crate::codec::json_wire::{read_body, write_message};
use crate::codec::{CodecConfig, CodecError, Message, MessageSerializer, MessageType};
use serde::de::DeserializeOwned;
use std::io::Write;
use std::sync::Arc;


/// JSON message body codec bound to one immutable [`CodecConfig`].
///
/// The wire format carries no type tag, so decoding always needs the candidate types. A body is
/// decoded once per root type (see [`find_root_types`]), each time with a fresh reader.
#[derive(Debug, Clone)]
pub struct JsonMessageSerializer {
  config: Arc<CodecConfig>,
}

impl Default for JsonMessageSerializer {
  fn default() -> Self {
    Self::new(Arc::new(CodecConfig::default()))
  }
}

impl JsonMessageSerializer {
  pub fn new(config: Arc<CodecConfig>) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &CodecConfig {
    &self.config
  }

  pub fn content_type(&self) -> &str {
    self.config.content_type()
  }

  pub fn serialize_to<W: Write>(&self, message: &dyn Message, sink: W) -> Result<(), CodecError> {
    write_message(message, sink, &self.config).map_err(CodecError::Serialization)
  }

  pub fn serialize_to_vec(&self, message: &dyn Message) -> Result<Vec<u8>, CodecError> {
    let mut buffer: Vec<u8> = Vec::new();
    self.serialize_to(message, &mut buffer)?;
    Ok(buffer)
  }

  /// Decodes `body` straight into `T` through the same reader and mapping pipeline.
  pub fn deserialize_as<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, CodecError> {
    read_body::<T>(body, &self.config).map_err(|err| CodecError::deserialization(std::any::type_name::<T>(), err))
  }

  fn deserialize_root(&self, body: &[u8], message_type: &MessageType) -> Result<Arc<dyn Message>, CodecError> {
    tracing::trace!("deserialize_root: message_type = {}", message_type.name());
    message_type
      .decode(body, &self.config)
      .map_err(|err| CodecError::deserialization(message_type.name(), err))
  }
}

impl MessageSerializer for JsonMessageSerializer {
  fn content_type(&self) -> &str {
    self.config.content_type()
  }

  fn serialize(&self, message: &dyn Message, sink: &mut dyn Write) -> Result<(), CodecError> {
    self.serialize_to(message, sink)
  }

  fn deserialize(&self, body: &[u8], message_types: &[MessageType]) -> Result<Vec<Arc<dyn Message>>, CodecError> {
    match message_types {
      [] => Err(CodecError::configuration("candidate types must be specified")),
      [message_type] => Ok(vec![self.deserialize_root(body, message_type)?]),
      _ => {
        tracing::debug!("deserialize: candidate types = {:?}", message_types);
        find_root_types(message_types)
          .map(|root| self.deserialize_root(body, root))
          .collect()
      }
    }
  }
}

/// Lazily reduces an ordered candidate list to its root types.
///
/// The first candidate is always a root. A later candidate becomes the new root unless it is
/// assignable from the current root, in which case the current root already covers it. The pass
/// is greedy and never looks back, so a base listed before its derived type yields both.
pub fn find_root_types(message_types: &[MessageType]) -> RootTypes<'_> {
  RootTypes {
    remaining: message_types.iter(),
    current_root: None,
  }
}

#[derive(Debug, Clone)]
pub struct RootTypes<'a> {
  remaining: std::slice::Iter<'a, MessageType>,
  current_root: Option<&'a MessageType>,
}

impl<'a> Iterator for RootTypes<'a> {
  type Item = &'a MessageType;

  fn next(&mut self) -> Option<Self::Item> {
    for message_type in self.remaining.by_ref() {
      match self.current_root {
        Some(current_root) if message_type.is_assignable_from(current_root) => {
          tracing::trace!(
            "find_root_types: {} is covered by {}",
            message_type.name(),
            current_root.name()
          );
        }
        _ => {
          self.current_root = Some(message_type);
          return Some(message_type);
        }
      }
    }
    None
  }
}
