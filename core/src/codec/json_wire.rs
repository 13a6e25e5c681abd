use crate::codec::mapped_deserializer::MappedDeserializer;
use crate::codec::mapped_serializer::MappedSerializer;
use crate::codec::{CodecConfig, Message, NamingPolicy};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::io::Write;


struct SerializeMessage<'a>(&'a dyn Message);

impl Serialize for SerializeMessage<'_> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    erased_serde::serialize(self.0, serializer)
  }
}

/// Writes `message` to `sink`.
///
/// Identity mapping streams straight into the writer. Otherwise the message is first built into a
/// mapped [`Value`].
pub(crate) fn write_message<W: Write>(
  message: &dyn Message,
  sink: W,
  config: &CodecConfig,
) -> Result<(), serde_json::Error> {
  let mapping_options = config.mapping_options();
  if mapping_options.is_identity() {
    return config.writer_options().write(&SerializeMessage(message), sink);
  }
  let value = SerializeMessage(message).serialize(MappedSerializer::new(mapping_options))?;
  config.writer_options().write(&value, sink)
}

/// Reads one `T` from `body`.
///
/// Without a naming policy the target is decoded straight from the bytes. Otherwise the body is
/// parsed into a [`Value`] whose wire names are then matched against the fields `T` declares.
pub(crate) fn read_body<T: DeserializeOwned>(body: &[u8], config: &CodecConfig) -> Result<T, serde_json::Error> {
  let reader_options = config.reader_options();
  match config.mapping_options().naming_policy {
    NamingPolicy::AsIs => reader_options.read(body, |deserializer| T::deserialize(deserializer)),
    naming_policy => {
      let value = reader_options.read(body, |deserializer| Value::deserialize(deserializer))?;
      T::deserialize(MappedDeserializer::new(value, naming_policy))
    }
  }
}
