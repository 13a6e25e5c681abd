use crate::codec::{CodecError, Message, MessageType};
use std::fmt::Debug;
use std::io::Write;
use std::sync::Arc;

/// Boundary between the host pipeline and a message body codec.
pub trait MessageSerializer: Debug + Send + Sync {
  /// Value of the content-type header stamped on every message this serializer writes.
  fn content_type(&self) -> &str;

  fn serialize(&self, message: &dyn Message, sink: &mut dyn Write) -> Result<(), CodecError>;

  /// Decodes `body` into one message per root type of `message_types`.
  ///
  /// `message_types` is expected most-derived first.
  fn deserialize(&self, body: &[u8], message_types: &[MessageType]) -> Result<Vec<Arc<dyn Message>>, CodecError>;
}
