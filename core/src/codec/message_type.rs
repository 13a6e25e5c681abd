use crate::codec::json_wire::read_body;
use crate::codec::{CodecConfig, Message};
use serde::de::DeserializeOwned;
use std::any::TypeId;
use std::collections::BTreeSet;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(test)]
mod tests;

pub(crate) type DecodeFn = fn(&[u8], &CodecConfig) -> Result<Arc<dyn Message>, serde_json::Error>;

fn decode_body<T>(body: &[u8], config: &CodecConfig) -> Result<Arc<dyn Message>, serde_json::Error>
where
  T: Message + DeserializeOwned, {
  read_body::<T>(body, config).map(|message| Arc::new(message) as Arc<dyn Message>)
}

struct MessageTypeInner {
  name: &'static str,
  type_id: TypeId,
  decode: DecodeFn,
  supertypes: BTreeSet<TypeId>,
}

/// Descriptor of a decodable message type together with its precomputed supertypes.
///
/// Descriptors compare by [`TypeId`]. The supertype set is transitive and never contains the
/// type itself.
#[derive(Clone)]
pub struct MessageType {
  inner: Arc<MessageTypeInner>,
}

impl MessageType {
  /// Standalone descriptor without any supertypes.
  pub fn of<T>() -> Self
  where
    T: Message + DeserializeOwned, {
    Self::new(
      std::any::type_name::<T>(),
      TypeId::of::<T>(),
      decode_body::<T>,
      BTreeSet::new(),
    )
  }

  pub(crate) fn decoder_of<T>() -> DecodeFn
  where
    T: Message + DeserializeOwned, {
    decode_body::<T>
  }

  pub(crate) fn new(name: &'static str, type_id: TypeId, decode: DecodeFn, supertypes: BTreeSet<TypeId>) -> Self {
    Self {
      inner: Arc::new(MessageTypeInner {
        name,
        type_id,
        decode,
        supertypes,
      }),
    }
  }

  pub fn name(&self) -> &'static str {
    self.inner.name
  }

  pub fn type_id(&self) -> TypeId {
    self.inner.type_id
  }

  pub fn is<T: 'static>(&self) -> bool {
    self.inner.type_id == TypeId::of::<T>()
  }

  pub fn supertypes(&self) -> impl Iterator<Item = TypeId> + '_ {
    self.inner.supertypes.iter().copied()
  }

  pub fn supertype_count(&self) -> usize {
    self.inner.supertypes.len()
  }

  /// Returns `true` when a value of `other` can be used where `self` is expected, i.e. `self` is
  /// `other` or one of its supertypes. The relation is not symmetric.
  pub fn is_assignable_from(&self, other: &MessageType) -> bool {
    self.inner.type_id == other.inner.type_id || other.inner.supertypes.contains(&self.inner.type_id)
  }

  pub(crate) fn decode(&self, body: &[u8], config: &CodecConfig) -> Result<Arc<dyn Message>, serde_json::Error> {
    (self.inner.decode)(body, config)
  }
}

impl PartialEq for MessageType {
  fn eq(&self, other: &Self) -> bool {
    self.inner.type_id == other.inner.type_id
  }
}

impl Eq for MessageType {}

impl Hash for MessageType {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.inner.type_id.hash(state);
  }
}

impl Debug for MessageType {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("MessageType")
      .field("name", &self.inner.name)
      .field("supertypes", &self.inner.supertypes.len())
      .finish()
  }
}
