use crate::codec::{MessageSerializer, RegistryError};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

#[cfg(test)]
mod tests;

/// Routes a content-type header to the serializer registered for it.
///
/// Media types are matched case-insensitively and parameters such as `charset` are ignored.
#[derive(Debug, Clone, Default)]
pub struct SerializerRegistry {
  serializers: Arc<DashMap<String, Arc<dyn MessageSerializer>>>,
}

impl SerializerRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn register(&self, serializer: Arc<dyn MessageSerializer>) -> Result<(), RegistryError> {
    let key = media_type_of(serializer.content_type());
    tracing::debug!("Registering serializer: content_type = {}", key);
    match self.serializers.entry(key) {
      Entry::Occupied(entry) => Err(RegistryError::DuplicateContentType(entry.key().clone())),
      Entry::Vacant(entry) => {
        entry.insert(serializer);
        Ok(())
      }
    }
  }

  pub fn find(&self, content_type: &str) -> Option<Arc<dyn MessageSerializer>> {
    let key = media_type_of(content_type);
    let result = self.serializers.get(&key).map(|entry| entry.value().clone());
    tracing::trace!("find: content_type = {}, found = {}", key, result.is_some());
    result
  }

  pub fn content_types(&self) -> Vec<String> {
    let mut content_types = self
      .serializers
      .iter()
      .map(|entry| entry.key().clone())
      .collect::<Vec<_>>();
    content_types.sort();
    content_types
  }

  pub fn len(&self) -> usize {
    self.serializers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.serializers.is_empty()
  }
}

fn media_type_of(content_type: &str) -> String {
  content_type
    .split(';')
    .next()
    .unwrap_or_default()
    .trim()
    .to_ascii_lowercase()
}
