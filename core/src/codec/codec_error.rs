use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
  /// Wiring defect upstream: no candidate types, or an invalid configuration value.
  #[error("Invalid configuration: {0}")]
  Configuration(String),
  #[error("Failed to serialize message: {0}")]
  Serialization(#[source] serde_json::Error),
  #[error("Failed to deserialize message as {type_name}: {source}")]
  Deserialization {
    type_name: String,
    #[source]
    source: serde_json::Error,
  },
}

impl CodecError {
  pub fn configuration(message: impl Into<String>) -> Self {
    CodecError::Configuration(message.into())
  }

  pub fn deserialization(type_name: impl Into<String>, source: serde_json::Error) -> Self {
    CodecError::Deserialization {
      type_name: type_name.into(),
      source,
    }
  }

  pub fn is_configuration(&self) -> bool {
    matches!(self, CodecError::Configuration(_))
  }

  pub fn is_serialization(&self) -> bool {
    matches!(self, CodecError::Serialization(_))
  }

  pub fn is_deserialization(&self) -> bool {
    matches!(self, CodecError::Deserialization { .. })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
  #[error("Message type already registered: {0}")]
  DuplicateMessageType(String),
  #[error("Unknown message type: {0}")]
  UnknownMessageType(String),
  #[error("Invalid supertype relation: {0}")]
  InvalidRelation(String),
  #[error("Content type already registered: {0}")]
  DuplicateContentType(String),
}
