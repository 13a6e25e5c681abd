use super::*;
use crate::Message;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Message)]
struct Heartbeat {
  node: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Message)]
struct Shutdown {
  reason: String,
}

#[test]
fn test_of_describes_the_type() {
  let message_type = MessageType::of::<Heartbeat>();

  assert_eq!(message_type.name(), std::any::type_name::<Heartbeat>());
  assert_eq!(message_type.type_id(), TypeId::of::<Heartbeat>());
  assert!(message_type.is::<Heartbeat>());
  assert!(!message_type.is::<Shutdown>());
  assert_eq!(message_type.supertype_count(), 0);
}

#[test]
fn test_standalone_type_is_only_assignable_from_itself() {
  let heartbeat = MessageType::of::<Heartbeat>();
  let shutdown = MessageType::of::<Shutdown>();

  assert!(heartbeat.is_assignable_from(&MessageType::of::<Heartbeat>()));
  assert!(!heartbeat.is_assignable_from(&shutdown));
  assert!(!shutdown.is_assignable_from(&heartbeat));
}

#[test]
fn test_equality_and_hash_follow_type_id() {
  let mut set = HashSet::new();
  set.insert(MessageType::of::<Heartbeat>());
  set.insert(MessageType::of::<Heartbeat>());
  set.insert(MessageType::of::<Shutdown>());

  assert_eq!(set.len(), 2);
  assert_eq!(MessageType::of::<Heartbeat>(), MessageType::of::<Heartbeat>());
}

#[test]
fn test_decode_produces_the_described_type() {
  let decoded = MessageType::of::<Heartbeat>()
    .decode(br#"{"node":"n1"}"#, &CodecConfig::default())
    .unwrap();

  assert_eq!(
    decoded.downcast_ref::<Heartbeat>(),
    Some(&Heartbeat { node: "n1".to_string() })
  );
}

#[test]
fn test_decode_rejects_incompatible_shape() {
  let result = MessageType::of::<Heartbeat>().decode(br#"{"reason":"maintenance"}"#, &CodecConfig::default());
  assert!(result.is_err());
}
