use super::*;
use crate::codec::{CodecConfig, ConfigOption, JsonMessageSerializer, CONTENT_TYPE_JSON};
use std::thread;

fn json_serializer(content_type: &str) -> Arc<dyn MessageSerializer> {
  let config = CodecConfig::from_options([ConfigOption::with_content_type(content_type)]).unwrap();
  Arc::new(JsonMessageSerializer::new(Arc::new(config)))
}

#[test]
fn test_routes_by_content_type() {
  let registry = SerializerRegistry::new();
  registry.register(Arc::new(JsonMessageSerializer::default())).unwrap();
  registry.register(json_serializer("application/vnd.orders+json")).unwrap();

  assert_eq!(registry.len(), 2);
  assert_eq!(
    registry.find(CONTENT_TYPE_JSON).map(|s| s.content_type().to_string()),
    Some(CONTENT_TYPE_JSON.to_string())
  );
  assert_eq!(
    registry
      .find("application/vnd.orders+json")
      .map(|s| s.content_type().to_string()),
    Some("application/vnd.orders+json".to_string())
  );
  assert!(registry.find("application/xml").is_none());
}

#[test]
fn test_lookup_ignores_parameters_and_case() {
  let registry = SerializerRegistry::new();
  registry.register(Arc::new(JsonMessageSerializer::default())).unwrap();

  assert!(registry.find("Application/JSON; charset=utf-8").is_some());
}

#[test]
fn test_duplicate_content_type_is_rejected() {
  let registry = SerializerRegistry::new();
  registry.register(json_serializer("application/json")).unwrap();

  let err = registry.register(json_serializer("application/json; charset=utf-8")).unwrap_err();
  assert_eq!(err, RegistryError::DuplicateContentType("application/json".to_string()));
  assert_eq!(registry.len(), 1);
}

#[test]
fn test_content_types_are_sorted() {
  let registry = SerializerRegistry::new();
  assert!(registry.is_empty());
  registry.register(json_serializer("application/x-b+json")).unwrap();
  registry.register(json_serializer("application/x-a+json")).unwrap();

  assert_eq!(
    registry.content_types(),
    vec!["application/x-a+json".to_string(), "application/x-b+json".to_string()]
  );
}

#[test]
fn test_clones_share_registrations_across_threads() {
  let registry = SerializerRegistry::new();
  registry.register(Arc::new(JsonMessageSerializer::default())).unwrap();

  let handles = (0..4)
    .map(|_| {
      let registry = registry.clone();
      thread::spawn(move || registry.find(CONTENT_TYPE_JSON).is_some())
    })
    .collect::<Vec<_>>();

  for handle in handles {
    assert!(handle.join().unwrap());
  }
}
