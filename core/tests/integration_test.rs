use nexus_json_codec_rs::{
  CodecConfig, CodecSettings, JsonMessageSerializer, Message, MessageSerializer, MessageTypeRegistry,
  SerializerRegistry, CONTENT_TYPE_JSON,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Message)]
struct ShipmentEvent {
  shipment_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Message)]
struct ShipmentDispatched {
  shipment_id: String,
  carrier_code: String,
  parcel_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Message)]
struct InvoiceRequested {
  shipment_id: String,
  amount_cents: u64,
}

fn message_types() -> MessageTypeRegistry {
  let mut builder = MessageTypeRegistry::builder();
  builder
    .register::<ShipmentEvent>()
    .unwrap()
    .register::<ShipmentDispatched>()
    .unwrap()
    .register::<InvoiceRequested>()
    .unwrap();
  builder
    .declare_supertype::<ShipmentDispatched, ShipmentEvent>()
    .unwrap();
  builder.build()
}

fn serializers() -> SerializerRegistry {
  let settings: CodecSettings = toml::from_str(
    r#"
    content_type = "application/vnd.shipping+json"

    [mapping]
    naming_policy = "camel_case"
    ignore_null_values = true
    "#,
  )
  .unwrap();
  let shipping = JsonMessageSerializer::new(Arc::new(CodecConfig::try_from(settings).unwrap()));

  let registry = SerializerRegistry::new();
  registry.register(Arc::new(JsonMessageSerializer::default())).unwrap();
  registry.register(Arc::new(shipping)).unwrap();
  registry
}

#[test]
fn test_pipeline_round_trip_through_content_type_routing() {
  let message_types = message_types();
  let serializers = serializers();
  let dispatched = ShipmentDispatched {
    shipment_id: "S-100".to_string(),
    carrier_code: "YMT".to_string(),
    parcel_count: 3,
  };

  let outgoing = serializers.find("application/vnd.shipping+json").unwrap();
  let content_type = outgoing.content_type().to_string();
  let mut body: Vec<u8> = Vec::new();
  MessageSerializer::serialize(outgoing.as_ref(), &dispatched, &mut body).unwrap();
  assert_eq!(
    serde_json::from_slice::<serde_json::Value>(&body).unwrap(),
    json!({ "shipmentId": "S-100", "carrierCode": "YMT", "parcelCount": 3 })
  );

  let incoming = serializers.find(&content_type).unwrap();
  let candidates = message_types.message_types_for::<ShipmentDispatched>().unwrap();
  let decoded = incoming.deserialize(&body, &candidates).unwrap();

  assert_eq!(decoded.len(), 1);
  assert_eq!(decoded[0].downcast_ref::<ShipmentDispatched>(), Some(&dispatched));
}

#[test]
fn test_subscription_to_unrelated_contracts_decodes_each() {
  let message_types = message_types();
  let serializer = JsonMessageSerializer::default();
  let body = br#"{"shipment_id":"S-7","amount_cents":1500,"carrier_code":"SGW","parcel_count":1}"#;

  let candidates = vec![
    message_types.message_type::<ShipmentDispatched>().unwrap(),
    message_types.message_type::<ShipmentEvent>().unwrap(),
    message_types.message_type::<InvoiceRequested>().unwrap(),
  ];
  let decoded = serializer.deserialize(body, &candidates).unwrap();

  assert_eq!(decoded.len(), 2);
  assert_eq!(decoded[0].downcast_ref::<ShipmentDispatched>().unwrap().carrier_code, "SGW");
  assert_eq!(
    decoded[1].downcast_ref::<InvoiceRequested>(),
    Some(&InvoiceRequested {
      shipment_id: "S-7".to_string(),
      amount_cents: 1500,
    })
  );
}

#[test]
fn test_default_serializer_is_registered_under_json() {
  let serializers = serializers();
  assert_eq!(
    serializers.content_types(),
    vec![CONTENT_TYPE_JSON.to_string(), "application/vnd.shipping+json".to_string()]
  );
}
