use super::*;
use crate::codec::NamingPolicy;
use serde_json::json;
use std::collections::BTreeMap;

#[derive(serde::Serialize)]
struct Parcel {
  parcel_id: u32,
  label_text: Option<String>,
  dimensions: (u16, u16),
}

#[derive(serde::Serialize)]
enum Carrier {
  Courier { tracking_code: String },
  Post(u8),
}

fn camel_case(ignore_null_values: bool) -> MappingOptions {
  MappingOptions::new(NamingPolicy::CamelCase, ignore_null_values)
}

#[test]
fn test_struct_fields_are_renamed() {
  let options = camel_case(false);
  let parcel = Parcel {
    parcel_id: 3,
    label_text: None,
    dimensions: (20, 30),
  };

  let value = parcel.serialize(MappedSerializer::new(&options)).unwrap();

  assert_eq!(value, json!({ "parcelId": 3, "labelText": null, "dimensions": [20, 30] }));
}

#[test]
fn test_null_struct_fields_are_dropped_when_ignored() {
  let options = camel_case(true);
  let parcel = Parcel {
    parcel_id: 3,
    label_text: None,
    dimensions: (20, 30),
  };

  let value = parcel.serialize(MappedSerializer::new(&options)).unwrap();

  assert_eq!(value, json!({ "parcelId": 3, "dimensions": [20, 30] }));
}

#[test]
fn test_map_keys_and_null_entries_are_kept() {
  let options = camel_case(true);
  let map = BTreeMap::from([("order_id", None), ("SKU-1", Some(2))]);

  let value = map.serialize(MappedSerializer::new(&options)).unwrap();

  assert_eq!(value, json!({ "order_id": null, "SKU-1": 2 }));
}

#[test]
fn test_variant_tags_are_kept_and_variant_fields_renamed() {
  let options = camel_case(false);
  let carriers = vec![
    Carrier::Courier {
      tracking_code: "TR-1".to_string(),
    },
    Carrier::Post(2),
  ];

  let value = carriers.serialize(MappedSerializer::new(&options)).unwrap();

  assert_eq!(value, json!([{ "Courier": { "trackingCode": "TR-1" } }, { "Post": 2 }]));
}

#[test]
fn test_non_string_map_keys_are_rejected() {
  let options = MappingOptions::default();
  let map = BTreeMap::from([(vec![1u8], 1)]);

  assert!(map.serialize(MappedSerializer::new(&options)).is_err());
}
