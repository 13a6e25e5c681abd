use nexus_json_codec_rs::{
  CodecConfig, ConfigOption, JsonMessageSerializer, MappingOptions, Message, MessageSerializer, MessageTypeRegistry,
  NamingPolicy, WriterOptions,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Message)]
struct Greeting {
  recipient: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Message)]
struct FormalGreeting {
  recipient: String,
  honorific_title: String,
}

fn main() {
  env::set_var("RUST_LOG", "nexus_json_codec_rs=trace");
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .try_init();

  let mut builder = MessageTypeRegistry::builder();
  builder
    .register::<Greeting>()
    .unwrap()
    .register::<FormalGreeting>()
    .unwrap();
  builder.declare_supertype::<FormalGreeting, Greeting>().unwrap();
  let message_types = builder.build();

  let config = CodecConfig::from_options([
    ConfigOption::with_mapping_options(MappingOptions::default().with_naming_policy(NamingPolicy::CamelCase)),
    ConfigOption::with_writer_options(WriterOptions::indented()),
  ])
  .unwrap();
  let serializer = JsonMessageSerializer::new(Arc::new(config));

  let message = FormalGreeting {
    recipient: "world".to_string(),
    honorific_title: "Dr.".to_string(),
  };
  let body = serializer.serialize_to_vec(&message).unwrap();
  println!("{}: {}", serializer.content_type(), String::from_utf8_lossy(&body));

  let candidates = message_types.message_types_for::<FormalGreeting>().unwrap();
  for decoded in serializer.deserialize(&body, &candidates).unwrap() {
    println!("{:?}", decoded);
  }
}
