mod codec_config;
mod codec_error;
mod config_option;
mod json_message_serializer;
mod json_wire;
mod mapped_deserializer;
mod mapped_serializer;
mod mapping_options;
mod message;
mod message_serializer;
mod message_type;
mod message_type_registry;
mod naming_policy;
mod reader_options;
mod serializer_registry;
mod writer_options;

pub use self::{
  codec_config::*, codec_error::*, config_option::*, json_message_serializer::*, mapping_options::*, message::*,
  message_serializer::*, message_type::*, message_type_registry::*, naming_policy::*, reader_options::*,
  serializer_registry::*, writer_options::*,
};
