//! JSON message body codec for message-oriented pipelines.
//!
//! A [`JsonMessageSerializer`] encodes message values to JSON and decodes a received body into
//! one value per root type of the candidate [`MessageType`] list handed over by the pipeline.

extern crate self as nexus_json_codec_rs;

pub mod codec;

pub use codec::*;

// Re-exports for derive macros
pub use nexus_json_codec_derive_rs::Message;
