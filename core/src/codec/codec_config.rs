use crate::codec::{CodecError, ConfigOption, MappingOptions, ReaderOptions, WriterOptions};
use serde::Deserialize;


pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Immutable option bundle a codec is bound to.
///
/// Build it once at startup and share it by reference; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
  mapping_options: MappingOptions,
  writer_options: WriterOptions,
  reader_options: ReaderOptions,
  content_type: String,
}

impl Default for CodecConfig {
  fn default() -> Self {
    CodecConfig {
      mapping_options: MappingOptions::default(),
      writer_options: WriterOptions::default(),
      reader_options: ReaderOptions::default(),
      content_type: CONTENT_TYPE_JSON.to_string(),
    }
  }
}

impl CodecConfig {
  pub fn from_options(options: impl IntoIterator<Item = ConfigOption>) -> Result<CodecConfig, CodecError> {
    let mut config = CodecConfig::default();
    for option in options {
      option.apply(&mut config);
    }
    validate_content_type(&config.content_type)?;
    Ok(config)
  }

  pub fn mapping_options(&self) -> &MappingOptions {
    &self.mapping_options
  }

  pub fn writer_options(&self) -> &WriterOptions {
    &self.writer_options
  }

  pub fn reader_options(&self) -> &ReaderOptions {
    &self.reader_options
  }

  pub fn content_type(&self) -> &str {
    &self.content_type
  }

  pub(crate) fn set_mapping_options(&mut self, mapping_options: MappingOptions) {
    self.mapping_options = mapping_options;
  }

  pub(crate) fn set_writer_options(&mut self, writer_options: WriterOptions) {
    self.writer_options = writer_options;
  }

  pub(crate) fn set_reader_options(&mut self, reader_options: ReaderOptions) {
    self.reader_options = reader_options;
  }

  pub(crate) fn set_content_type(&mut self, content_type: String) {
    self.content_type = content_type;
  }
}

fn validate_content_type(content_type: &str) -> Result<(), CodecError> {
  if content_type.trim().is_empty() {
    return Err(CodecError::configuration("content type must not be empty"));
  }
  Ok(())
}

/// Codec options as held by an external settings store.
///
/// Every field is optional; unset fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecSettings {
  pub mapping: Option<MappingOptions>,
  pub writer: Option<WriterOptions>,
  pub reader: Option<ReaderOptions>,
  pub content_type: Option<String>,
}

impl CodecSettings {
  pub fn to_options(&self) -> Vec<ConfigOption> {
    let mut options = Vec::new();
    if let Some(mapping) = &self.mapping {
      options.push(ConfigOption::with_mapping_options(mapping.clone()));
    }
    if let Some(writer) = &self.writer {
      options.push(ConfigOption::with_writer_options(writer.clone()));
    }
    if let Some(reader) = &self.reader {
      options.push(ConfigOption::with_reader_options(reader.clone()));
    }
    if let Some(content_type) = &self.content_type {
      options.push(ConfigOption::with_content_type(content_type));
    }
    options
  }
}

impl TryFrom<CodecSettings> for CodecConfig {
  type Error = CodecError;

  fn try_from(settings: CodecSettings) -> Result<Self, Self::Error> {
    CodecConfig::from_options(settings.to_options())
  }
}
