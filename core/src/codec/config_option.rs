use crate::codec::{CodecConfig, MappingOptions, ReaderOptions, WriterOptions};

#[derive(Debug, Clone)]
pub enum ConfigOption {
  SetMappingOptions(MappingOptions),
  SetWriterOptions(WriterOptions),
  SetReaderOptions(ReaderOptions),
  SetContentType(String),
}

impl ConfigOption {
  pub(crate) fn apply(&self, config: &mut CodecConfig) {
    match self {
      ConfigOption::SetMappingOptions(mapping_options) => {
        config.set_mapping_options(mapping_options.clone());
      }
      ConfigOption::SetWriterOptions(writer_options) => {
        config.set_writer_options(writer_options.clone());
      }
      ConfigOption::SetReaderOptions(reader_options) => {
        config.set_reader_options(reader_options.clone());
      }
      ConfigOption::SetContentType(content_type) => {
        config.set_content_type(content_type.clone());
      }
    }
  }

  pub fn with_mapping_options(mapping_options: MappingOptions) -> ConfigOption {
    ConfigOption::SetMappingOptions(mapping_options)
  }

  pub fn with_writer_options(writer_options: WriterOptions) -> ConfigOption {
    ConfigOption::SetWriterOptions(writer_options)
  }

  pub fn with_reader_options(reader_options: ReaderOptions) -> ConfigOption {
    ConfigOption::SetReaderOptions(reader_options)
  }

  pub fn with_content_type(content_type: &str) -> ConfigOption {
    ConfigOption::SetContentType(content_type.to_string())
  }
}
