use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::io::Write;

#[cfg(test)]
mod tests;

pub const DEFAULT_INDENT: &str = "  ";

/// Output formatting applied by the JSON writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterOptions {
  pub indented: bool,
  /// Written once per nesting level when `indented` is set.
  pub indent: String,
}

impl Default for WriterOptions {
  fn default() -> Self {
    Self {
      indented: false,
      indent: DEFAULT_INDENT.to_string(),
    }
  }
}

impl WriterOptions {
  pub fn indented() -> Self {
    Self {
      indented: true,
      ..Self::default()
    }
  }

  pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
    self.indent = indent.into();
    self
  }

  pub(crate) fn write<T, W>(&self, value: &T, sink: W) -> Result<(), serde_json::Error>
  where
    T: ?Sized + Serialize,
    W: Write, {
    let mut sink = if self.indented {
      let formatter = PrettyFormatter::with_indent(self.indent.as_bytes());
      let mut serializer = serde_json::Serializer::with_formatter(sink, formatter);
      value.serialize(&mut serializer)?;
      serializer.into_inner()
    } else {
      let mut serializer = serde_json::Serializer::new(sink);
      value.serialize(&mut serializer)?;
      serializer.into_inner()
    };
    sink.flush().map_err(serde_json::Error::io)
  }
}
