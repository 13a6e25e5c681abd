use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::de::SliceRead;


const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Leniency switches applied by the JSON reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderOptions {
  /// Accepts bytes after the first complete value instead of failing.
  pub allow_trailing_content: bool,
  pub skip_utf8_bom: bool,
  /// Nesting limit, on top of the reader's own recursion limit.
  pub max_depth: Option<usize>,
}

impl Default for ReaderOptions {
  fn default() -> Self {
    Self {
      allow_trailing_content: false,
      skip_utf8_bom: true,
      max_depth: None,
    }
  }
}

impl ReaderOptions {
  pub fn with_allow_trailing_content(mut self, allow_trailing_content: bool) -> Self {
    self.allow_trailing_content = allow_trailing_content;
    self
  }

  pub fn with_skip_utf8_bom(mut self, skip_utf8_bom: bool) -> Self {
    self.skip_utf8_bom = skip_utf8_bom;
    self
  }

  pub fn with_max_depth(mut self, max_depth: usize) -> Self {
    self.max_depth = Some(max_depth);
    self
  }

  /// Parses one document from `body` with `decode`, keeping the reader's error positions.
  pub(crate) fn read<'a, T, F>(&self, body: &'a [u8], decode: F) -> Result<T, serde_json::Error>
  where
    F: FnOnce(&mut serde_json::Deserializer<SliceRead<'a>>) -> Result<T, serde_json::Error>, {
    let body = if self.skip_utf8_bom {
      body.strip_prefix(UTF8_BOM).unwrap_or(body)
    } else {
      body
    };
    if let Some(max_depth) = self.max_depth {
      let depth = nesting_depth(body);
      if depth > max_depth {
        return Err(serde_json::Error::custom(format!(
          "maximum depth {} exceeded: {}",
          max_depth, depth
        )));
      }
    }
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let decoded = decode(&mut deserializer)?;
    if !self.allow_trailing_content {
      deserializer.end()?;
    }
    Ok(decoded)
  }
}

/// Deepest nesting of the first document in `body`. Objects and arrays each count one level.
fn nesting_depth(body: &[u8]) -> usize {
  let mut depth = 0usize;
  let mut deepest = 0usize;
  let mut in_string = false;
  let mut escaped = false;
  for &byte in body {
    if in_string {
      match byte {
        _ if escaped => escaped = false,
        b'\\' => escaped = true,
        b'"' => in_string = false,
        _ => {}
      }
      continue;
    }
    if depth == 0 && !matches!(byte, b'{' | b'[') && !byte.is_ascii_whitespace() {
      break;
    }
    match byte {
      b'"' => in_string = true,
      b'{' | b'[' => {
        depth += 1;
        deepest = deepest.max(depth);
      }
      b'}' | b']' => {
        depth = depth.saturating_sub(1);
        if depth == 0 {
          break;
        }
      }
      _ => {}
    }
  }
  deepest
}
