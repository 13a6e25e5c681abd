use super::*;
use serde_json::{json, Value};

fn write_to_string(options: &WriterOptions, value: &Value) -> String {
  let mut buffer: Vec<u8> = Vec::new();
  options.write(value, &mut buffer).unwrap();
  String::from_utf8(buffer).unwrap()
}

#[test]
fn test_default_writer_is_compact() {
  let value = json!({ "a": [1, 2] });
  assert_eq!(write_to_string(&WriterOptions::default(), &value), r#"{"a":[1,2]}"#);
}

#[test]
fn test_indented_writer_uses_configured_indent() {
  let value = json!({ "a": 1 });

  assert_eq!(write_to_string(&WriterOptions::indented(), &value), "{\n  \"a\": 1\n}");
  assert_eq!(
    write_to_string(&WriterOptions::indented().with_indent("\t"), &value),
    "{\n\t\"a\": 1\n}"
  );
}

#[test]
fn test_indent_is_ignored_when_not_indented() {
  let options = WriterOptions::default().with_indent("    ");
  assert_eq!(write_to_string(&options, &json!([1])), "[1]");
}

#[test]
fn test_writes_any_serializable_value() {
  let mut buffer: Vec<u8> = Vec::new();
  WriterOptions::default().write(&(u64::MAX as u128 + 1), &mut buffer).unwrap();
  assert_eq!(String::from_utf8(buffer).unwrap(), "18446744073709551616");
}
