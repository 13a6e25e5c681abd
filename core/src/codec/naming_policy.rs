use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};


/// Naming convention applied to struct field names on the wire.
///
/// Only struct fields (including fields of struct variants) are renamed. Map keys and enum
/// variant tags are written as they are. Reading matches wire names against the fields the target
/// struct declares, so a rename never has to be reversed by guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
  #[default]
  AsIs,
  CamelCase,
  PascalCase,
  SnakeCase,
  KebabCase,
}

impl NamingPolicy {
  pub fn to_wire_name(&self, name: &str) -> String {
    match self {
      NamingPolicy::AsIs => name.to_string(),
      NamingPolicy::CamelCase => name.to_lower_camel_case(),
      NamingPolicy::PascalCase => name.to_upper_camel_case(),
      NamingPolicy::SnakeCase => name.to_snake_case(),
      NamingPolicy::KebabCase => name.to_kebab_case(),
    }
  }

  /// Finds the declared field that `wire_name` was written for.
  pub fn field_for_wire_name(&self, wire_name: &str, fields: &'static [&'static str]) -> Option<&'static str> {
    fields
      .iter()
      .copied()
      .find(|field| self.to_wire_name(field) == wire_name)
  }
}
