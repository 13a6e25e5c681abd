use crate::codec::NamingPolicy;
use serde::{Deserialize, Serialize};


/// Controls how message fields map to wire members.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MappingOptions {
  pub naming_policy: NamingPolicy,
  /// Drops struct fields whose value is `null` when writing. Map entries are kept.
  pub ignore_null_values: bool,
}

impl MappingOptions {
  pub fn new(naming_policy: NamingPolicy, ignore_null_values: bool) -> Self {
    Self {
      naming_policy,
      ignore_null_values,
    }
  }

  pub fn with_naming_policy(mut self, naming_policy: NamingPolicy) -> Self {
    self.naming_policy = naming_policy;
    self
  }

  pub fn with_ignore_null_values(mut self, ignore_null_values: bool) -> Self {
    self.ignore_null_values = ignore_null_values;
    self
  }

  /// Nothing to transform: values are written and read without an intermediate tree.
  pub fn is_identity(&self) -> bool {
    self.naming_policy == NamingPolicy::AsIs && !self.ignore_null_values
  }
}
