use serde::{Serialize, Serializer};
use std::fmt;

/// Rendered markup that is already escaped and safe to embed verbatim.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Html(String);

impl Html {
  /// Marks `value` as safe without escaping it.
  pub fn new(value: impl Into<String>) -> Html {
    Html(value.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_string(self) -> String {
    self.0
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }
}

impl fmt::Display for Html {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl AsRef<str> for Html {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl From<Html> for String {
  fn from(value: Html) -> String {
    value.0
  }
}

impl Serialize for Html {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&self.0)
  }
}
