use serde::{Serialize, Serializer};

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub enum AttributeValue {
  /// The attribute is dropped from the output entirely.
  #[default]
  Absent,
  /// Rendered by name alone, e.g. `checked`.
  Missing,
  Single(String),
}

impl AttributeValue {
  pub fn is_absent(&self) -> bool {
    matches!(self, AttributeValue::Absent)
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      AttributeValue::Single(value) => Some(value),
      _ => None,
    }
  }
}

impl From<&str> for AttributeValue {
  fn from(value: &str) -> AttributeValue {
    AttributeValue::Single(value.to_owned())
  }
}

impl From<String> for AttributeValue {
  fn from(value: String) -> AttributeValue {
    AttributeValue::Single(value)
  }
}

impl From<i32> for AttributeValue {
  fn from(value: i32) -> AttributeValue {
    AttributeValue::Single(value.to_string())
  }
}

impl From<f64> for AttributeValue {
  fn from(value: f64) -> AttributeValue {
    AttributeValue::Single(value.to_string())
  }
}

impl From<bool> for AttributeValue {
  fn from(value: bool) -> AttributeValue {
    if value {
      AttributeValue::Missing
    } else {
      AttributeValue::Absent
    }
  }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
  fn from(value: Option<T>) -> AttributeValue {
    value.map_or(AttributeValue::Absent, Into::into)
  }
}

impl Serialize for AttributeValue {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self {
      AttributeValue::Absent => serializer.serialize_none(),
      AttributeValue::Missing => serializer.serialize_bool(true),
      AttributeValue::Single(value) => serializer.serialize_str(value),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn booleans_map_to_presence() {
    assert_eq!(AttributeValue::from(true), AttributeValue::Missing);
    assert_eq!(AttributeValue::from(false), AttributeValue::Absent);
  }

  #[test]
  fn options_map_none_to_absent() {
    assert!(AttributeValue::from(None::<&str>).is_absent());
    assert_eq!(AttributeValue::from(Some("main")).as_str(), Some("main"));
    assert_eq!(
      AttributeValue::from(Some("main")),
      AttributeValue::Single("main".into())
    );
  }

  #[test]
  fn serializes_like_the_interchange_format() {
    let values = vec![
      AttributeValue::Absent,
      AttributeValue::Missing,
      AttributeValue::from(3),
    ];

    assert_eq!(
      serde_json::to_string(&values).unwrap(),
      r#"[null,true,"3"]"#
    );
  }
}
