//! Decoding of JSON node trees, the shape host libraries hand over, into the
//! closed [`Node`] set.

use crate::error::{Error, Result};
use crate::model::{AttributeValue, Attributes, Node, Tag};
use serde_json::{Map, Value};

impl TryFrom<&Value> for Node {
  type Error = Error;

  fn try_from(value: &Value) -> Result<Node> {
    convert_node(value, "")
      .inspect_err(|err| tracing::debug!(error = %err, "Failed to decode node tree"))
  }
}

impl TryFrom<Value> for Node {
  type Error = Error;

  fn try_from(value: Value) -> Result<Node> {
    Node::try_from(&value)
  }
}

impl std::str::FromStr for Node {
  type Err = Error;

  fn from_str(input: &str) -> Result<Node> {
    let value: Value = serde_json::from_str(input)?;
    Node::try_from(&value)
  }
}

pub fn convert_node(value: &Value, path: &str) -> Result<Node> {
  match value {
    Value::Null => Ok(Node::Nil),
    Value::String(text) => Ok(Node::text(text.as_str())),
    Value::Array(items) => items
      .iter()
      .enumerate()
      .map(|(index, item)| convert_node(item, &format!("{path}/{index}")))
      .collect::<Result<Vec<_>>>()
      .map(Node::List),
    Value::Object(object) => convert_object(object, path),
    Value::Number(_) | Value::Bool(_) => {
      tracing::trace!(path, "Coercing scalar to text");
      Ok(Node::Text(vec![value.to_string()]))
    }
  }
}

fn convert_object(object: &Map<String, Value>, path: &str) -> Result<Node> {
  if let Some(html) = object.get("html") {
    return convert_lines(html, &format!("{path}/html")).map(Node::Html);
  }

  if let Some(text) = object.get("text") {
    return convert_lines(text, &format!("{path}/text")).map(Node::Text);
  }

  if ["name", "attribs", "children"]
    .iter()
    .any(|key| object.contains_key(*key))
  {
    return convert_tag(object, path).map(Node::Tag);
  }

  Err(Error::coercion(path, "object"))
}

pub fn convert_tag(object: &Map<String, Value>, path: &str) -> Result<Tag> {
  let name = match object.get("name") {
    Some(Value::String(name)) if name.is_empty() => return Err(Error::empty_tag_name(path)),
    Some(Value::String(name)) => name,
    Some(other) => {
      return Err(Error::shape(
        path,
        format!("tag name must be a string, found {}", kind_of(other)),
      ))
    }
    None => return Err(Error::shape(path, "tag is missing `name`")),
  };

  let attributes = match object.get("attribs") {
    Some(Value::Object(attribs)) => convert_attributes(attribs, &format!("{path}/attribs"))?,
    Some(other) => {
      return Err(Error::shape(
        path,
        format!("tag attribs must be an object, found {}", kind_of(other)),
      ))
    }
    None => return Err(Error::shape(path, "tag is missing `attribs`")),
  };

  let children = match object.get("children") {
    Some(Value::Null) => Vec::new(),
    Some(Value::Array(children)) => children
      .iter()
      .enumerate()
      .map(|(index, child)| convert_node(child, &format!("{path}/children/{index}")))
      .collect::<Result<Vec<_>>>()?,
    Some(other) => {
      return Err(Error::shape(
        path,
        format!("tag children must be an array, found {}", kind_of(other)),
      ))
    }
    None => return Err(Error::shape(path, "tag is missing `children`")),
  };

  let mut tag = Tag::new(name.as_str())?;
  tag.attributes = attributes;
  tag.children = children;
  Ok(tag)
}

pub fn convert_attributes(attribs: &Map<String, Value>, path: &str) -> Result<Attributes> {
  attribs
    .iter()
    .map(|(name, value)| {
      convert_attribute_value(value, &format!("{path}/{name}")).map(|value| (name.clone(), value))
    })
    .collect()
}

// Anything that is not exactly one value is written by name alone.
pub fn convert_attribute_value(value: &Value, path: &str) -> Result<AttributeValue> {
  match value {
    Value::Null | Value::Bool(false) => Ok(AttributeValue::Absent),
    Value::Bool(true) => Ok(AttributeValue::Missing),
    Value::String(value) => Ok(AttributeValue::Single(value.clone())),
    Value::Number(value) => Ok(AttributeValue::Single(value.to_string())),
    Value::Array(items) => match &items[..] {
      [Value::String(value)] => Ok(AttributeValue::Single(value.clone())),
      [Value::Number(value)] => Ok(AttributeValue::Single(value.to_string())),
      [Value::Bool(value)] => Ok(AttributeValue::from(*value)),
      [Value::Null] => Ok(AttributeValue::Missing),
      [other] => Err(Error::coercion(&format!("{path}/0"), kind_of(other))),
      _ => Ok(AttributeValue::Missing),
    },
    Value::Object(_) => Err(Error::shape(path, "attribute value must not be an object")),
  }
}

fn convert_lines(value: &Value, path: &str) -> Result<Vec<String>> {
  match value {
    Value::String(line) => Ok(vec![line.clone()]),
    Value::Array(lines) => lines
      .iter()
      .enumerate()
      .map(|(index, line)| match line {
        Value::String(line) => Ok(line.clone()),
        Value::Number(_) | Value::Bool(_) => Ok(line.to_string()),
        other => Err(Error::coercion(&format!("{path}/{index}"), kind_of(other))),
      })
      .collect(),
    other => Err(Error::shape(
      path,
      format!("expected a string or an array of strings, found {}", kind_of(other)),
    )),
  }
}

fn kind_of(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}
