use super::html::Html;
use super::value::AttributeValue;
use super::Attributes;
use crate::error::{Error, Result};

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub enum Node {
  #[default]
  Nil,
  /// Pre-sanitized markup, one entry per output line.
  Html(Vec<String>),
  Tag(Tag),
  /// Plain text, one entry per output line.
  Text(Vec<String>),
  List(Vec<Node>),
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Tag {
  name: String,
  pub attributes: Attributes,
  pub children: Vec<Node>,
}

impl Tag {
  pub fn new(name: impl Into<String>) -> Result<Tag> {
    let name = name.into();
    if name.is_empty() {
      return Err(Error::empty_tag_name(""));
    }

    Ok(Tag {
      name,
      attributes: Attributes::new(),
      children: Vec::new(),
    })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
    self
      .attributes
      .iter()
      .find(|(name, _)| name == key)
      .map(|(_, value)| value)
  }

  pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
    self.attributes.push((key.into(), value.into()));
  }

  pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Tag {
    self.set_attribute(key, value);
    self
  }

  pub fn push(&mut self, child: impl Into<Node>) {
    self.children.push(child.into());
  }

  pub fn with_child(mut self, child: impl Into<Node>) -> Tag {
    self.push(child);
    self
  }

  /// The lone child that can be written on the same line as the tag, if any.
  pub fn simple_child(&self) -> Option<&Node> {
    match &self.children[..] {
      [child] if child.is_simple() => Some(child),
      _ => None,
    }
  }
}

impl Node {
  pub fn text(value: impl Into<String>) -> Node {
    Node::Text(vec![value.into()])
  }

  pub fn html(value: impl Into<String>) -> Node {
    Node::Html(vec![value.into()])
  }

  pub fn is_nil(&self) -> bool {
    matches!(self, Node::Nil)
  }

  /// A non-list node holding exactly one atomic value.
  pub fn is_simple(&self) -> bool {
    match self {
      Node::Text(lines) | Node::Html(lines) => lines.len() == 1,
      _ => false,
    }
  }
}

impl From<Tag> for Node {
  fn from(value: Tag) -> Node {
    Node::Tag(value)
  }
}

impl From<&str> for Node {
  fn from(value: &str) -> Node {
    Node::text(value)
  }
}

impl From<String> for Node {
  fn from(value: String) -> Node {
    Node::text(value)
  }
}

impl From<Html> for Node {
  fn from(value: Html) -> Node {
    Node::Html(vec![value.into_string()])
  }
}

impl From<Vec<Node>> for Node {
  fn from(value: Vec<Node>) -> Node {
    Node::List(value)
  }
}

impl<T: Into<Node>> From<Option<T>> for Node {
  fn from(value: Option<T>) -> Node {
    value.map_or(Node::Nil, Into::into)
  }
}
