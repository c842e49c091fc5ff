//! Serialization of a [`Node`] tree into an HTML string.

pub mod escape;
pub mod html;
pub mod indent;

use crate::error::Result;
use crate::model::{Html, Node};
use indent::Indent;
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
  /// Skip all indentation and line breaks.
  pub compact: bool,
}

impl RenderOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn compact(mut self) -> Self {
    self.compact = true;
    self
  }

  fn indent(&self) -> Indent {
    if self.compact {
      Indent::Compact
    } else {
      Indent::Pretty(0)
    }
  }
}

/// Renders `node` with two-space indentation.
pub fn render(node: &Node) -> Html {
  render_with(node, &RenderOptions::default())
}

pub fn render_with(node: &Node, options: &RenderOptions) -> Html {
  let indent = options.indent();
  let mut out = String::new();
  html::render(node, indent, &mut out);

  let html = Html::new(out);
  tracing::debug!(bytes = html.len(), compact = indent.is_compact(), "Rendered node tree");
  html
}

/// Decodes a JSON node tree and renders it. Nothing is rendered if any part
/// of the tree is malformed.
pub fn render_json(value: &serde_json::Value, options: &RenderOptions) -> Result<Html> {
  let node = Node::try_from(value)?;
  Ok(render_with(&node, options))
}

pub fn render_json_str(input: &str, options: &RenderOptions) -> Result<Html> {
  let value: serde_json::Value = serde_json::from_str(input)?;
  render_json(&value, options)
}
