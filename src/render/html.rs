use super::escape::{write_attribute_value, write_escaped};
use super::indent::Indent;
use crate::model::{AttributeValue, Node, Tag};

pub fn render(node: &Node, indent: Indent, out: &mut String) {
  match node {
    Node::Nil => (),
    Node::Html(lines) => render_html(lines, indent, out),
    Node::Tag(tag) => render_tag(tag, indent, out),
    Node::Text(lines) => render_text(lines, indent, out),
    Node::List(children) => render_list(children, indent, out),
  }
}

pub fn render_list(children: &[Node], indent: Indent, out: &mut String) {
  for child in children {
    render(child, indent, out);
  }
}

pub fn render_tag(tag: &Tag, indent: Indent, out: &mut String) {
  indent.write_indent(out);
  out.push('<');
  out.push_str(tag.name());

  for (name, value) in &tag.attributes {
    match value {
      AttributeValue::Absent => continue,
      AttributeValue::Missing => {
        out.push(' ');
        out.push_str(name);
      }
      AttributeValue::Single(value) => {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        write_attribute_value(out, value);
        out.push('"');
      }
    }
  }

  out.push('>');

  if let Some(child) = tag.simple_child() {
    render(child, Indent::Compact, out);
  } else if !tag.children.is_empty() {
    indent.write_eol(out);
    render_list(&tag.children, indent.nested(), out);
    indent.write_indent(out);
  }

  out.push_str("</");
  out.push_str(tag.name());
  out.push('>');
  indent.write_eol(out);
}

pub fn render_text(lines: &[String], indent: Indent, out: &mut String) {
  for line in lines {
    indent.write_indent(out);
    write_escaped(out, line);
    indent.write_eol(out);
  }
}

pub fn render_html(lines: &[String], indent: Indent, out: &mut String) {
  for line in lines {
    indent.write_indent(out);
    out.push_str(line);
    indent.write_eol(out);
  }
}
