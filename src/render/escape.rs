//! Character substitution for text content and attribute values.

pub fn write_escaped(out: &mut String, text: &str) {
  for ch in text.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      _ => out.push(ch),
    }
  }
}

pub fn write_attribute_value(out: &mut String, value: &str) {
  for ch in value.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '\'' => out.push_str("&#39;"),
      '"' => out.push_str("&quot;"),
      '\r' => out.push_str("&#13;"),
      '\n' => out.push_str("&#10;"),
      _ => out.push(ch),
    }
  }
}

/// Escapes `text` for use between tags.
pub fn escape_text(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  write_escaped(&mut out, text);
  out
}

/// Escapes `value` for use inside a double-quoted attribute.
pub fn escape_attribute(value: &str) -> String {
  let mut out = String::with_capacity(value.len());
  write_attribute_value(&mut out, value);
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn unescape(text: &str) -> String {
    text
      .replace("&lt;", "<")
      .replace("&gt;", ">")
      .replace("&quot;", "\"")
      .replace("&#39;", "'")
      .replace("&#13;", "\r")
      .replace("&#10;", "\n")
      .replace("&amp;", "&")
  }

  const SAMPLES: &[&str] = &[
    "",
    "plain text",
    "a < b && c > d",
    "&amp; already",
    "<script>alert('x')</script>",
    "quote \" and 'apostrophe'",
    "line one\r\nline two",
    "ünïcödé → ✓ &",
  ];

  #[test]
  fn text_escaping() {
    assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    assert_eq!(escape_text("\"quoted\" 'text'\n"), "\"quoted\" 'text'\n");
  }

  #[test]
  fn attribute_escaping() {
    assert_eq!(escape_attribute("a&b\"c"), "a&amp;b&quot;c");
    assert_eq!(escape_attribute("it's\r\n<ok>"), "it&#39;s&#13;&#10;&lt;ok&gt;");
  }

  #[test]
  fn escaped_text_has_no_markup_characters() {
    for sample in SAMPLES {
      let escaped = escape_text(sample);
      assert!(!escaped.contains('<') && !escaped.contains('>'), "{escaped}");
      assert_eq!(
        escaped.matches('&').count(),
        escaped.matches("&amp;").count()
          + escaped.matches("&lt;").count()
          + escaped.matches("&gt;").count()
      );
      assert_eq!(unescape(&escaped), *sample);
    }
  }

  #[test]
  fn escaped_attributes_have_no_quotes_or_line_breaks() {
    for sample in SAMPLES {
      let escaped = escape_attribute(sample);
      for forbidden in ['<', '>', '\'', '"', '\r', '\n'] {
        assert!(!escaped.contains(forbidden), "{escaped:?}");
      }
      assert_eq!(unescape(&escaped), *sample);
    }
  }

  #[test]
  fn writers_append_to_the_buffer() {
    let mut out = String::from("x=");
    write_attribute_value(&mut out, "<");
    write_escaped(&mut out, ">");
    assert_eq!(out, "x=&lt;&gt;");
  }
}
