const UNIT: &str = "  ";

/// Pretty-printing depth, or no formatting at all.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Indent {
  Pretty(usize),
  Compact,
}

impl Default for Indent {
  fn default() -> Self {
    Indent::Pretty(0)
  }
}

impl Indent {
  /// The state for children of a node rendered at `self`. Compact is sticky.
  pub fn nested(self) -> Indent {
    match self {
      Indent::Pretty(depth) => Indent::Pretty(depth + 1),
      Indent::Compact => Indent::Compact,
    }
  }

  pub fn is_compact(self) -> bool {
    matches!(self, Indent::Compact)
  }

  pub fn write_indent(self, out: &mut String) {
    if let Indent::Pretty(depth) = self {
      for _ in 0..depth {
        out.push_str(UNIT);
      }
    }
  }

  pub fn write_eol(self, out: &mut String) {
    if let Indent::Pretty(_) = self {
      out.push('\n');
    }
  }
}
