//! Errors raised while turning loosely-typed input into a renderable tree.

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// A value claims a node kind but one of its fields is missing or malformed.
  #[error("malformed node at {path}: {message}")]
  Shape { path: String, message: String },

  /// The fallback path could not turn a value into text.
  #[error("cannot render {kind} at {path} as text")]
  Coercion { path: String, kind: &'static str },

  #[error("tag at {path} has an empty name")]
  EmptyTagName { path: String },

  /// Input text was not valid JSON.
  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

impl Error {
  pub(crate) fn shape(path: &str, message: impl Into<String>) -> Error {
    Error::Shape {
      path: display_path(path),
      message: message.into(),
    }
  }

  pub(crate) fn coercion(path: &str, kind: &'static str) -> Error {
    Error::Coercion {
      path: display_path(path),
      kind,
    }
  }

  pub(crate) fn empty_tag_name(path: &str) -> Error {
    Error::EmptyTagName {
      path: display_path(path),
    }
  }
}

fn display_path(path: &str) -> String {
  if path.is_empty() {
    "/".to_owned()
  } else {
    path.to_owned()
  }
}
