//! Fast but sloppy rendering of HTML tag trees.
//!
//! A tree of [`Node`]s is written out as indented HTML text, or as a single
//! line in compact mode. Attribute values and text are escaped, pre-marked
//! [`Html`] is copied through untouched. Trees can be built in Rust with the
//! [`tag!`] macro or decoded from JSON.
//!
//! Singleton handling, `<head>` merging, dependency resolution and merging of
//! same-named attributes are left to whoever builds the tree.
//!
//! ```
//! use fasttags::{render, tag};
//!
//! let page = tag!("div", {class = "greeting"}, [tag!("span", ["Hi"])]);
//! assert_eq!(
//!   render(&page).as_str(),
//!   "<div class=\"greeting\">\n  <span>Hi</span>\n</div>\n"
//! );
//! ```

#[macro_use]
pub mod macros;
pub mod convert;
pub mod error;
pub mod model;
pub mod render;

pub use error::{Error, Result};
pub use model::{AttributeValue, Attributes, Html, Node, Tag};
pub use render::{render, render_json, render_json_str, render_with, RenderOptions};
