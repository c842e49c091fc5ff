pub mod html;
pub mod node;
pub mod value;

pub use html::Html;
pub use node::{Node, Tag};
pub use value::AttributeValue;

pub type Attributes = Vec<(String, value::AttributeValue)>;
