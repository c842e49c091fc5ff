/// Builds an [`Attributes`](crate::model::Attributes) list, keeping the order
/// the pairs are written in. Keys are identifiers or string literals.
#[macro_export]
macro_rules! attrs {
  (@key $key:ident) => {
    ::std::string::String::from(stringify!($key))
  };

  (@key $key:literal) => {
    ::std::string::String::from($key)
  };

  () => {
    $crate::model::Attributes::new()
  };

  ($($key:tt = $value:expr),+ $(,)?) => {
    vec![
      $(($crate::attrs!(@key $key), $crate::model::AttributeValue::from($value)),)+
    ]
  };
}

/// Builds a [`Node::Tag`](crate::model::Node::Tag).
///
/// Panics if the name is empty.
#[macro_export]
macro_rules! tag {
  ($name:expr) => {
    $crate::tag!($name, {}, [])
  };

  ($name:expr, [$($child:expr),* $(,)?]) => {
    $crate::tag!($name, {}, [$($child),*])
  };

  ($name:expr, {$($attrs:tt)*}) => {
    $crate::tag!($name, {$($attrs)*}, [])
  };

  ($name:expr, {$($attrs:tt)*}, [$($child:expr),* $(,)?]) => {
    $crate::model::Node::Tag({
      let mut tag = $crate::model::Tag::new($name).expect("tag! needs a non-empty name");
      tag.attributes = $crate::attrs!($($attrs)*);
      $(tag.push($child);)*
      tag
    })
  };
}
