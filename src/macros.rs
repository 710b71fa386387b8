//! The `attrs!` ordered attribute-list literal.

/// Builds an ordered attribute list from `key: value` pairs.
///
/// Expands to a `Vec<(String, Value)>` suitable for every constructor and
/// update call in the crate. Keys are written as identifiers (use an
/// underscore where the serialized attribute name has a hyphen:
/// `stroke_width` renders as `stroke-width`) or as string literals for names
/// that are not valid identifiers, such as `"xmlns:xlink"`. Values are
/// anything convertible to [`Value`](crate::tree::Value). Pairs keep their
/// written order, which is the serialization order.
///
/// # Examples
///
/// ```
/// use tagtree::{attrs, serialize, Tree};
///
/// let tree = Tree::new("line", attrs![x1: 0, y1: 0, x2: 10, y2: 10, stroke_width: 2]);
/// assert!(serialize(&tree).contains("stroke-width=\"2\""));
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        ::std::vec::Vec::<(::std::string::String, $crate::tree::Value)>::new()
    };
    ($($key:tt : $value:expr),+ $(,)?) => {
        ::std::vec![
            $((
                ::std::string::ToString::to_string($crate::attr_name!($key)),
                $crate::tree::Value::from($value),
            )),+
        ]
    };
}

/// Turns an `attrs!` key token into a `&str`. Not part of the public API.
#[doc(hidden)]
#[macro_export]
macro_rules! attr_name {
    ($key:literal) => {
        $key
    };
    ($key:ident) => {
        ::std::stringify!($key)
    };
}

#[cfg(test)]
mod tests {
    use crate::tree::Value;

    #[test]
    fn test_attrs_empty() {
        let list = attrs![];
        assert!(list.is_empty());
    }

    #[test]
    fn test_attrs_preserves_order_and_types() {
        let list = attrs![x: 1, fill: "red", opacity: 0.5];
        assert_eq!(list.len(), 3);
        assert_eq!(list[0], ("x".to_string(), Value::Int(1)));
        assert_eq!(list[1], ("fill".to_string(), Value::Str("red".to_string())));
        assert_eq!(list[2], ("opacity".to_string(), Value::Float(0.5)));
    }

    #[test]
    fn test_attrs_string_literal_key() {
        let list = attrs!["xmlns:xlink": "http://www.w3.org/1999/xlink", class: "animated"];
        assert_eq!(list[0].0, "xmlns:xlink");
        assert_eq!(list[1].0, "class");
    }

    #[test]
    fn test_attrs_trailing_comma() {
        let list = attrs![x: 1, y: 2,];
        assert_eq!(list.len(), 2);
    }
}
