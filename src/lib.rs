//! # tagtree
//!
//! A minimal document-object model for generating XML-family markup
//! programmatically rather than by string concatenation. Build a tree of
//! elements — tag name, ordered attributes, ordered children that are either
//! text or nested elements — then serialize it deterministically to a markup
//! string or save it straight to a file.
//!
//! Elements created with the `"svg"` tag automatically carry the SVG and
//! XLink namespace declarations, which makes the crate a convenient SVG
//! generator; everything else is format-agnostic. Note that values are
//! emitted verbatim: the serializer performs no escaping, so callers must
//! keep `<`, `&`, and `"` out of attribute and text content.
//!
//! ## Quick Start
//!
//! ```
//! use tagtree::{attrs, serialize, Tree};
//!
//! let mut picture = Tree::new("svg", attrs![width: "100px", height: "100px"]);
//! let root = picture.root();
//! picture.append_element(root, "circle", attrs![cx: 50, cy: 50, r: 40, fill: "teal"]);
//! let label = picture.append_element(root, "text", attrs![x: 10, y: 90]);
//! picture.append_text(label, "hello");
//!
//! let svg = serialize(&picture);
//! assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
//! assert!(svg.contains("<text x=\"10\" y=\"90\">hello</text>"));
//! ```

pub mod error;
mod macros;
pub mod serial;
pub mod tree;

// Re-export primary types at the crate root for convenience.
pub use error::SaveError;
pub use serial::{save, serialize, serialize_node};
pub use tree::{Attribute, NodeId, Tree, Value};
