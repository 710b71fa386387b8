//! Markup serializer.
//!
//! Serializes a [`Tree`] into a markup string with one fixed layout:
//!
//! - An element with no children renders self-closing: `<tag attrs/>` plus a
//!   trailing newline.
//! - An element with exactly one child renders that child inline between the
//!   open and close tags: `<text x="1">hello</text>` plus a trailing newline.
//! - An element with two or more children renders a newline after the open
//!   tag, then each child's serialization in append order, then the close
//!   tag and a trailing newline.
//! - A text fragment renders verbatim, with no markup and no newline of its
//!   own.
//!
//! Attribute keys are emitted in insertion order with underscores converted
//! to hyphens (`stroke_width` → `stroke-width`); values are converted through
//! [`Value`](crate::tree::Value)'s `Display`. The open tag always carries a
//! single space between the tag name and the attribute fragment, even when
//! the fragment is empty (`<g >`, `<g />`) — downstream consumers depend on
//! these exact bytes, so the spacing is preserved rather than normalized.
//!
//! Nothing is escaped. Attribute or text values containing `<`, `&`, or `"`
//! are emitted verbatim and will produce malformed markup; callers are
//! responsible for supplying markup-safe content.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::SaveError;
use crate::tree::{NodeId, NodeKind, Tree};

/// Serializes the whole tree, starting at its root element.
///
/// This is a pure function of the tree: serializing the same unmutated tree
/// twice yields identical strings.
///
/// # Examples
///
/// ```
/// use tagtree::{attrs, serialize, Tree};
///
/// let tree = Tree::new("rect", attrs![x: 10, y: 20, width: 5, height: 5]);
/// assert_eq!(serialize(&tree), "<rect x=\"10\" y=\"20\" width=\"5\" height=\"5\"/>\n");
/// ```
#[must_use]
pub fn serialize(tree: &Tree) -> String {
    serialize_node(tree, tree.root())
}

/// Serializes the subtree rooted at `id`.
///
/// # Panics
///
/// Panics if `id` does not refer to a valid node in `tree`.
#[must_use]
pub fn serialize_node(tree: &Tree, id: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, id, &mut out);
    out
}

fn write_node(tree: &Tree, id: NodeId, out: &mut String) {
    let data = tree.node(id);
    match &data.kind {
        NodeKind::Element { name, attributes } => {
            out.push('<');
            out.push_str(name);
            // The separating space is unconditional, even with zero
            // attributes (`<g >`). Downstream consumers expect these bytes.
            out.push(' ');
            for (i, attr) in attributes.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                for ch in attr.name.chars() {
                    out.push(if ch == '_' { '-' } else { ch });
                }
                out.push_str("=\"");
                let _ = write!(out, "{}", attr.value);
                out.push('"');
            }

            match data.first_child {
                None => out.push_str("/>\n"),
                Some(only) if data.last_child == Some(only) => {
                    out.push('>');
                    write_node(tree, only, out);
                    out.push_str("</");
                    out.push_str(name);
                    out.push_str(">\n");
                }
                Some(_) => {
                    out.push_str(">\n");
                    for child in tree.children(id) {
                        write_node(tree, child, out);
                    }
                    out.push_str("</");
                    out.push_str(name);
                    out.push_str(">\n");
                }
            }
        }
        NodeKind::Text { content } => out.push_str(content),
    }
}

/// Serializes `tree` and writes the result to `path`, creating the file or
/// truncating any existing content.
///
/// The write is a single synchronous `fs::write` of the whole output. If it
/// fails partway (disk full, for instance), the destination may be left
/// truncated or partially written.
///
/// # Errors
///
/// Returns [`SaveError`] if the destination cannot be opened or written.
///
/// # Examples
///
/// ```no_run
/// use tagtree::{attrs, save, Tree};
///
/// let tree = Tree::new("svg", attrs![width: "100px", height: "100px"]);
/// save(&tree, "picture.svg")?;
/// # Ok::<(), tagtree::SaveError>(())
/// ```
pub fn save<P: AsRef<Path>>(tree: &Tree, path: P) -> Result<(), SaveError> {
    let path = path.as_ref();
    fs::write(path, serialize(tree)).map_err(|source| SaveError {
        path: path.to_path_buf(),
        source,
    })
}
