//! Flattening nested children into one leaf sequence.

use crate::{content::Content, node::Leaf};

/// All text and nodes in `content`, depth first, left to right.
/// Sequences disappear, nodes are kept whole.
pub fn flatten(content: impl Into<Content>) -> Vec<Leaf> {
    let mut out = Vec::new();
    flatten_into(content.into(), &mut out);
    out
}

/// Like `flatten`, appending to `out`.
pub fn flatten_into(content: Content, out: &mut Vec<Leaf>) {
    match content {
        Content::Empty => (),
        Content::Text(s) => out.push(Leaf::Text(s)),
        Content::Node(n) => out.push(Leaf::Node(n)),
        Content::Seq(items) => {
            out.reserve(items.len());
            for item in items {
                flatten_into(item, out);
            }
        }
    }
}
