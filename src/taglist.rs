//! An anonymous sequence of children, rendered without enclosing tag.

use std::{fmt, ops::{Index, IndexMut}, slice::SliceIndex, sync::Arc};

use itertools::Itertools;

use crate::{config::RenderConfig,
            content::Content,
            flat::{flatten, flatten_into},
            node::{impl_concat, print_leaves, IntoLeaves, Leaf, Node}};

/// What `+` produces; also useful to return several sibling nodes as
/// one value.
#[derive(Clone, Default, PartialEq)]
pub struct TagList {
    children: Vec<Leaf>,
}

impl TagList {
    pub fn new(children: impl Into<Content>) -> TagList {
        TagList {
            children: flatten(children),
        }
    }

    pub fn from_leaves(children: Vec<Leaf>) -> TagList {
        TagList { children }
    }

    /// A new list with the children of `self` followed by the
    /// flattened `children`.
    pub fn call(&self, children: impl Into<Content>) -> TagList {
        let mut l = self.clone();
        flatten_into(children.into(), &mut l.children);
        l
    }

    pub fn leaves(&self) -> &[Leaf] {
        &self.children
    }
}

impl Node for TagList {
    fn children(&self) -> &[Leaf] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Leaf> {
        &mut self.children
    }

    fn print_html(&self, out: &mut dyn fmt::Write, config: &RenderConfig) -> fmt::Result {
        print_leaves(&self.children, out, config)
    }
}

impl fmt::Display for TagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print_html(f, &RenderConfig::default())
    }
}

impl fmt::Debug for TagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagList({})", self.children.iter().map(|c| format!("{c:?}")).join(", "))
    }
}

impl<I: SliceIndex<[Leaf]>> Index<I> for TagList {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.children[index]
    }
}

impl<I: SliceIndex<[Leaf]>> IndexMut<I> for TagList {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.children[index]
    }
}

impl<'t> IntoIterator for &'t TagList {
    type Item = &'t Leaf;
    type IntoIter = std::slice::Iter<'t, Leaf>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl From<TagList> for Leaf {
    fn from(l: TagList) -> Self {
        Leaf::Node(Arc::new(l))
    }
}

impl From<&TagList> for Leaf {
    fn from(l: &TagList) -> Self {
        l.clone().into()
    }
}

impl From<TagList> for Content {
    fn from(l: TagList) -> Self {
        Content::Node(Arc::new(l))
    }
}

impl From<&TagList> for Content {
    fn from(l: &TagList) -> Self {
        l.clone().into()
    }
}

impl IntoLeaves for TagList {
    fn into_leaves(self) -> Vec<Leaf> {
        self.children
    }
}

impl IntoLeaves for &TagList {
    fn into_leaves(self) -> Vec<Leaf> {
        self.children.clone()
    }
}

impl_concat!(TagList);


#[cfg(test)]
mod tests {
    use htmlgen_tags::TagKind;

    use crate::Tag;

    use super::*;

    #[test]
    fn t_render() {
        let a = Tag::build("a", "x", [("href", "x.html")]);
        let br = Tag::with_kind("br", TagKind::Lone);
        let l = TagList::new((a, br));
        assert_eq!(l.to_html_string(), "<a href=\"x.html\">x</a><br>");
        assert_eq!(format!("{l}"), "<a href=\"x.html\">x</a><br>");
        assert_eq!(TagList::default().to_html_string(), "");
        assert_eq!(TagList::new(("a", "b")).to_html_string_with(&RenderConfig::with_spacer(" ")),
                   "a b");
    }

    #[test]
    fn t_call() {
        let l = TagList::new("a");
        let l2 = l.call(("b", ["c", "d"]));
        assert_eq!(l.len(), 1);
        assert_eq!(l2.len(), 4);
        assert_eq!(l2[1..].iter().filter_map(Leaf::as_text).collect::<Vec<_>>(),
                   vec!["b", "c", "d"]);
    }

    #[test]
    fn t_concat_flat() {
        let l = TagList::new(("a", "b")) + TagList::new("c") + "d" + Tag::new("hr");
        assert_eq!(l.len(), 5);
        assert_eq!(l.to_html_string(), "abcd<hr />");
        assert!((l.clone() + TagList::default()) == l);
        let l2 = "x" + l;
        assert_eq!(l2.len(), 6);
    }

    #[test]
    fn t_nested_list_stays_a_node() {
        let inner = TagList::new(("a", "b"));
        let outer = TagList::new((inner.clone(), "c"));
        assert_eq!(outer.len(), 2);
        assert_eq!(outer[0].as_node().map(|n| n.len()), Some(2));
        assert_eq!(outer.to_html_string(), "abc");
    }

    #[test]
    fn t_debug() {
        let l = TagList::new(("a", Tag::new("br")));
        assert_eq!(format!("{l:?}"), "TagList(\"a\", Tag(\"br\"))");
    }
}
