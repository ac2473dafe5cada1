//! What tags, tag lists and pseudotags have in common: they render to
//! HTML and act as a sequence of their (already flat) children.

//! Children are `Leaf`s, either text or a shared, immutable node. A
//! node in a child position is never looked into when flattening,
//! even though it is a sequence itself.

//! Mutating the child sequence (`push`, `set`, ...) needs `&mut`
//! access, hence a node shared between threads has to be put behind a
//! lock by the user before it can be changed; reading and rendering
//! shared nodes is fine.

use std::{fmt, slice::SliceIndex, sync::Arc};

use kstring::KString;

use crate::{config::RenderConfig,
            content::Content,
            error::{HtmlGenErrorKind, Result},
            flat::flatten,
            myfrom::MyFrom,
            taglist::TagList};

pub trait Node: fmt::Debug + Send + Sync {
    fn children(&self) -> &[Leaf];

    fn children_mut(&mut self) -> &mut Vec<Leaf>;

    /// Print serialized HTML.
    fn print_html(&self, out: &mut dyn fmt::Write, config: &RenderConfig) -> fmt::Result;

    fn to_html_string_with(&self, config: &RenderConfig) -> String {
        let mut s = String::new();
        // Writing to a String never fails
        let _ = self.print_html(&mut s, config);
        s
    }

    fn to_html_string(&self) -> String {
        self.to_html_string_with(&RenderConfig::default())
    }

    fn len(&self) -> usize {
        self.children().len()
    }

    fn is_empty(&self) -> bool {
        self.children().is_empty()
    }

    fn get(&self, i: usize) -> Option<&Leaf> {
        self.children().get(i)
    }

    fn iter(&self) -> std::slice::Iter<'_, Leaf> {
        self.children().iter()
    }

    /// `node.slice(1..3)`; None if the range is out of bounds.
    fn slice<R>(&self, range: R) -> Option<&[Leaf]>
    where R: SliceIndex<[Leaf], Output = [Leaf]>,
          Self: Sized
    {
        self.children().get(range)
    }

    /// Append `leaf` as is, it is not flattened.
    fn push(&mut self, leaf: impl Into<Leaf>)
    where Self: Sized
    {
        self.children_mut().push(leaf.into())
    }

    fn insert(&mut self, i: usize, leaf: impl Into<Leaf>) -> Result<()>
    where Self: Sized
    {
        let children = self.children_mut();
        let len = children.len();
        check_index(i, len + 1, len)?;
        children.insert(i, leaf.into());
        Ok(())
    }

    /// Replace the child at `i`, returning the previous one.
    fn set(&mut self, i: usize, leaf: impl Into<Leaf>) -> Result<Leaf>
    where Self: Sized
    {
        let children = self.children_mut();
        check_index(i, children.len(), children.len())?;
        Ok(std::mem::replace(&mut children[i], leaf.into()))
    }

    fn remove(&mut self, i: usize) -> Result<Leaf> {
        let children = self.children_mut();
        check_index(i, children.len(), children.len())?;
        Ok(children.remove(i))
    }

    fn pop(&mut self) -> Option<Leaf> {
        self.children_mut().pop()
    }

    /// The flattened `items` with a copy of `self` between each
    /// neighbouring pair.
    fn join(&self, items: impl Into<Content>) -> TagList
    where Self: Clone + Sized + 'static
    {
        let items = flatten(items);
        let mut leaves = Vec::with_capacity((items.len() * 2).saturating_sub(1));
        let separator = Leaf::Node(Arc::new(self.clone()));
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                leaves.push(separator.clone());
            }
            leaves.push(item);
        }
        TagList::from_leaves(leaves)
    }
}

fn check_index(index: usize, limit: usize, len: usize) -> Result<()> {
    if index < limit {
        Ok(())
    } else {
        Err(HtmlGenErrorKind::IndexOutOfRange { index, len }.into())
    }
}

/// Print `leaves` with `config.spacer` between them.
pub fn print_leaves(leaves: &[Leaf], out: &mut dyn fmt::Write, config: &RenderConfig)
                    -> fmt::Result
{
    for (i, leaf) in leaves.iter().enumerate() {
        if i > 0 {
            out.write_str(&config.spacer)?;
        }
        leaf.print_html(out, config)?;
    }
    Ok(())
}


/// An element of a flattened child sequence.
#[derive(Clone)]
pub enum Leaf {
    /// Inserted verbatim, no escaping.
    Text(KString),
    Node(Arc<dyn Node>),
}

impl Leaf {
    pub fn text<T>(s: T) -> Leaf
    where KString: MyFrom<T>
    {
        Leaf::Text(KString::myfrom(s))
    }

    pub fn node(node: impl Node + 'static) -> Leaf {
        Leaf::Node(Arc::new(node))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Leaf::Text(s) => Some(s.as_str()),
            Leaf::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&dyn Node> {
        match self {
            Leaf::Text(_) => None,
            Leaf::Node(n) => Some(&**n),
        }
    }

    pub fn print_html(&self, out: &mut dyn fmt::Write, config: &RenderConfig) -> fmt::Result {
        match self {
            Leaf::Text(s) => out.write_str(s),
            Leaf::Node(n) => n.print_html(out, config),
        }
    }

    pub fn to_html_string(&self) -> String {
        match self {
            Leaf::Text(s) => s.as_str().to_owned(),
            Leaf::Node(n) => n.to_html_string(),
        }
    }
}

/// Node leaves are equal if they are the same node or have the same
/// structure, as shown by their `Debug` form: node type, name, kind,
/// attributes and children. Rendering the same HTML is not enough,
/// `Tag("br")` differs from `TagList(Tag("br"))`.
impl PartialEq for Leaf {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Leaf::Text(a), Leaf::Text(b)) => a == b,
            (Leaf::Node(a), Leaf::Node(b)) =>
                Arc::ptr_eq(a, b) || format!("{a:?}") == format!("{b:?}"),
            _ => false,
        }
    }
}

impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leaf::Text(s) => fmt::Debug::fmt(s.as_str(), f),
            Leaf::Node(n) => fmt::Debug::fmt(&**n, f),
        }
    }
}

impl From<&str> for Leaf {
    fn from(s: &str) -> Self {
        Leaf::text(s)
    }
}

impl From<String> for Leaf {
    fn from(s: String) -> Self {
        Leaf::text(s)
    }
}

impl From<KString> for Leaf {
    fn from(s: KString) -> Self {
        Leaf::Text(s)
    }
}

impl From<Arc<dyn Node>> for Leaf {
    fn from(n: Arc<dyn Node>) -> Self {
        Leaf::Node(n)
    }
}


/// What a value contributes to a concatenation with `+`: a tag list
/// contributes its children, anything else itself as one leaf.
pub trait IntoLeaves {
    fn into_leaves(self) -> Vec<Leaf>;
}

impl IntoLeaves for Leaf {
    fn into_leaves(self) -> Vec<Leaf> {
        vec![self]
    }
}

impl IntoLeaves for &str {
    fn into_leaves(self) -> Vec<Leaf> {
        vec![self.into()]
    }
}

impl IntoLeaves for String {
    fn into_leaves(self) -> Vec<Leaf> {
        vec![self.into()]
    }
}

impl IntoLeaves for KString {
    fn into_leaves(self) -> Vec<Leaf> {
        vec![self.into()]
    }
}

/// `Add` for a node type, its reference, and text on the left.
macro_rules! impl_concat {
    ($t:ty) => {
        impl<R: $crate::node::IntoLeaves> std::ops::Add<R> for $t {
            type Output = $crate::taglist::TagList;

            fn add(self, rhs: R) -> Self::Output {
                let mut leaves = $crate::node::IntoLeaves::into_leaves(self);
                leaves.extend($crate::node::IntoLeaves::into_leaves(rhs));
                $crate::taglist::TagList::from_leaves(leaves)
            }
        }

        impl<'t, R: $crate::node::IntoLeaves> std::ops::Add<R> for &'t $t {
            type Output = $crate::taglist::TagList;

            fn add(self, rhs: R) -> Self::Output {
                self.clone() + rhs
            }
        }

        impl<'t> std::ops::Add<$t> for &'t str {
            type Output = $crate::taglist::TagList;

            fn add(self, rhs: $t) -> Self::Output {
                let mut leaves = $crate::node::IntoLeaves::into_leaves(self);
                leaves.extend($crate::node::IntoLeaves::into_leaves(rhs));
                $crate::taglist::TagList::from_leaves(leaves)
            }
        }
    }
}

pub(crate) use impl_concat;
