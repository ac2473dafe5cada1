//! Tags wrapped in a fixed outer structure.

//! A `Pseudotag` behaves like its *heart* tag (children, list
//! operations, the call protocol) but renders as the structure its
//! *skeleton* builds around the heart, e.g. a whole page around a
//! `body`. The skeleton is applied at render time, so changes to the
//! heart's children show up in the output.

use std::{fmt, ops::{Index, IndexMut}, slice::SliceIndex, sync::Arc};

use crate::{attr::IntoAttributes,
            config::RenderConfig,
            content::Content,
            node::{impl_concat, IntoLeaves, Leaf, Node},
            tag::Tag,
            taglist::TagList};

/// Builds the markup surrounding the heart of a pseudotag.
pub trait Skeleton: fmt::Debug + Send + Sync {
    /// The complete structure, containing `heart` somewhere inside.
    fn wrap(&self, heart: &Tag) -> TagList;
}

#[derive(Clone)]
pub struct Pseudotag {
    heart: Tag,
    skeleton: Arc<dyn Skeleton>,
}

impl Pseudotag {
    pub fn new(heart: Tag, skeleton: impl Skeleton + 'static) -> Pseudotag {
        Pseudotag {
            heart,
            skeleton: Arc::new(skeleton),
        }
    }

    pub fn heart(&self) -> &Tag {
        &self.heart
    }

    /// The structure that is rendered.
    pub fn outer(&self) -> TagList {
        self.skeleton.wrap(&self.heart)
    }

    /// Like `Tag::call`, on the heart; the skeleton is shared.
    pub fn call(&self, children: impl Into<Content>, attrs: impl IntoAttributes) -> Pseudotag {
        Pseudotag {
            heart: self.heart.call(children, attrs),
            skeleton: self.skeleton.clone(),
        }
    }

    pub fn with(&self, children: impl Into<Content>) -> Pseudotag {
        Pseudotag {
            heart: self.heart.with(children),
            skeleton: self.skeleton.clone(),
        }
    }
}

impl Node for Pseudotag {
    fn children(&self) -> &[Leaf] {
        self.heart.children()
    }

    fn children_mut(&mut self) -> &mut Vec<Leaf> {
        self.heart.children_mut()
    }

    fn print_html(&self, out: &mut dyn fmt::Write, config: &RenderConfig) -> fmt::Result {
        self.outer().print_html(out, config)
    }
}

impl fmt::Display for Pseudotag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print_html(f, &RenderConfig::default())
    }
}

impl fmt::Debug for Pseudotag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pseudotag({:?}, {:?})", self.skeleton, self.heart)
    }
}

impl<I: SliceIndex<[Leaf]>> Index<I> for Pseudotag {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.heart[index]
    }
}

impl<I: SliceIndex<[Leaf]>> IndexMut<I> for Pseudotag {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.heart[index]
    }
}

impl<'t> IntoIterator for &'t Pseudotag {
    type Item = &'t Leaf;
    type IntoIter = std::slice::Iter<'t, Leaf>;

    fn into_iter(self) -> Self::IntoIter {
        self.heart.children().iter()
    }
}

impl From<Pseudotag> for Leaf {
    fn from(p: Pseudotag) -> Self {
        Leaf::Node(Arc::new(p))
    }
}

impl From<&Pseudotag> for Leaf {
    fn from(p: &Pseudotag) -> Self {
        p.clone().into()
    }
}

impl From<Pseudotag> for Content {
    fn from(p: Pseudotag) -> Self {
        Content::Node(Arc::new(p))
    }
}

impl From<&Pseudotag> for Content {
    fn from(p: &Pseudotag) -> Self {
        p.clone().into()
    }
}

impl IntoLeaves for Pseudotag {
    fn into_leaves(self) -> Vec<Leaf> {
        vec![self.into()]
    }
}

impl IntoLeaves for &Pseudotag {
    fn into_leaves(self) -> Vec<Leaf> {
        vec![self.into()]
    }
}

impl_concat!(Pseudotag);
