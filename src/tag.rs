//! A named HTML element with attributes and children.

use std::{fmt, ops::{Index, IndexMut}, slice::SliceIndex, sync::Arc};

use htmlgen_tags::TagKind;
use itertools::Itertools;
use kstring::KString;

use crate::{attr::{AttValue, Attributes, IntoAttributes},
            config::RenderConfig,
            content::Content,
            flat::flatten_into,
            myfrom::MyFrom,
            node::{impl_concat, print_leaves, IntoLeaves, Leaf, Node},
            trace};

/// Tags are values: `call`, `with` and `attrs` return a new tag and
/// leave the receiver untouched, so that a tag can serve as a
/// prototype for any number of variants:
///
/// ```
/// use htmlgen::{Tag, Node};
/// let item = Tag::new("li").attrs([("class_", "item")]);
/// let a = item.with("a");
/// let b = item.with("b");
/// assert_eq!(a.to_html_string(), r#"<li class="item">a</li>"#);
/// assert_eq!(b.to_html_string(), r#"<li class="item">b</li>"#);
/// assert_eq!(item.to_html_string(), r#"<li class="item" />"#);
/// ```
#[derive(Clone, PartialEq)]
pub struct Tag {
    name: KString,
    kind: TagKind,
    attrs: Attributes,
    children: Vec<Leaf>,
}

impl Tag {
    /// A `Normal` tag without attributes or children.
    pub fn new<N>(name: N) -> Tag
    where KString: MyFrom<N>
    {
        Tag::with_kind(name, TagKind::Normal)
    }

    pub fn with_kind<N>(name: N, kind: TagKind) -> Tag
    where KString: MyFrom<N>
    {
        Tag {
            name: KString::myfrom(name),
            kind,
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// `children` are flattened, attribute keywords mapped to HTML
    /// attribute names (see `attribute_name`).
    pub fn build<N>(name: N, children: impl Into<Content>, attrs: impl IntoAttributes) -> Tag
    where KString: MyFrom<N>
    {
        Tag::new(name).call(children, attrs)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    /// A new tag with the same name, the attributes of `self` updated
    /// by `attrs`, and the children of `self` followed by the
    /// flattened `children`.
    pub fn call(&self, children: impl Into<Content>, attrs: impl IntoAttributes) -> Tag {
        let mut tag = Tag {
            name: self.name.clone(),
            kind: self.kind,
            attrs: self.attrs.merged(attrs.into_attributes()),
            children: self.children.clone(),
        };
        flatten_into(children.into(), &mut tag.children);
        tag
    }

    /// `call` without attributes.
    pub fn with(&self, children: impl Into<Content>) -> Tag {
        let mut tag = self.clone();
        flatten_into(children.into(), &mut tag.children);
        tag
    }

    /// `call` without children.
    pub fn attrs(&self, attrs: impl IntoAttributes) -> Tag {
        Tag {
            name: self.name.clone(),
            kind: self.kind,
            attrs: self.attrs.merged(attrs.into_attributes()),
            children: self.children.clone(),
        }
    }

    /// `call` with a single attribute keyword.
    pub fn attr(&self, keyword: &str, value: impl Into<AttValue>) -> Tag {
        let mut tag = self.clone();
        tag.attrs.set_keyword(keyword, value);
        tag
    }

    fn has_pair(&self) -> bool {
        !self.children.is_empty() || self.kind == TagKind::ForcedPair
    }
}

impl Node for Tag {
    fn children(&self) -> &[Leaf] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Leaf> {
        &mut self.children
    }

    fn print_html(&self, out: &mut dyn fmt::Write, config: &RenderConfig) -> fmt::Result {
        out.write_char('<')?;
        out.write_str(&self.name)?;
        self.attrs.print_html(out)?;
        if self.has_pair() {
            if self.kind == TagKind::Lone {
                trace!("lone tag {:?} has children, writing a closing tag", self.name.as_str());
            }
            out.write_char('>')?;
            out.write_str(&config.spacer)?;
            print_leaves(&self.children, out, config)?;
            out.write_str(&config.spacer)?;
            out.write_str("</")?;
            out.write_str(&self.name)?;
            out.write_char('>')
        } else if self.kind == TagKind::Lone {
            out.write_char('>')
        } else {
            out.write_str(" />")
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print_html(f, &RenderConfig::default())
    }
}

/// Shows the expression building the tag, e.g.
/// `Tag("a", href = "x.html")("x")`.
impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({:?}", self.name.as_str())?;
        if self.kind != TagKind::Normal {
            write!(f, ", {}", self.kind)?;
        }
        for (k, v) in self.attrs.iter() {
            match v {
                AttValue::Text(s) => write!(f, ", {k} = {:?}", s.as_str())?,
                AttValue::Flag(b) => write!(f, ", {k} = {b}")?,
            }
        }
        f.write_str(")")?;
        if !self.children.is_empty() {
            write!(f, "({})", self.children.iter().map(|c| format!("{c:?}")).join(", "))?;
        }
        Ok(())
    }
}

impl<I: SliceIndex<[Leaf]>> Index<I> for Tag {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.children[index]
    }
}

impl<I: SliceIndex<[Leaf]>> IndexMut<I> for Tag {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.children[index]
    }
}

impl<'t> IntoIterator for &'t Tag {
    type Item = &'t Leaf;
    type IntoIter = std::slice::Iter<'t, Leaf>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl From<Tag> for Leaf {
    fn from(tag: Tag) -> Self {
        Leaf::Node(Arc::new(tag))
    }
}

impl From<&Tag> for Leaf {
    fn from(tag: &Tag) -> Self {
        tag.clone().into()
    }
}

impl From<Tag> for Content {
    fn from(tag: Tag) -> Self {
        Content::Node(Arc::new(tag))
    }
}

impl From<&Tag> for Content {
    fn from(tag: &Tag) -> Self {
        tag.clone().into()
    }
}

impl IntoLeaves for Tag {
    fn into_leaves(self) -> Vec<Leaf> {
        vec![self.into()]
    }
}

impl IntoLeaves for &Tag {
    fn into_leaves(self) -> Vec<Leaf> {
        vec![self.into()]
    }
}

impl_concat!(Tag);
