//! The values accepted as children, before flattening.

use std::sync::Arc;

use kstring::KString;
use serde_json::Value;

use crate::{error::{HtmlGenErrorKind, Result},
            myfrom::MyFrom,
            node::{Leaf, Node}};

/// Children as passed to tags: text, nodes, and arbitrarily nested
/// sequences of those. Flattening removes the sequences (see `flat`).
///
/// Scalars (numbers, chars) are converted to their `to_string`
/// text. `None` and `()` convert to `Empty`, which contributes no
/// children.
#[derive(Clone, Debug)]
pub enum Content {
    Empty,
    Text(KString),
    Node(Arc<dyn Node>),
    Seq(Vec<Content>),
}

impl Default for Content {
    fn default() -> Self {
        Content::Empty
    }
}

impl Content {
    pub fn text<T>(s: T) -> Content
    where KString: MyFrom<T>
    {
        Content::Text(KString::myfrom(s))
    }

    pub fn node(node: impl Node + 'static) -> Content {
        Content::Node(Arc::new(node))
    }

    pub fn seq<T: Into<Content>>(items: impl IntoIterator<Item = T>) -> Content {
        Content::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Strings become text, numbers and booleans their text form,
    /// `null` is empty and arrays are sequences. Objects have no
    /// meaning as content and are reported with the index path of the
    /// first one encountered, e.g. `[1][0]`.
    pub fn from_json(value: &Value) -> Result<Content> {
        let mut path = Vec::new();
        from_json_at(value, &mut path)
    }
}

fn format_path(path: &[usize]) -> KString {
    if path.is_empty() {
        return KString::from_static("top level")
    }
    let mut s = String::new();
    for i in path {
        s.push('[');
        s.push_str(&i.to_string());
        s.push(']');
    }
    KString::from_string(s)
}

fn from_json_at(value: &Value, path: &mut Vec<usize>) -> Result<Content> {
    Ok(match value {
        Value::Null => Content::Empty,
        Value::Bool(b) => Content::Text(KString::from_static(if *b { "true" } else { "false" })),
        Value::Number(n) => Content::Text(KString::from_string(n.to_string())),
        Value::String(s) => Content::text(s),
        Value::Array(vals) => {
            let mut items = Vec::with_capacity(vals.len());
            for (i, v) in vals.iter().enumerate() {
                path.push(i);
                items.push(from_json_at(v, path)?);
                path.pop();
            }
            Content::Seq(items)
        }
        Value::Object(_) => {
            return Err(HtmlGenErrorKind::InvalidContentKind {
                path: format_path(path),
                kind: "object"
            }.into())
        }
    })
}

impl From<()> for Content {
    fn from(_: ()) -> Self {
        Content::Empty
    }
}

impl From<Leaf> for Content {
    fn from(leaf: Leaf) -> Self {
        match leaf {
            Leaf::Text(s) => Content::Text(s),
            Leaf::Node(n) => Content::Node(n),
        }
    }
}

impl From<&Leaf> for Content {
    fn from(leaf: &Leaf) -> Self {
        leaf.clone().into()
    }
}

impl From<Arc<dyn Node>> for Content {
    fn from(n: Arc<dyn Node>) -> Self {
        Content::Node(n)
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(v: Option<T>) -> Self {
        v.map_or(Content::Empty, Into::into)
    }
}

impl<T: Into<Content>> From<Vec<T>> for Content {
    fn from(v: Vec<T>) -> Self {
        Content::seq(v)
    }
}

impl<T: Into<Content>, const N: usize> From<[T; N]> for Content {
    fn from(v: [T; N]) -> Self {
        Content::seq(v)
    }
}

impl<T: Into<Content>> FromIterator<T> for Content {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Content::seq(iter)
    }
}

macro_rules! content_from_text {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Content {
                fn from(v: $t) -> Self {
                    Content::Text(KString::myfrom(v))
                }
            }
        )*
    }
}

content_from_text!(&str, &&str, &String, String, KString, &KString, char,
                   i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

// Tuples are how differently typed children are passed in one go:
// `div.with(("Hi ", name, BR.clone()))`.
macro_rules! content_from_tuple {
    ($($t:ident),+) => {
        impl<$($t: Into<Content>),+> From<($($t,)+)> for Content {
            #[allow(non_snake_case)]
            fn from(($($t,)+): ($($t,)+)) -> Self {
                Content::Seq(vec![$($t.into()),+])
            }
        }
    }
}

content_from_tuple!(A);
content_from_tuple!(A, B);
content_from_tuple!(A, B, C);
content_from_tuple!(A, B, C, D);
content_from_tuple!(A, B, C, D, E);
content_from_tuple!(A, B, C, D, E, F);
content_from_tuple!(A, B, C, D, E, F, G);
content_from_tuple!(A, B, C, D, E, F, G, H);
content_from_tuple!(A, B, C, D, E, F, G, H, I);
content_from_tuple!(A, B, C, D, E, F, G, H, I, J);


#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{flat::flatten, Tag};

    use super::*;

    fn texts(c: impl Into<Content>) -> Vec<String> {
        flatten(c).iter().map(|l| l.to_html_string()).collect()
    }

    #[test]
    fn t_conversions() {
        assert_eq!(texts(("a", 1, 2.5, 'c')), vec!["a", "1", "2.5", "c"]);
        assert_eq!(texts(None::<&str>), Vec::<String>::new());
        assert_eq!(texts(Some("x")), vec!["x"]);
        assert_eq!(texts(()), Vec::<String>::new());
        assert_eq!(texts((1..4).collect::<Content>()), vec!["1", "2", "3"]);
        assert_eq!(texts(Leaf::text("l")), vec!["l"]);
        assert_eq!(texts(Content::node(Tag::new("br"))), vec!["<br />"]);
    }

    #[test]
    fn t_from_json() -> Result<()> {
        let c = Content::from_json(&json!(["a", [1, null, true], []]))?;
        assert_eq!(texts(c), vec!["a", "1", "true"]);

        let e = Content::from_json(&json!(["a", [1, {"b": 2}], {}])).unwrap_err();
        assert!(matches!(&*e, HtmlGenErrorKind::InvalidContentKind { kind: "object", .. }));
        assert_eq!(e.to_string(),
                   "invalid content kind at [1][1]: object is neither text, node nor sequence");

        let e = Content::from_json(&json!({})).unwrap_err();
        assert_eq!(e.to_string(),
                   "invalid content kind at top level: object is neither text, node nor sequence");
        Ok(())
    }
}
