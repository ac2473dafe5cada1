//! Build HTML from composable tag values instead of strings.

//! A `Tag` has a name, attributes and a flat sequence of children
//! (text or other nodes). Children can be passed nested to any depth
//! (tuples, vectors, arrays, options); they are flattened once, when
//! the tag is built. Calling a tag (`call`, `with`, `attrs`, or the
//! `call!` macro) never changes it but returns an extended copy, so
//! the predefined tags in `tags` work as prototypes:
//!
//! ```
//! use htmlgen::{tags::{A, BR}, Node, TagList};
//! let l = TagList::new((A.call("x", [("href", "x.html")]), &*BR));
//! assert_eq!(l.to_html_string(), r#"<a href="x.html">x</a><br>"#);
//! ```
//!
//! Text and attribute values are written as given, nothing is escaped.

//! Nodes are `Send + Sync`; shared nodes (`Arc<dyn Node>`) can be read
//! and rendered from any thread. Changing a node's children (`push`,
//! `set`, `remove`, ...) requires exclusive access, so a node that is
//! mutated while shared must be protected by the user (e.g. a `Mutex`).

pub mod boxed_error;
pub mod warn;
pub mod error;
pub mod myfrom;
pub mod attr;
pub mod config;
pub mod content;
pub mod flat;
pub mod node;
pub mod tag;
pub mod taglist;
pub mod pseudotag;
pub mod pages;
pub mod tags;
pub mod helpers;

pub use htmlgen_tags::TagKind;
pub use attr::{attribute_name, AttValue, Attributes, IntoAttributes};
pub use config::RenderConfig;
pub use content::Content;
pub use error::{HtmlGenError, HtmlGenErrorKind};
pub use flat::flatten;
pub use helpers::nbsp;
pub use node::{Leaf, Node};
pub use pages::{doctype, jq_page, labin, page, simple_page};
pub use pseudotag::{Pseudotag, Skeleton};
pub use tag::Tag;
pub use taglist::TagList;

/// `tag!("a", href = "x.html"; "x", other)`: a tag built by name with
/// keyword attributes (see `attribute_name`) and children.
#[macro_export]
macro_rules! tag {
    ($name:expr $(, $key:ident = $val:expr)* $(; $($child:expr),* $(,)?)?) => { {
        #[allow(unused_mut)]
        let mut attrs = $crate::Attributes::new();
        $( attrs.set_keyword(stringify!($key), $val); )*
        $crate::Tag::build(
            $name,
            $crate::Content::Seq(vec![$($($crate::Content::from($child)),*)?]),
            attrs)
    } }
}

/// `call!(proto, key = val, ...; child, ...)`: `proto.call(...)` with
/// keyword attributes.
#[macro_export]
macro_rules! call {
    ($proto:expr $(, $key:ident = $val:expr)* $(; $($child:expr),* $(,)?)?) => { {
        #[allow(unused_mut)]
        let mut attrs = $crate::Attributes::new();
        $( attrs.set_keyword(stringify!($key), $val); )*
        $proto.call(
            $crate::Content::Seq(vec![$($($crate::Content::from($child)),*)?]),
            attrs)
    } }
}

/// `taglist![child, ...]`
#[macro_export]
macro_rules! taglist {
    ($($child:expr),* $(,)?) => {
        $crate::TagList::new($crate::Content::Seq(vec![$($crate::Content::from($child)),*]))
    }
}


#[cfg(test)]
mod tests {
    use crate::tags::{A, BR, DIV, IMG, INPUT, SPAN, UL, LI};

    use super::*;

    #[test]
    fn t_end_to_end() {
        let l = taglist![tag!("a", href = "x.html"; "x"), tag!("br")];
        assert_eq!(l.to_html_string(), "<a href=\"x.html\">x</a><br />");

        let l = TagList::new(vec![Tag::build("a", (), [("href", "x.html")]).with("x"),
                                  Tag::new("br")]);
        assert_eq!(l.to_html_string(), "<a href=\"x.html\">x</a><br />");
    }

    #[test]
    fn t_macros() {
        let p = tag!("div", class_ = "x");
        let c1 = call!(p; "child1");
        let c2 = call!(p, class_ = "y"; "child2", 2);
        assert!(p.is_empty());
        assert_eq!(c1.to_html_string(), "<div class=\"x\">child1</div>");
        assert_eq!(c2.to_html_string(), "<div class=\"y\">child22</div>");

        let i = call!(INPUT, r#type = "checkbox", checked = true, disabled = false, data_id = 7);
        assert_eq!(i.to_html_string(), "<input type=\"checkbox\" checked data-id=\"7\" />");

        assert_eq!(call!(A, href = "/").to_html_string(), "<a href=\"/\" />");
        assert_eq!(taglist![].len(), 0);
    }

    #[test]
    fn t_loops_and_conditionals() {
        let items = ["a", "b", "c"];
        let list = UL.with(items.iter().enumerate().map(
            |(i, item)| call!(LI, class_ = (i % 2 == 1).then(|| "odd"); *item)
        ).collect::<Vec<_>>());
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_html_string(),
                   "<ul><li>a</li><li class=\"odd\">b</li><li>c</li></ul>");
    }

    #[test]
    fn t_heterogeneous_children() {
        let name = String::from("World");
        let d = DIV.with(("Hello ", &name, '!', BR.clone(), [SPAN.with(1), SPAN.with(2.5)],
                          None::<Tag>, Some(IMG.attrs([("src", "w.png")]))));
        assert_eq!(d.len(), 7);
        assert_eq!(d.to_html_string(),
                   "<div>Hello World!<br><span>1</span><span>2.5</span>\
                    <img src=\"w.png\" /></div>");
    }

    #[test]
    fn t_shared_between_threads() {
        let proto = std::sync::Arc::new(DIV.attrs([("class_", "t")]));
        let handles: Vec<_> = (0..4).map(|i| {
            let proto = proto.clone();
            std::thread::spawn(move || proto.with(i).to_html_string())
        }).collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), format!("<div class=\"t\">{i}</div>"));
        }
        assert!(proto.is_empty());
    }
}
