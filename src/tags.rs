//! Prototypes for the predefined tags, and construction by name via
//! the tag table.

//! Prototypes are never changed; derive variants with `call`, `with`
//! or `attrs`, e.g. `A.call("home", [("href", "/")])`.

use htmlgen_tags::{TagDb, TAGDB};
use kstring::KString;
use lazy_static::lazy_static;

use crate::{error::{HtmlGenErrorKind, Result}, myfrom::MyFrom, tag::Tag};

// The kind of each prototype is looked up in the tag table, so that
// redefinitions via `HTMLGEN_EXTRA_TAGS` apply to prototypes too.
macro_rules! def_prototypes {
    { $($const_name:ident: $tag_name:literal, $kind:ident;)* } => {
        lazy_static! {
            $(
                pub static ref $const_name: Tag = tag($tag_name);
            )*
        }

        /// All prototypes defined in this module, in definition order.
        pub fn all_prototypes() -> Vec<&'static Tag> {
            vec![$(&*$const_name),*]
        }
    }
}

htmlgen_tags::with_builtin_tags!(def_prototypes);

pub const JQUERY_URL: &str = "http://ajax.googleapis.com/ajax/libs/jquery/1.11.3/jquery.min.js";

lazy_static! {
    /// Loads jQuery.
    pub static ref GETJQ: Tag = SCRIPT.attrs([("src", JQUERY_URL)]);
}

/// A tag of the kind registered in the tag table for `name`, `Normal`
/// for names not in the table.
pub fn tag<N>(name: N) -> Tag
where KString: MyFrom<N>
{
    tag_in(&TAGDB, name)
}

/// Like `tag`, with the kind looked up in `db`.
pub fn tag_in<N>(db: &TagDb, name: N) -> Tag
where KString: MyFrom<N>
{
    let name: KString = KString::myfrom(name);
    let kind = db.kind_of(&name).unwrap_or_default();
    Tag::with_kind::<KString>(name, kind)
}

/// Like `tag`, but only for names in the tag table (which includes
/// additions from `HTMLGEN_EXTRA_TAGS`).
pub fn prototype(name: &str) -> Result<Tag> {
    match TAGDB.get(name) {
        Some(meta) => Ok(Tag::with_kind(&meta.tag_name, meta.kind)),
        None => Err(HtmlGenErrorKind::UnknownTag(KString::from_ref(name)).into()),
    }
}

#[cfg(test)]
mod tests {
    use htmlgen_tags::TagKind;

    use crate::node::Node;

    use super::*;

    #[test]
    fn t_prototypes_match_table() {
        let db = TagDb::builtin();
        let protos = all_prototypes();
        assert_eq!(protos.len(), db.len());
        for (proto, meta) in protos.iter().zip(db.iter()) {
            assert_eq!(proto.name(), meta.tag_name.as_str());
            assert_eq!(Some(proto.kind()), TAGDB.kind_of(proto.name()));
            assert!(proto.is_empty());
            assert!(proto.attributes().is_empty());
        }
    }

    #[test]
    fn t_kinds_follow_the_table() -> anyhow::Result<()> {
        let mut db = TagDb::builtin();
        assert_eq!(tag_in(&db, "div").to_html_string(), "<div />");
        assert_eq!(tag_in(&db, "img").to_html_string(), "<img />");
        db.extend_from_list("div:forced_pair,img:lone")?;
        assert_eq!(tag_in(&db, "div").to_html_string(), "<div></div>");
        assert_eq!(tag_in(&db, "img").to_html_string(), "<img>");
        assert_eq!(tag_in(&db, String::from("blink")).kind(), TagKind::Normal);
        Ok(())
    }

    #[test]
    fn t_rendering_by_kind() {
        assert_eq!(BR.to_html_string(), "<br>");
        assert_eq!(DIV.to_html_string(), "<div />");
        assert_eq!(TEXTAREA.to_html_string(), "<textarea></textarea>");
        assert_eq!(SEL.with(OPTION.with("x")).to_html_string(),
                   "<select><option>x</option></select>");
        assert_eq!(GETJQ.to_html_string(), format!("<script src=\"{JQUERY_URL}\"></script>"));
    }

    #[test]
    fn t_by_name() {
        assert_eq!(tag("hr").kind(), TagKind::Lone);
        assert_eq!(tag("blink").kind(), TagKind::Normal);
        assert_eq!(tag(String::from("video")).to_html_string(), "<video></video>");
        assert_eq!(prototype("script").map(|t| t.kind()).ok(), Some(TagKind::ForcedPair));
        let e = prototype("blink").unwrap_err();
        assert!(matches!(&*e, HtmlGenErrorKind::UnknownTag(n) if n.as_str() == "blink"));
        assert_eq!(e.to_string(), "unknown tag \"blink\"");
    }
}
