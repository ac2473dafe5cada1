//! Ready-made pseudotags: a labelled input and complete pages.

use htmlgen_tags::TagKind;
use kstring::KString;

use crate::{attr::{Attributes, IntoAttributes},
            content::Content,
            myfrom::MyFrom,
            pseudotag::{Pseudotag, Skeleton},
            tag::Tag,
            taglist::TagList,
            tags::{BODY, GETJQ, HEAD, HTML, INPUT, LABEL, LINK, TITLE}};

/// `<!DOCTYPE html>`
pub fn doctype() -> Tag {
    Tag::with_kind("!DOCTYPE", TagKind::Lone).attrs([("html", true)])
}

#[derive(Debug)]
struct Labin {
    label_text: KString,
    name: KString,
    label_attrs: Attributes,
}

impl Skeleton for Labin {
    fn wrap(&self, heart: &Tag) -> TagList {
        let label = LABEL
            .attrs([("for_", &self.name)])
            .call(&self.label_text, self.label_attrs.clone());
        TagList::new((label, heart))
    }
}

/// A label followed by the input it labels:
/// `<label for="{name}" ...>{label_text}</label><input name="{name}" ... />`.
/// The heart is the input.
pub fn labin<T, N>(label_text: T,
                   name: N,
                   label_attrs: impl IntoAttributes,
                   input_attrs: impl IntoAttributes)
                   -> Pseudotag
where KString: MyFrom<T> + MyFrom<N>
{
    let name = KString::myfrom(name);
    let heart = INPUT.attrs([("name", &name)]).attrs(input_attrs);
    Pseudotag::new(heart, Labin {
        label_text: KString::myfrom(label_text),
        name,
        label_attrs: label_attrs.into_attributes(),
    })
}

#[derive(Debug)]
struct SimplePage;

impl Skeleton for SimplePage {
    fn wrap(&self, heart: &Tag) -> TagList {
        TagList::new((doctype(), heart))
    }
}

/// A doctype followed by `<html ...>{children}</html>`. The heart is
/// the html tag.
pub fn simple_page(children: impl Into<Content>, attrs: impl IntoAttributes) -> Pseudotag {
    Pseudotag::new(HTML.call(children, attrs), SimplePage)
}

#[derive(Debug)]
struct Page {
    title: KString,
    css: Option<KString>,
    jquery: bool,
}

impl Skeleton for Page {
    fn wrap(&self, heart: &Tag) -> TagList {
        let link = self.css.as_ref().map(
            |css| LINK.attrs([("rel", "stylesheet"), ("href", css.as_str())]));
        let head = HEAD.with((
            TITLE.with(&self.title),
            link,
            self.jquery.then(|| &*GETJQ),
        ));
        TagList::new((doctype(), HTML.with((head, heart))))
    }
}

fn page_with(title: &str,
             css: Option<&str>,
             jquery: bool,
             children: impl Into<Content>,
             attrs: impl IntoAttributes)
             -> Pseudotag
{
    Pseudotag::new(BODY.call(children, attrs), Page {
        title: KString::from_ref(title),
        css: css.filter(|s| !s.is_empty()).map(KString::from_ref),
        jquery,
    })
}

/// A complete page: doctype, html, a head with `title` and, unless
/// `css` is None or empty, a stylesheet link. The heart is the body.
pub fn page(title: &str,
            css: Option<&str>,
            children: impl Into<Content>,
            attrs: impl IntoAttributes)
            -> Pseudotag
{
    page_with(title, css, false, children, attrs)
}

/// Like `page`, with jQuery loaded in the head.
pub fn jq_page(title: &str,
               css: Option<&str>,
               children: impl Into<Content>,
               attrs: impl IntoAttributes)
               -> Pseudotag
{
    page_with(title, css, true, children, attrs)
}


#[cfg(test)]
mod tests {
    use crate::{node::Node, tags::{H1, JQUERY_URL}};

    use super::*;

    #[test]
    fn t_doctype() {
        assert_eq!(doctype().to_html_string(), "<!DOCTYPE html>");
    }

    #[test]
    fn t_labin() {
        let l = labin("Name:", "user", [("class_", "lbl")], [("r#type", "text")]);
        assert_eq!(l.to_html_string(),
                   "<label for=\"user\" class=\"lbl\">Name:</label>\
                    <input name=\"user\" type=\"text\" />");
        assert_eq!(l.heart().name(), "input");
        assert!(l.is_empty());
    }

    #[test]
    fn t_simple_page() {
        let p = simple_page("hi", [("lang", "en")]);
        assert_eq!(p.to_html_string(), "<!DOCTYPE html><html lang=\"en\">hi</html>");
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn t_page() {
        let p = page("T", Some("s.css"), H1.with("x"), Attributes::new());
        assert_eq!(p.to_html_string(),
                   "<!DOCTYPE html><html><head><title>T</title>\
                    <link rel=\"stylesheet\" href=\"s.css\" /></head>\
                    <body><h1>x</h1></body></html>");
        // the heart is the body
        assert_eq!(p.len(), 1);
        let p2 = p.with("more");
        assert_eq!(p2.len(), 2);
        assert!(p2.to_html_string().ends_with("<h1>x</h1>more</body></html>"));

        let bare = page("T", None, (), [("id", "b")]);
        assert_eq!(bare.to_html_string(),
                   "<!DOCTYPE html><html><head><title>T</title></head>\
                    <body id=\"b\" /></html>");
        // an empty css name means no stylesheet
        assert!(!page("T", Some(""), (), Attributes::new()).to_html_string().contains("<link"));
    }

    #[test]
    fn t_jq_page() {
        let p = jq_page("T", None, "x", Attributes::new());
        assert_eq!(p.to_html_string(),
                   format!("<!DOCTYPE html><html><head><title>T</title>\
                            <script src=\"{JQUERY_URL}\"></script></head>\
                            <body>x</body></html>"));
    }
}
