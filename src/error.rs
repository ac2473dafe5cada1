//! Error type of htmlgen.

//! `HtmlGenError` boxes `HtmlGenErrorKind` so that `Result`s stay one
//! pointer wide on the happy path; the kind is reachable via `Deref`.

use kstring::KString;

use crate::def_boxed_error;

#[derive(thiserror::Error, Debug)]
pub enum HtmlGenErrorKind {
    #[error("invalid content kind at {path}: {kind} is neither text, node nor sequence")]
    InvalidContentKind {
        path: KString,
        kind: &'static str,
    },
    #[error("invalid value for attribute \"{name}\": {kind} cannot be an attribute value")]
    InvalidAttributeValue {
        name: KString,
        kind: &'static str,
    },
    #[error("index {index} out of range for {len} children")]
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    #[error("unknown tag \"{0}\"")]
    UnknownTag(KString),
}

def_boxed_error!(HtmlGenError, HtmlGenErrorKind);

pub type Result<T, E = HtmlGenError> = std::result::Result<T, E>;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_size() {
        assert_eq!(std::mem::size_of::<HtmlGenError>(),
                   std::mem::size_of::<usize>());
    }

    #[test]
    fn t_display() {
        let e: HtmlGenError = HtmlGenErrorKind::IndexOutOfRange {
            index: 3, len: 2
        }.into();
        assert_eq!(e.to_string(), "index 3 out of range for 2 children");
        assert!(matches!(*e, HtmlGenErrorKind::IndexOutOfRange { index: 3, .. }));
        assert!(matches!(e.kind(), HtmlGenErrorKind::IndexOutOfRange { len: 2, .. }));
    }

    #[test]
    fn t_question_mark_converts_kind() {
        fn fails() -> Result<()> {
            let r: std::result::Result<(), HtmlGenErrorKind> =
                Err(HtmlGenErrorKind::UnknownTag(KString::from_static("blink")));
            r?;
            Ok(())
        }
        let e = fails().unwrap_err();
        assert_eq!(e.to_string(), "unknown tag \"blink\"");
        assert!(std::error::Error::source(&e).is_none());
    }
}
