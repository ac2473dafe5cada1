//! The table of predefined tags: which names exist and how they close.

use std::{collections::HashMap, env, fmt::Display, str::FromStr};

use anyhow::{anyhow, bail, Context, Result};
use kstring::KString;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::kind::TagKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagMeta {
    /// The element name as written in the markup, e.g. `select`.
    pub tag_name: KString,
    /// The name under which the prototype is exposed, e.g. `SEL`.
    pub const_name: KString,
    pub kind: TagKind,
}

/// Calls the macro named `$callback` with the builtin tags as
/// `CONST_NAME: "tag_name", Kind;` items, so that lists derived from
/// the builtin table (like prototypes) are generated from one source.
#[macro_export]
macro_rules! with_builtin_tags {
    ($callback:ident) => {
        $callback! {
            BR: "br", Lone;
            HR: "hr", Lone;

            A: "a", Normal;
            B: "b", Normal;
            BODY: "body", Normal;
            BUTTON: "button", Normal;
            CODE: "code", Normal;
            DIV: "div", Normal;
            EM: "em", Normal;
            EMBED: "embed", Normal;
            FORM: "form", Normal;
            H1: "h1", Normal;
            H2: "h2", Normal;
            H3: "h3", Normal;
            H4: "h4", Normal;
            H5: "h5", Normal;
            H6: "h6", Normal;
            HEAD: "head", Normal;
            HTML: "html", Normal;
            IFRAME: "iframe", Normal;
            IMG: "img", Normal;
            INPUT: "input", Normal;
            I: "i", Normal;
            LABEL: "label", Normal;
            LINK: "link", Normal;
            OPTION: "option", Normal;
            P: "p", Normal;
            PRE: "pre", Normal;
            SEL: "select", Normal;
            SPAN: "span", Normal;
            STRONG: "strong", Normal;
            STYLE: "style", Normal;
            TITLE: "title", Normal;

            // Tables
            TABLE: "table", Normal;
            TH: "th", Normal;
            TR: "tr", Normal;
            TD: "td", Normal;
            CAPTION: "caption", Normal;
            COLGROUP: "colgroup", Normal;
            THEAD: "thead", Normal;
            TBODY: "tbody", Normal;
            TFOOT: "tfoot", Normal;

            // Lists
            UL: "ul", Normal;
            OL: "ol", Normal;
            LI: "li", Normal;
            DL: "dl", Normal;
            DT: "dt", Normal;
            DD: "dd", Normal;

            SCRIPT: "script", ForcedPair;
            TEXTAREA: "textarea", ForcedPair;
            VIDEO: "video", ForcedPair;
        }
    }
}

macro_rules! builtin_table {
    { $($const_name:ident: $tag_name:literal, $kind:ident;)* } => {
        // (const_name, tag_name, kind)
        const BUILTIN_TAGS: &[(&str, &str, TagKind)] = &[
            $((stringify!($const_name), $tag_name, TagKind::$kind)),*
        ];
    }
}

with_builtin_tags!(builtin_table);

/// Tag metadata indexed by tag name, remembering definition order.
#[derive(Debug, Clone, Default)]
pub struct TagDb {
    order: Vec<KString>,
    by_name: HashMap<KString, TagMeta>,
}

impl TagDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut db = TagDb::new();
        for (const_name, tag_name, kind) in BUILTIN_TAGS {
            db.insert(TagMeta {
                tag_name: KString::from_static(tag_name),
                const_name: KString::from_static(const_name),
                kind: *kind,
            });
        }
        db
    }

    /// Add or redefine an entry. A redefined entry keeps its original
    /// position; the previous definition is returned.
    pub fn insert(&mut self, meta: TagMeta) -> Option<TagMeta> {
        let old = self.by_name.insert(meta.tag_name.clone(), meta.clone());
        if old.is_none() {
            self.order.push(meta.tag_name);
        }
        old
    }

    pub fn get(&self, tag_name: &str) -> Option<&TagMeta> {
        self.by_name.get(tag_name)
    }

    pub fn kind_of(&self, tag_name: &str) -> Option<TagKind> {
        self.get(tag_name).map(|meta| meta.kind)
    }

    /// Unknown tags are not void.
    pub fn is_void(&self, tag_name: &str) -> bool {
        self.kind_of(tag_name).map_or(false, TagKind::is_void)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// In definition order.
    pub fn iter(&self) -> impl Iterator<Item = &TagMeta> {
        self.order.iter().filter_map(move |name| self.by_name.get(name))
    }

    pub fn to_json(&self) -> Result<String> {
        let metas: Vec<&TagMeta> = self.iter().collect();
        Ok(serde_json::to_string_pretty(&metas)?)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let metas: Vec<TagMeta> = serde_json::from_str(s)
            .context("parsing tag table json")?;
        let mut db = TagDb::new();
        for meta in metas {
            db.insert(meta);
        }
        Ok(db)
    }

    /// Add entries from a comma separated list of `name:kind` items,
    /// e.g. `main:normal,wbr:lone`. The prototype name is the upper
    /// cased tag name.
    pub fn extend_from_list(&mut self, list: &str) -> Result<()> {
        for item in list.split(',') {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            let (name, kind) = item.split_once(':').ok_or_else(
                || anyhow!("missing ':' in tag definition {item:?}"))?;
            let name = name.trim();
            if name.is_empty() {
                bail!("empty tag name in tag definition {item:?}")
            }
            let kind: TagKind = kind.parse()
                .with_context(|| anyhow!("tag definition {item:?}"))?;
            self.insert(TagMeta {
                tag_name: KString::from_ref(name),
                const_name: KString::from_string(name.to_uppercase()),
                kind,
            });
        }
        Ok(())
    }
}


fn opt_get_env<T: FromStr>(varname: &str) -> Result<Option<T>>
    where T::Err: Display
{
    match env::var(varname) {
        Ok(s) => {
            Ok(Some(s.parse().map_err(
                |e| anyhow!("could not parse {varname:?} env var with contents {s:?}: {e}"))?))
        },
        Err(e) => match e {
            env::VarError::NotPresent => Ok(None),
            env::VarError::NotUnicode(_) => bail!("could not decode {varname:?} env var: {e}")
        }
    }
}

/// Accepts "1", "true", "yes", "on" and "0", "false", "no", "off" or
/// empty, ignoring case and surrounding whitespace.
pub fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// False if `varname` is not set.
pub fn get_env_bool(varname: &str) -> Result<bool> {
    match opt_get_env::<String>(varname)? {
        Some(s) => parse_flag(&s).ok_or_else(
            || anyhow!("could not parse {varname:?} env var with contents {s:?} \
                        as a flag, expecting 1/0, true/false, yes/no or on/off")),
        None => Ok(false),
    }
}

/// The builtin table, extended by the `HTMLGEN_EXTRA_TAGS` env var
/// if set. An unparseable `HTMLGEN_TAGS_DEBUG` is reported and
/// treated as off.
pub fn read_tag_db() -> Result<TagDb> {
    let debug = get_env_bool("HTMLGEN_TAGS_DEBUG").unwrap_or_else(|e| {
        eprintln!("W: {e:#}, tag table debugging stays off");
        false
    });
    let mut db = TagDb::builtin();
    if let Some(list) = opt_get_env::<String>("HTMLGEN_EXTRA_TAGS")? {
        if debug { eprintln!("adding tags from HTMLGEN_EXTRA_TAGS: {list:?}") };
        db.extend_from_list(&list)
            .context("reading HTMLGEN_EXTRA_TAGS")?;
    }
    if debug { eprintln!("tag table has {} entries", db.len()) };
    Ok(db)
}

lazy_static!{
    pub static ref TAGDB: TagDb = read_tag_db().unwrap_or_else(|e| {
        eprintln!("W: {e:#}, using the builtin tag table");
        TagDb::builtin()
    });
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_builtin() {
        let db = TagDb::builtin();
        assert_eq!(db.len(), BUILTIN_TAGS.len());
        assert_eq!(db.kind_of("br"), Some(TagKind::Lone));
        assert_eq!(db.kind_of("script"), Some(TagKind::ForcedPair));
        assert_eq!(db.kind_of("div"), Some(TagKind::Normal));
        assert_eq!(db.get("select").unwrap().const_name, "SEL");
        assert!(db.is_void("hr"));
        assert!(!db.is_void("img"));
        assert!(!db.is_void("blink"));
        assert_eq!(db.iter().next().unwrap().tag_name, "br");
    }

    #[test]
    fn t_extend_from_list() -> Result<()> {
        let mut db = TagDb::builtin();
        let n = db.len();
        db.extend_from_list("main:normal, wbr:lone,,img:lone")?;
        assert_eq!(db.len(), n + 2);
        assert_eq!(db.kind_of("wbr"), Some(TagKind::Lone));
        assert_eq!(db.get("main").unwrap().const_name, "MAIN");
        // redefined in place
        assert!(db.is_void("img"));
        assert_eq!(db.iter().filter(|m| m.tag_name == "img").count(), 1);

        assert!(db.extend_from_list("main").is_err());
        assert!(db.extend_from_list(":lone").is_err());
        assert!(db.extend_from_list("main:pair").is_err());
        Ok(())
    }

    #[test]
    fn t_parse_flag() {
        for s in ["1", "true", " Yes", "ON"] {
            assert_eq!(parse_flag(s), Some(true), "{s:?}");
        }
        for s in ["", "0", "false", "No", "off "] {
            assert_eq!(parse_flag(s), Some(false), "{s:?}");
        }
        assert_eq!(parse_flag("2"), None);
        assert_eq!(parse_flag("maybe"), None);
    }

    // The only test in this crate touching the environment, so it
    // does not race with others.
    #[test]
    fn t_read_tag_db_env() -> Result<()> {
        env::set_var("HTMLGEN_TAGS_DEBUG", "1");
        env::set_var("HTMLGEN_EXTRA_TAGS", "main:normal,div:forced_pair");
        let db = read_tag_db()?;
        assert_eq!(db.kind_of("main"), Some(TagKind::Normal));
        assert_eq!(db.kind_of("div"), Some(TagKind::ForcedPair));
        assert_eq!(db.len(), BUILTIN_TAGS.len() + 1);

        // a bad debug flag does not lose the extra tags
        env::set_var("HTMLGEN_TAGS_DEBUG", "verbose");
        assert!(get_env_bool("HTMLGEN_TAGS_DEBUG").is_err());
        let db = read_tag_db()?;
        assert_eq!(db.kind_of("main"), Some(TagKind::Normal));

        env::set_var("HTMLGEN_EXTRA_TAGS", "main");
        assert!(read_tag_db().is_err());

        env::remove_var("HTMLGEN_TAGS_DEBUG");
        env::remove_var("HTMLGEN_EXTRA_TAGS");
        assert!(!get_env_bool("HTMLGEN_TAGS_DEBUG")?);
        assert_eq!(read_tag_db()?.len(), BUILTIN_TAGS.len());
        Ok(())
    }

    #[test]
    fn t_json() -> Result<()> {
        let db = TagDb::builtin();
        let db2 = TagDb::from_json(&db.to_json()?)?;
        assert_eq!(db2.len(), db.len());
        assert!(db.iter().eq(db2.iter()));

        let db3 = TagDb::from_json(
            r#"[{"tag_name": "wbr", "const_name": "WBR", "kind": "lone"}]"#)?;
        assert_eq!(db3.kind_of("wbr"), Some(TagKind::Lone));
        assert!(TagDb::from_json(r#"[{"tag_name": "wbr"}]"#).is_err());
        Ok(())
    }
}
