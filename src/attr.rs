//! Tag attributes: keyword name mapping, storage and serialization.

//! Attribute names are passed as Rust-friendly keywords and mapped to
//! HTML names once, when stored: a leading `r#` and one trailing
//! underscore are dropped (`class_`, `for_`, `r#type`), remaining
//! underscores become hyphens (`data_foo` -> `data-foo`).

//! Values are written verbatim between double quotes. Nothing is
//! escaped; a value containing `"` produces broken markup.

use std::fmt;

use kstring::KString;
use serde_json::Value;

use crate::{error::{HtmlGenErrorKind, Result},
            myfrom::{MyFrom, ks}};

/// Map a keyword to the HTML attribute name it stands for.
pub fn attribute_name(keyword: &str) -> KString {
    let s = keyword.strip_prefix("r#").unwrap_or(keyword);
    let s = s.strip_suffix('_').unwrap_or(s);
    if s.contains('_') {
        KString::from_string(s.replace('_', "-"))
    } else {
        KString::from_ref(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttValue {
    Text(KString),
    /// `true` writes the bare attribute name (`<option selected>`),
    /// `false` leaves the attribute out.
    Flag(bool),
}

impl AttValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttValue::Text(s) => Some(s.as_str()),
            AttValue::Flag(_) => None,
        }
    }

    /// Numbers become their decimal text, `null` means absent.
    pub fn from_json(name: &str, value: &Value) -> Result<AttValue> {
        Ok(match value {
            Value::String(s) => AttValue::Text(ks(s)),
            Value::Number(n) => AttValue::Text(KString::from_string(n.to_string())),
            Value::Bool(b) => AttValue::Flag(*b),
            Value::Null => AttValue::Flag(false),
            Value::Array(_) => Err(HtmlGenErrorKind::InvalidAttributeValue {
                name: ks(name),
                kind: "array"
            })?,
            Value::Object(_) => Err(HtmlGenErrorKind::InvalidAttributeValue {
                name: ks(name),
                kind: "object"
            })?,
        })
    }
}

impl From<bool> for AttValue {
    fn from(b: bool) -> Self {
        AttValue::Flag(b)
    }
}

impl<T: Into<AttValue>> From<Option<T>> for AttValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(AttValue::Flag(false), Into::into)
    }
}

macro_rules! attvalue_from_text {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AttValue {
                fn from(v: $t) -> Self {
                    AttValue::Text(KString::myfrom(v))
                }
            }
        )*
    }
}

attvalue_from_text!(&str, &String, String, KString, &KString, char,
                    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);


/// Attribute names and values in insertion order. Setting an existing
/// name replaces the value in place.
#[derive(Clone, Default, PartialEq)]
pub struct Attributes(Vec<(KString, AttValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `name` verbatim, without keyword mapping.
    pub fn set<N>(&mut self, name: N, value: impl Into<AttValue>) -> Option<AttValue>
    where KString: MyFrom<N>
    {
        let name = KString::myfrom(name);
        let value = value.into();
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(std::mem::replace(&mut slot.1, value))
        } else {
            self.0.push((name, value));
            None
        }
    }

    /// Store under the HTML name of `keyword` (see `attribute_name`).
    pub fn set_keyword(&mut self, keyword: &str, value: impl Into<AttValue>)
                       -> Option<AttValue>
    {
        self.set(attribute_name(keyword), value)
    }

    pub fn get(&self, name: &str) -> Option<&AttValue> {
        self.0.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttValue> {
        let i = self.0.iter().position(|(k, _)| k == name)?;
        Some(self.0.remove(i).1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// A copy of `self` updated with `newer`; values from `newer` win.
    pub fn merged(&self, newer: Attributes) -> Attributes {
        if self.is_empty() {
            return newer
        }
        let mut atts = self.clone();
        for (k, v) in newer.0 {
            atts.set(k, v);
        }
        atts
    }

    /// Each present attribute preceded by a space, ready to follow the
    /// tag name.
    pub fn print_html(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        for (k, v) in &self.0 {
            match v {
                AttValue::Text(s) => write!(out, " {k}=\"{s}\"")?,
                AttValue::Flag(true) => write!(out, " {k}")?,
                AttValue::Flag(false) => (),
            }
        }
        Ok(())
    }

    /// Space separated `key="value"` pairs.
    pub fn to_html_string(&self) -> String {
        let mut s = String::new();
        let _ = self.print_html(&mut s);
        if s.starts_with(' ') {
            s.remove(0);
        }
        s
    }
}

impl fmt::Debug for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter().map(|(k, v)| (k, v))).finish()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a (KString, AttValue);
    type IntoIter = std::slice::Iter<'a, (KString, AttValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}


/// Anything that can be passed as the attributes of a tag. Pairs are
/// taken as keywords and mapped via `attribute_name`, an `Attributes`
/// value is taken as is.
pub trait IntoAttributes {
    fn into_attributes(self) -> Attributes;
}

impl IntoAttributes for Attributes {
    fn into_attributes(self) -> Attributes {
        self
    }
}

impl<K: AsRef<str>, V: Into<AttValue>, const N: usize> IntoAttributes for [(K, V); N] {
    fn into_attributes(self) -> Attributes {
        let mut atts = Attributes::new();
        for (k, v) in self {
            atts.set_keyword(k.as_ref(), v);
        }
        atts
    }
}

impl<K: AsRef<str>, V: Into<AttValue>> IntoAttributes for Vec<(K, V)> {
    fn into_attributes(self) -> Attributes {
        let mut atts = Attributes::new();
        for (k, v) in self {
            atts.set_keyword(k.as_ref(), v);
        }
        atts
    }
}
