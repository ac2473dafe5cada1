//! How a tag closes.

use std::{fmt::Display, str::FromStr};

use kstring::KString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    /// Open and close tag if there is content (`<b>x</b>`), otherwise
    /// an open-and-close tag with a slash (`<input type="submit" />`).
    Normal,
    /// Without content, an open-and-close tag without slash (`<br>`).
    Lone,
    /// Open and close tag regardless of content
    /// (`<script src="x.js"></script>`).
    ForcedPair,
}

impl Default for TagKind {
    fn default() -> Self {
        TagKind::Normal
    }
}

impl TagKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TagKind::Normal => "normal",
            TagKind::Lone => "lone",
            TagKind::ForcedPair => "forced_pair",
        }
    }

    /// Whether the tag is conventionally written without content.
    pub fn is_void(self) -> bool {
        self == TagKind::Lone
    }
}

impl Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid tag kind \"{0}\", expecting one of \"normal\", \"lone\", \"forced_pair\"")]
pub struct InvalidTagKind(pub KString);

impl FromStr for TagKind {
    type Err = InvalidTagKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(TagKind::Normal),
            "lone" => Ok(TagKind::Lone),
            "forced_pair" | "forced-pair" => Ok(TagKind::ForcedPair),
            _ => Err(InvalidTagKind(KString::from_ref(s)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_parse() {
        assert_eq!("lone".parse::<TagKind>().unwrap(), TagKind::Lone);
        assert_eq!(" forced-pair".parse::<TagKind>().unwrap(), TagKind::ForcedPair);
        assert_eq!(TagKind::ForcedPair.as_str().parse::<TagKind>().unwrap(),
                   TagKind::ForcedPair);
        let e = "pair".parse::<TagKind>().unwrap_err();
        assert!(e.to_string().starts_with("invalid tag kind \"pair\""));
    }

    #[test]
    fn t_serde_names() {
        assert_eq!(serde_json::to_string(&TagKind::ForcedPair).unwrap(),
                   "\"forced_pair\"");
        assert_eq!(serde_json::from_str::<TagKind>("\"lone\"").unwrap(),
                   TagKind::Lone);
    }
}
