use anyhow::{Context, Result};
use kstring::KString;
use serde::{Deserialize, Serialize};

/// Settings for serializing nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Inserted between the children of a node, and between the open
    /// tag, the content and the close tag of a tag pair. Empty by
    /// default; `"\n"` gives a crude one-item-per-line layout.
    pub spacer: KString,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            spacer: KString::from_static(""),
        }
    }
}

impl RenderConfig {
    pub fn with_spacer(spacer: &str) -> Self {
        Self {
            spacer: KString::from_ref(spacer),
        }
    }

    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parsing render config json")
    }
}
