//! Document output configuration.
//!
//! JSON shape (all keys optional):
//! {
//!   "openapiVersion": "3.0.3",
//!   "pretty": true,
//!   "indent": 2
//! }

use crate::Result;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

pub const DEFAULT_OPENAPI_VERSION: &str = "3.0.3";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentConfig {
    /// Value written to the root `openapi` field of new documents.
    pub openapi_version: String,
    pub pretty: bool,
    /// Spaces per nesting level when `pretty` is set.
    pub indent: usize,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            openapi_version: DEFAULT_OPENAPI_VERSION.to_string(),
            pretty: false,
            indent: 2,
        }
    }
}

impl DocumentConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize `value` compactly, or re-indent it when `pretty` is set.
    ///
    /// Composed nodes embed their merged text verbatim, so pretty output goes
    /// through an order-preserving `Value` instead of a pretty serializer.
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let compact = serde_json::to_string(value)?;
        if !self.pretty {
            return Ok(compact);
        }

        let tree: Value = serde_json::from_str(&compact)?;
        let indent = " ".repeat(self.indent);
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        tree.serialize(&mut ser)?;
        Ok(String::from_utf8(out)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg = DocumentConfig::from_json(r#"{"pretty":true}"#).unwrap();
        assert_eq!(
            cfg,
            DocumentConfig {
                pretty: true,
                ..DocumentConfig::default()
            }
        );
    }

    #[test]
    fn pretty_render_keeps_key_order() {
        let cfg = DocumentConfig {
            pretty: true,
            indent: 1,
            ..DocumentConfig::default()
        };
        let out = cfg.render(&json!({"b": 1, "a": [true]})).unwrap();
        assert_eq!(out, "{\n \"b\": 1,\n \"a\": [\n  true\n ]\n}");
    }

    #[test]
    fn compact_render_is_plain_serde_json() {
        let out = DocumentConfig::default().render(&json!({"a": 1})).unwrap();
        assert_eq!(out, r#"{"a":1}"#);
    }
}
