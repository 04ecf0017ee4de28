//! Tags and external documentation links.

use crate::Extensions;
use crate::compose::composed;

use serde::{Deserialize, Serialize};

/// A pointer to documentation outside the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalDocs {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl ExternalDocs {
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagObject {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    pub object: TagObject,
    pub extensions: Extensions,
}

composed!(Tag { object, extensions });

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        let mut tag = Self::default();
        tag.object.name = name.into();
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn external_docs() {
        assert_eq!(serde_json::to_string(&ExternalDocs::default()).unwrap(), "{}");
        assert_eq!(
            serde_json::to_string(&ExternalDocs::new("https://google.com", "google")).unwrap(),
            r#"{"description":"google","url":"https://google.com"}"#
        );
    }

    #[test]
    fn tags() {
        assert_eq!(serde_json::to_string(&Tag::default()).unwrap(), r#"{"name":""}"#);

        let mut tag = Tag::new("tag");
        tag.object.external_docs = Some(ExternalDocs::new("//google.com", "google"));
        let text = serde_json::to_string(&tag).unwrap();
        assert_eq!(
            text,
            r#"{"name":"tag","externalDocs":{"description":"google","url":"//google.com"}}"#
        );
        assert_eq!(serde_json::from_str::<Tag>(&text).unwrap(), tag);
    }
}
