//! Media types and the encodings of their body properties.

use crate::Extensions;
use crate::compose::composed;
use crate::model::is_false;
use crate::model::parameter::{Example, Header, ParameterStyle};
use crate::model::schema::Schema;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaTypeObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub examples: BTreeMap<String, Example>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub encoding: BTreeMap<String, Encoding>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaType {
    pub object: MediaTypeObject,
    pub extensions: Extensions,
}

composed!(MediaType { object, extensions });

impl MediaType {
    pub fn with_schema(schema: Schema) -> Self {
        let mut media_type = Self::default();
        media_type.object.schema = Some(schema);
        media_type
    }

    pub fn add_encoding(&mut self, property: impl Into<String>, encoding: Encoding) {
        self.object.encoding.insert(property.into(), encoding);
    }
}

/// How one property of a multipart or form body is encoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EncodingObject {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content_type: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ParameterStyle>,
    #[serde(skip_serializing_if = "is_false")]
    pub explode: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub allow_reserved: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Encoding {
    pub object: EncodingObject,
    pub extensions: Extensions,
}

composed!(Encoding { object, extensions });

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty_media_type_is_empty_object() {
        assert_eq!(serde_json::to_string(&MediaType::default()).unwrap(), "{}");
    }

    #[test]
    fn encoding_nests_under_media_type() {
        let mut media_type = MediaType::with_schema(Schema::object_of(
            [("icon", Schema::binary())],
            &[],
        ));
        let mut png = Encoding::default();
        png.object.content_type = "image/png".to_string();
        png.extensions.insert("x-max-bytes", json!(1024));
        media_type.add_encoding("icon", png);

        let text = serde_json::to_string(&media_type).unwrap();
        assert_eq!(
            text,
            r#"{"schema":{"type":"object","properties":{"icon":{"type":"string","format":"binary"}}},"encoding":{"icon":{"contentType":"image/png","x-max-bytes":1024}}}"#
        );
        assert_eq!(serde_json::from_str::<MediaType>(&text).unwrap(), media_type);
    }
}
