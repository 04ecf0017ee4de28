//! Responses and links.

use crate::Extensions;
use crate::compose::{composed, referable};
use crate::diagnostics;
use crate::extensions::is_extension_key;
use crate::model::media_type::MediaType;
use crate::model::parameter::Header;
use crate::model::server::Server;
use crate::reference::Reference;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Expected responses of an operation, keyed by HTTP status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Responses {
    pub object: ResponsesObject,
    pub extensions: Extensions,
}

composed!(Responses { object, extensions });

impl Responses {
    pub fn set_default(&mut self, response: Response) {
        self.object.default = Some(response);
    }

    pub fn add(&mut self, status: u16, response: Response) {
        self.object.statuses.insert(status, response);
    }

    pub fn get(&self, status: u16) -> Option<&Response> {
        self.object.statuses.get(&status)
    }

    pub fn is_empty(&self) -> bool {
        self.object.default.is_none() && self.object.statuses.is_empty()
    }
}

/// Written as the statuses in numeric order, then `default`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponsesObject {
    pub default: Option<Response>,
    pub statuses: BTreeMap<u16, Response>,
}

impl Serialize for ResponsesObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.statuses.len() + usize::from(self.default.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (status, response) in &self.statuses {
            map.serialize_entry(&status.to_string(), response)?;
        }
        if let Some(default) = &self.default {
            map.serialize_entry("default", default)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ResponsesObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResponsesVisitor;

        impl<'de> Visitor<'de> for ResponsesVisitor {
            type Value = ResponsesObject;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of HTTP status codes to responses")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<ResponsesObject, A::Error> {
                let mut out = ResponsesObject::default();
                while let Some(key) = access.next_key::<String>()? {
                    if key == "default" {
                        out.default = Some(access.next_value()?);
                    } else if let Ok(status) = key.parse::<u16>() {
                        out.statuses.insert(status, access.next_value()?);
                    } else {
                        if !is_extension_key(&key) {
                            diagnostics::warn(format!(
                                "ignoring response key {:?}: not an HTTP status",
                                key
                            ));
                        }
                        access.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(ResponsesVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseObject {
    pub description: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, Header>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub content: BTreeMap<String, MediaType>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, Link>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub reference: Option<Reference>,
    pub object: ResponseObject,
    pub extensions: Extensions,
}

referable!(Response, reference { object, extensions });

impl Response {
    pub fn new(description: impl Into<String>) -> Self {
        let mut response = Self::default();
        response.object.description = description.into();
        response
    }

    pub fn add_header(&mut self, name: impl Into<String>, header: Header) {
        self.object.headers.insert(name.into(), header);
    }

    pub fn add_content(&mut self, content_type: impl Into<String>, media_type: MediaType) {
        self.object.content.insert(content_type.into(), media_type);
    }

    pub fn add_link(&mut self, name: impl Into<String>, link: Link) {
        self.object.links.insert(name.into(), link);
    }
}

/// An expression such as `$request.path.id`, evaluated at call time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuntimeExpression(pub String);

impl From<&str> for RuntimeExpression {
    fn from(expression: &str) -> Self {
        Self(expression.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkObject {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub operation_ref: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, RuntimeExpression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RuntimeExpression>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Server>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
    pub reference: Option<Reference>,
    pub object: LinkObject,
    pub extensions: Extensions,
}

referable!(Link, reference { object, extensions });

impl Link {
    pub fn to_operation(operation_id: impl Into<String>) -> Self {
        let mut link = Self::default();
        link.object.operation_id = operation_id.into();
        link
    }

    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        expression: impl Into<RuntimeExpression>,
    ) -> Self {
        self.object.parameters.insert(name.into(), expression.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::Schema;
    use crate::reference::Referable;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn response_description_is_always_written() {
        assert_eq!(
            serde_json::to_string(&Response::default()).unwrap(),
            r#"{"description":""}"#
        );
    }

    #[test]
    fn statuses_come_before_default() {
        let mut responses = Responses::default();
        responses.set_default(Response::by_ref(Reference::parse("#/components/responses/Error")));
        responses.add(404, Response::new("missing"));
        responses.add(200, Response::new("ok"));

        let text = serde_json::to_string(&responses).unwrap();
        assert_eq!(
            text,
            r##"{"200":{"description":"ok"},"404":{"description":"missing"},"default":{"$ref":"#/components/responses/Error"}}"##
        );
        assert_eq!(serde_json::from_str::<Responses>(&text).unwrap(), responses);
    }

    #[test]
    fn extension_and_unknown_keys_are_kept_apart() {
        let responses: Responses = serde_json::from_str(
            r#"{"200":{"description":"ok"},"x-cache":"none","2XX":{"description":"range"}}"#,
        )
        .unwrap();
        assert_eq!(responses.object.statuses.len(), 1);
        assert_eq!(responses.extensions.get("x-cache"), Some(&json!("none")));
        assert_eq!(
            serde_json::to_string(&responses).unwrap(),
            r#"{"200":{"description":"ok"},"x-cache":"none"}"#
        );
    }

    #[test]
    fn response_with_headers_content_and_links() {
        let mut response = Response::new("A paged array of pets");
        response.add_header("x-next", Header::with_schema(Schema::string()));
        response.add_content(
            "application/json",
            crate::model::MediaType::with_schema(Schema::by_pointer("#/components/schemas/Pets")),
        );
        response.add_link(
            "GetPet",
            Link::to_operation("showPetById").with_parameter("petId", "$response.body#/id"),
        );

        let text = serde_json::to_string(&response).unwrap();
        assert_eq!(
            text,
            r##"{"description":"A paged array of pets","headers":{"x-next":{"schema":{"type":"string"}}},"content":{"application/json":{"schema":{"$ref":"#/components/schemas/Pets"}}},"links":{"GetPet":{"operationId":"showPetById","parameters":{"petId":"$response.body#/id"}}}}"##
        );
        assert_eq!(serde_json::from_str::<Response>(&text).unwrap(), response);
    }
}
