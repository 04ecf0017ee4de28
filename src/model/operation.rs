//! Operations and the callbacks they declare.

use crate::Extensions;
use crate::diagnostics;
use crate::compose::{composed, referable};
use crate::extensions::{deserialize_non_extension_map, is_extension_key};
use crate::model::is_false;
use crate::model::parameter::{Parameter, RequestBody};
use crate::model::paths::{HttpMethod, PathItem};
use crate::model::response::{Response, Responses};
use crate::model::security::SecurityRequirement;
use crate::model::server::Server;
use crate::model::tag::ExternalDocs;
use crate::reference::Reference;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationObject {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,

    pub operation_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    pub responses: Responses,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub callbacks: BTreeMap<String, Callback>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityRequirement>,
    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
}

/// A single API call on a path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operation {
    pub object: OperationObject,
    pub extensions: Extensions,
}

composed!(Operation { object, extensions });

impl Operation {
    pub fn new(operation_id: impl Into<String>) -> Self {
        let mut operation = Self::default();
        operation.object.operation_id = operation_id.into();
        operation
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.object.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.object.summary = summary.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.object.description = description.into();
        self
    }

    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.object.parameters.push(parameter);
    }

    pub fn set_request_body(&mut self, body: RequestBody) {
        self.object.request_body = Some(body);
    }

    pub fn add_response(&mut self, status: u16, response: Response) {
        self.object.responses.add(status, response);
    }

    pub fn set_default_response(&mut self, response: Response) {
        self.object.responses.set_default(response);
    }

    pub fn add_callback(&mut self, name: impl Into<String>, callback: Callback) {
        self.object.callbacks.insert(name.into(), callback);
    }

    pub fn add_security_requirement(&mut self, requirement: SecurityRequirement) {
        self.object.security.push(requirement);
    }
}

/// Runtime expressions mapped to the path items they call back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallbackPaths(
    #[serde(deserialize_with = "deserialize_non_extension_map")] pub BTreeMap<String, PathItem>,
);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Callback {
    pub reference: Option<Reference>,
    pub paths: CallbackPaths,
    pub extensions: Extensions,
}

referable!(Callback, reference { paths, extensions });

impl Callback {
    /// A callback with a single operation at `expression`. An `x-` expression
    /// would read back as an extension, so it is reported and the callback
    /// stays empty.
    pub fn new(method: HttpMethod, expression: impl Into<String>, operation: Operation) -> Self {
        let expression = expression.into();
        let mut callback = Self::default();
        if is_extension_key(&expression) {
            diagnostics::warn(format!(
                "dropping callback {:?}: expression must not start with x-",
                expression
            ));
            return callback;
        }

        let mut item = PathItem::default();
        item.add_operation(method, operation);
        callback.paths.0.insert(expression, item);
        callback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Header, MediaType, Schema};
    use crate::reference::Referable;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_operation_keeps_required_fields() {
        let text = serde_json::to_string(&Operation::default()).unwrap();
        assert_eq!(text, r#"{"operationId":"","responses":{}}"#);
        assert_eq!(serde_json::from_str::<Operation>(&text).unwrap(), Operation::default());
    }

    #[test]
    fn full_operation_with_callback() {
        let mut op = Operation::new("listPets")
            .with_summary("List all pets")
            .with_description("desc")
            .with_tags(["pets"]);

        op.add_parameter(
            Parameter::query("limit", Schema::integer(), true)
                .with_description("How many items to return at one time (max 100)"),
        );
        op.add_parameter(Parameter::query("size", Schema::integer(), false));

        let mut ok = Response::new("An paged array of pets");
        ok.add_header(
            "x-next",
            Header::with_schema(
                Schema::string().with_description("A link to the next page of responses"),
            ),
        );
        ok.add_content("application/json", MediaType::with_schema(Schema::string()));
        op.add_response(200, ok);

        let mut error = Response::new("unexpected error");
        error.add_content("text/html", MediaType::with_schema(Schema::string()));
        op.set_default_response(error);

        let mut on_event = Operation::new("callback");
        let mut body = RequestBody::new("", false);
        body.add_content("application/json", MediaType::with_schema(Schema::string()));
        on_event.set_request_body(body);
        on_event.add_response(200, Response::new("OK"));

        op.add_callback(
            "myEvent",
            Callback::new(
                HttpMethod::Post,
                "{$request.query.callbackUrl}?event={$request.query.event}",
                on_event,
            ),
        );

        let text = serde_json::to_string(&op).unwrap();
        assert_eq!(
            text,
            r#"{"tags":["pets"],"summary":"List all pets","description":"desc","operationId":"listPets","parameters":[{"name":"limit","in":"query","description":"How many items to return at one time (max 100)","required":true,"schema":{"type":"integer","format":"int32"}},{"name":"size","in":"query","schema":{"type":"integer","format":"int32"}}],"responses":{"200":{"description":"An paged array of pets","headers":{"x-next":{"schema":{"type":"string","description":"A link to the next page of responses"}}},"content":{"application/json":{"schema":{"type":"string"}}}},"default":{"description":"unexpected error","content":{"text/html":{"schema":{"type":"string"}}}}},"callbacks":{"myEvent":{"{$request.query.callbackUrl}?event={$request.query.event}":{"post":{"operationId":"callback","requestBody":{"content":{"application/json":{"schema":{"type":"string"}}}},"responses":{"200":{"description":"OK"}}}}}}}"#
        );
        assert_eq!(serde_json::from_str::<Operation>(&text).unwrap(), op);
    }

    #[test]
    fn callback_by_reference() {
        let callback = Callback::by_ref(Reference::parse("#/components/callbacks/onData"));
        let text = serde_json::to_string(&callback).unwrap();
        assert_eq!(text, r##"{"$ref":"#/components/callbacks/onData"}"##);
        assert_eq!(serde_json::from_str::<Callback>(&text).unwrap(), callback);
    }

    #[test]
    fn extension_like_expression_is_dropped() {
        let callback = Callback::new(HttpMethod::Post, "x-hook", Operation::new("hook"));
        assert!(callback.paths.0.is_empty());
        assert_eq!(serde_json::to_string(&callback).unwrap(), "{}");
    }
}
