//! OpenAPI 3.0 node types.
//!
//! Every node is a set of field groups wired to the composer: an own-fields
//! group (sometimes split in two) followed by [`Extensions`](crate::Extensions).
//! Reference-capable nodes also carry a `reference` pointer.

pub mod info;
pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod paths;
pub mod response;
pub mod schema;
pub mod security;
pub mod server;
pub mod tag;

pub use info::{Contact, ContactObject, Info, InfoObject, License, LicenseObject};
pub use media_type::{Encoding, EncodingObject, MediaType, MediaTypeObject};
pub use operation::{Callback, CallbackPaths, Operation, OperationObject};
pub use parameter::{
    Example, ExampleObject, Header, Parameter, ParameterCommon, ParameterIdentity,
    ParameterLocation, ParameterStyle, RequestBody, RequestBodyObject,
};
pub use paths::{HttpMethod, Operations, PathItem, PathItemObject, PathItems, Paths};
pub use response::{
    Link, LinkObject, Response, ResponseObject, Responses, ResponsesObject, RuntimeExpression,
};
pub use schema::{
    AdditionalProperties, Discriminator, Schema, SchemaObject, SchemaType, SchemaValidation, Xml,
};
pub use security::{
    OAuthFlow, OAuthFlowObject, OAuthFlows, OAuthFlowsObject, SecurityRequirement, SecurityScheme,
    SecuritySchemeObject, SecurityType,
};
pub use server::{Server, ServerObject, ServerVariable, ServerVariableObject};
pub use tag::{ExternalDocs, Tag, TagObject};

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
