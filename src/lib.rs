//! Build, encode and decode OpenAPI 3.0 documents.
//!
//! Nodes are flat JSON objects assembled from independently serialized field
//! groups ([`compose`]). Nodes that may stand in for a shared definition go
//! through the `$ref`-first protocol ([`reference`]), and the shared
//! definitions themselves live in the document's [`Components`] table.

pub mod components;
pub mod compose;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extensions;
pub mod model;
pub mod openapi;
pub mod reference;
pub mod sample;

pub use components::{Component, Components, ComponentsObject};
pub use compose::{Composed, FieldGroup, merge, split};
pub use config::DocumentConfig;
pub use error::{Error, Result};
pub use extensions::Extensions;
pub use openapi::{OpenApi, OpenApiObject};
pub use reference::{
    ComponentGroup, Referable, Reference, Shape, decode_ref_first, encode_ref_first,
};
