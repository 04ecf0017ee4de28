//! The document root.

use crate::Extensions;
use crate::Result;
use crate::components::{Component, Components};
use crate::compose::composed;
use crate::config::{DEFAULT_OPENAPI_VERSION, DocumentConfig};
use crate::model::{HttpMethod, Info, Operation, Paths, SecurityRequirement, Server, Tag};
use crate::reference::Referable;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenApiObject {
    pub openapi: String,
    pub info: Info,
    pub paths: Paths,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityRequirement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    pub components: Components,
}

/// An OpenAPI 3.0 document. It owns the component table that references
/// inside it resolve against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenApi {
    pub object: OpenApiObject,
    pub extensions: Extensions,
}

composed!(OpenApi { object, extensions });

impl OpenApi {
    pub fn new() -> Self {
        Self::with_version(DEFAULT_OPENAPI_VERSION)
    }

    pub fn with_config(config: &DocumentConfig) -> Self {
        Self::with_version(&config.openapi_version)
    }

    fn with_version(version: &str) -> Self {
        let mut doc = Self::default();
        doc.object.openapi = version.to_string();
        doc
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_with(&self, config: &DocumentConfig) -> Result<String> {
        config.render(self)
    }

    pub fn info_mut(&mut self) -> &mut Info {
        &mut self.object.info
    }

    pub fn components(&self) -> &Components {
        &self.object.components
    }

    pub fn add_operation(
        &mut self,
        method: HttpMethod,
        path: impl Into<String>,
        operation: Operation,
    ) {
        self.object.paths.add_operation(method, path, operation);
    }

    /// `None` is a no-op.
    pub fn add_tag(&mut self, tag: Option<Tag>) {
        self.object.tags.extend(tag);
    }

    pub fn add_server(&mut self, server: Server) {
        self.object.servers.push(server);
    }

    pub fn add_security_requirement(&mut self, requirement: SecurityRequirement) {
        self.object.security.push(requirement);
    }

    pub fn add_component<T: Component>(&mut self, id: impl Into<String>, node: Option<T>) {
        self.object.components.add(id, node);
    }

    pub fn reference<T: Component + Referable>(&self, id: &str) -> Option<T> {
        self.object.components.reference(id)
    }

    pub fn require_security(&self, id: &str, scopes: &[&str]) -> Option<SecurityRequirement> {
        self.object.components.require_security(id, scopes)
    }
}
