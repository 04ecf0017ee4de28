//! The component table: named, reusable nodes owned by one document.
//!
//! Entries are added per group and looked up by id. A lookup hands back a
//! pointer-only node, never the stored one, and only for ids that exist.

use crate::Extensions;
use crate::compose::composed;
use crate::model::{
    Callback, Example, Header, Link, Parameter, RequestBody, Response, Schema, SecurityRequirement,
    SecurityScheme,
};
use crate::reference::{ComponentGroup, Referable, Reference};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentsObject {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub schemas: BTreeMap<String, Schema>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub responses: BTreeMap<String, Response>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, Parameter>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub examples: BTreeMap<String, Example>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub request_bodies: BTreeMap<String, RequestBody>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, Header>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub security_schemes: BTreeMap<String, SecurityScheme>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, Link>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub callbacks: BTreeMap<String, Callback>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components {
    pub object: ComponentsObject,
    pub extensions: Extensions,
}

composed!(Components { object, extensions });

/// A node kind stored in one group of the table.
pub trait Component: Sized {
    const GROUP: ComponentGroup;

    fn table(components: &ComponentsObject) -> &BTreeMap<String, Self>;

    fn table_mut(components: &mut ComponentsObject) -> &mut BTreeMap<String, Self>;
}

macro_rules! component {
    ($node:ty, $group:ident, $field:ident) => {
        impl Component for $node {
            const GROUP: ComponentGroup = ComponentGroup::$group;

            fn table(components: &ComponentsObject) -> &BTreeMap<String, Self> {
                &components.$field
            }

            fn table_mut(components: &mut ComponentsObject) -> &mut BTreeMap<String, Self> {
                &mut components.$field
            }
        }
    };
}

component!(Schema, Schemas, schemas);
component!(Response, Responses, responses);
component!(Parameter, Parameters, parameters);
component!(Example, Examples, examples);
component!(RequestBody, RequestBodies, request_bodies);
component!(Header, Headers, headers);
component!(SecurityScheme, SecuritySchemes, security_schemes);
component!(Link, Links, links);
component!(Callback, Callbacks, callbacks);

impl Components {
    /// Register `node` under `id`, replacing any previous entry. `None` is a no-op.
    pub fn add<T: Component>(&mut self, id: impl Into<String>, node: Option<T>) {
        if let Some(node) = node {
            self.insert(id, node);
        }
    }

    pub fn insert<T: Component>(&mut self, id: impl Into<String>, node: T) {
        T::table_mut(&mut self.object).insert(id.into(), node);
    }

    pub fn get<T: Component>(&self, id: &str) -> Option<&T> {
        T::table(&self.object).get(id)
    }

    pub fn contains(&self, group: ComponentGroup, id: &str) -> bool {
        let o = &self.object;
        match group {
            ComponentGroup::Schemas => o.schemas.contains_key(id),
            ComponentGroup::Responses => o.responses.contains_key(id),
            ComponentGroup::Parameters => o.parameters.contains_key(id),
            ComponentGroup::Examples => o.examples.contains_key(id),
            ComponentGroup::RequestBodies => o.request_bodies.contains_key(id),
            ComponentGroup::Headers => o.headers.contains_key(id),
            ComponentGroup::SecuritySchemes => o.security_schemes.contains_key(id),
            ComponentGroup::Links => o.links.contains_key(id),
            ComponentGroup::Callbacks => o.callbacks.contains_key(id),
        }
    }

    /// A pointer to `group/id`, or `None` if nothing is registered there.
    pub fn component_ref(&self, group: ComponentGroup, id: &str) -> Option<Reference> {
        if !self.contains(group, id) {
            tracing::debug!(%group, id, "no such component");
            return None;
        }
        Some(Reference::component(group, id))
    }

    /// A node of kind `T` whose only content is a pointer to `id`.
    pub fn reference<T: Component + Referable>(&self, id: &str) -> Option<T> {
        self.component_ref(T::GROUP, id).map(T::by_ref)
    }

    /// The requirement that an operation is guarded by scheme `id`. OAuth2
    /// schemes carry `scopes`; every other kind gets an empty list.
    pub fn require_security(&self, id: &str, scopes: &[&str]) -> Option<SecurityRequirement> {
        let Some(scheme) = self.get::<SecurityScheme>(id) else {
            tracing::debug!(id, "no such security scheme");
            return None;
        };
        let scopes = if scheme.is_oauth2() {
            scopes.iter().map(|scope| scope.to_string()).collect()
        } else {
            Vec::new()
        };
        Some(SecurityRequirement::new(id, scopes))
    }
}
