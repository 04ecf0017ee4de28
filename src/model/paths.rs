//! Paths, path items and the operations under them.

use crate::Extensions;
use crate::compose::composed;
use crate::diagnostics;
use crate::error::Error;
use crate::extensions::{deserialize_non_extension_map, is_extension_key};
use crate::model::operation::Operation;
use crate::model::parameter::Parameter;
use crate::model::server::Server;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Variants are in alphabetical order so a sorted map writes methods that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpMethod {
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Delete,
        HttpMethod::Get,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Patch,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Trace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Delete => "delete",
            HttpMethod::Get => "get",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
            HttpMethod::Patch => "patch",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Trace => "trace",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| Error::UnknownHttpMethod(s.to_string()))
    }
}

/// The operations group of a path item. Keys that are not HTTP methods
/// belong to the sibling groups and are skipped on read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operations(pub BTreeMap<HttpMethod, Operation>);

impl Serialize for Operations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (method, operation) in &self.0 {
            map.serialize_entry(method.as_str(), operation)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Operations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OperationsVisitor;

        impl<'de> Visitor<'de> for OperationsVisitor {
            type Value = Operations;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a path item object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Operations, A::Error> {
                let mut out = BTreeMap::new();
                while let Some(key) = access.next_key::<String>()? {
                    match key.parse::<HttpMethod>() {
                        Ok(method) => {
                            out.insert(method, access.next_value()?);
                        }
                        Err(_) => {
                            access.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(Operations(out))
            }
        }

        deserializer.deserialize_map(OperationsVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathItemObject {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    pub operations: Operations,
    pub object: PathItemObject,
    pub extensions: Extensions,
}

composed!(PathItem { operations, object, extensions });

impl PathItem {
    pub fn add_operation(&mut self, method: HttpMethod, operation: Operation) {
        self.operations.0.insert(method, operation);
    }

    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        self.operations.0.get(&method)
    }
}

/// Path templates mapped to their items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathItems(
    #[serde(deserialize_with = "deserialize_non_extension_map")] pub BTreeMap<String, PathItem>,
);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths {
    pub items: PathItems,
    pub extensions: Extensions,
}

composed!(Paths { items, extensions });

impl Paths {
    /// Put `operation` under `method` at `path`, creating the item if needed.
    /// `x-` paths collide with the extension group and are reported and dropped.
    pub fn add_operation(
        &mut self,
        method: HttpMethod,
        path: impl Into<String>,
        operation: Operation,
    ) {
        let path = path.into();
        if is_extension_key(&path) {
            diagnostics::warn(format!("dropping path {:?}: paths must not start with x-", path));
            return;
        }
        self.items
            .0
            .entry(path)
            .or_default()
            .add_operation(method, operation);
    }

    pub fn get(&self, path: &str) -> Option<&PathItem> {
        self.items.0.get(path)
    }

    pub fn is_empty(&self) -> bool {
        self.items.0.is_empty()
    }
}
