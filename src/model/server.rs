//! Servers and their URL template variables.

use crate::Extensions;
use crate::compose::composed;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerObject {
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, ServerVariable>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Server {
    pub object: ServerObject,
    pub extensions: Extensions,
}

composed!(Server { object, extensions });

impl Server {
    pub fn new(url: impl Into<String>) -> Self {
        let mut server = Self::default();
        server.object.url = url.into();
        server
    }

    /// Register a substitution for `{name}` in the URL. `None` is ignored.
    pub fn add_variable(&mut self, name: impl Into<String>, variable: Option<ServerVariable>) {
        if let Some(variable) = variable {
            self.object.variables.insert(name.into(), variable);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerVariableObject {
    pub default: String,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerVariable {
    pub object: ServerVariableObject,
    pub extensions: Extensions,
}

composed!(ServerVariable { object, extensions });

impl ServerVariable {
    pub fn new(default: impl Into<String>) -> Self {
        let mut variable = Self::default();
        variable.object.default = default.into();
        variable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_server_keeps_url() {
        assert_eq!(serde_json::to_string(&Server::default()).unwrap(), r#"{"url":""}"#);
    }

    #[test]
    fn variables_skip_none() {
        let mut server = Server::new("$HOST");
        server.add_variable("SCHEME", None);
        server.add_variable("HOST", Some(ServerVariable::new("google.com")));

        let text = serde_json::to_string(&server).unwrap();
        assert_eq!(text, r#"{"url":"$HOST","variables":{"HOST":{"default":"google.com"}}}"#);
        assert_eq!(serde_json::from_str::<Server>(&text).unwrap(), server);
    }
}
