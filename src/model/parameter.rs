//! Parameters, headers, examples and request bodies.

use crate::Extensions;
use crate::compose::referable;
use crate::model::is_false;
use crate::model::media_type::MediaType;
use crate::model::schema::Schema;
use crate::reference::Reference;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    #[default]
    Query,
    Path,
    Header,
    Cookie,
}

/// Serialization styles, after RFC 6570 where one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterStyle {
    Matrix,
    Label,
    Form,
    Simple,
    SpaceDelimited,
    PipeDelimited,
    DeepObject,
}

/// Fields shared by parameters and headers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParameterCommon {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub allow_empty_value: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ParameterStyle>,
    #[serde(skip_serializing_if = "is_false")]
    pub explode: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub allow_reserved: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub content: BTreeMap<String, MediaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub examples: BTreeMap<String, Example>,
}

impl ParameterCommon {
    /// Describe the value by schema; drops any `content` entries.
    pub fn set_schema(&mut self, schema: Schema) {
        self.content.clear();
        self.schema = Some(schema);
    }

    /// Describe the value by media type; drops the schema.
    pub fn add_content(&mut self, content_type: impl Into<String>, media_type: MediaType) {
        self.schema = None;
        self.content.insert(content_type.into(), media_type);
    }

    pub fn add_example(&mut self, name: impl Into<String>, example: Option<Example>) {
        if let Some(example) = example {
            self.examples.insert(name.into(), example);
        }
    }
}

/// `name` and `in`, the fields a header does not have.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterIdentity {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameter {
    pub reference: Option<Reference>,
    pub identity: ParameterIdentity,
    pub common: ParameterCommon,
    pub extensions: Extensions,
}

referable!(Parameter, reference { identity, common, extensions });

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        location: ParameterLocation,
        schema: Schema,
        required: bool,
    ) -> Self {
        let mut parameter = Self {
            identity: ParameterIdentity {
                name: name.into(),
                location,
            },
            ..Self::default()
        };
        parameter.common.required = required;
        parameter.common.schema = Some(schema);
        parameter
    }

    pub fn query(name: impl Into<String>, schema: Schema, required: bool) -> Self {
        Self::new(name, ParameterLocation::Query, schema, required)
    }

    /// Path parameters are always required.
    pub fn path(name: impl Into<String>, schema: Schema) -> Self {
        Self::new(name, ParameterLocation::Path, schema, true)
    }

    pub fn header(name: impl Into<String>, schema: Schema, required: bool) -> Self {
        Self::new(name, ParameterLocation::Header, schema, required)
    }

    pub fn cookie(name: impl Into<String>, schema: Schema, required: bool) -> Self {
        Self::new(name, ParameterLocation::Cookie, schema, required)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.common.description = description.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    pub reference: Option<Reference>,
    pub common: ParameterCommon,
    pub extensions: Extensions,
}

referable!(Header, reference { common, extensions });

impl Header {
    pub fn with_schema(schema: Schema) -> Self {
        let mut header = Self::default();
        header.common.schema = Some(schema);
        header
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExampleObject {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub external_value: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Example {
    pub reference: Option<Reference>,
    pub object: ExampleObject,
    pub extensions: Extensions,
}

referable!(Example, reference { object, extensions });

impl Example {
    pub fn with_value(value: Value) -> Self {
        let mut example = Self::default();
        example.object.value = Some(value);
        example
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestBodyObject {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub content: BTreeMap<String, MediaType>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody {
    pub reference: Option<Reference>,
    pub object: RequestBodyObject,
    pub extensions: Extensions,
}

referable!(RequestBody, reference { object, extensions });

impl RequestBody {
    pub fn new(description: impl Into<String>, required: bool) -> Self {
        Self {
            object: RequestBodyObject {
                description: description.into(),
                required,
                content: BTreeMap::new(),
            },
            ..Self::default()
        }
    }

    pub fn add_content(&mut self, content_type: impl Into<String>, media_type: MediaType) {
        self.object.content.insert(content_type.into(), media_type);
    }
}
