//! Schema objects.
//!
//! A schema is three groups on the wire: the structural fields
//! ([`SchemaObject`]), the validation keywords ([`SchemaValidation`]) and the
//! extensions. Validation lives in its own group so it can be copied between
//! schemas by type (see [`Schema::with_validation`]).

use crate::Extensions;
use crate::compose::referable;
use crate::model::is_false;
use crate::model::tag::ExternalDocs;
use crate::reference::Reference;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::{Number, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Integer,
    Number,
    String,
    Boolean,
    Array,
    Object,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub reference: Option<Reference>,
    pub object: SchemaObject,
    pub validation: SchemaValidation,
    pub extensions: Extensions,
}

referable!(Schema, reference { object, validation, extensions });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaObject {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub format: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<Schema>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<Schema>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<Schema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<Schema>>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(skip_serializing_if = "is_false")]
    pub nullable: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Discriminator>,

    #[serde(skip_serializing_if = "is_false")]
    pub read_only: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub write_only: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml: Option<Xml>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,
}

/// Validation keywords, grouped by the schema type they apply to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaValidation {
    // numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    #[serde(skip_serializing_if = "is_false")]
    pub exclusive_maximum: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    #[serde(skip_serializing_if = "is_false")]
    pub exclusive_minimum: bool,

    // strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pattern: String,

    // arrays
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(skip_serializing_if = "is_false")]
    pub unique_items: bool,

    // objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    // any
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discriminator {
    pub property_name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mapping: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Xml {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    #[serde(skip_serializing_if = "is_false")]
    pub attribute: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub wrapped: bool,
}

/// `additionalProperties`: either a plain switch or a schema for the values.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<Schema>),
}

impl Serialize for AdditionalProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Allowed(allowed) => serializer.serialize_bool(*allowed),
            Self::Schema(schema) => schema.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AdditionalProperties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Untagged enums buffer their input, which loses the raw text the
        // schema decoder needs; peek at the first byte instead.
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let text = raw.get().trim_start();
        if text.starts_with('{') {
            let schema: Schema = serde_json::from_str(text).map_err(serde::de::Error::custom)?;
            Ok(Self::Schema(Box::new(schema)))
        } else {
            let allowed: bool = serde_json::from_str(text).map_err(serde::de::Error::custom)?;
            Ok(Self::Allowed(allowed))
        }
    }
}

impl Schema {
    pub fn new(schema_type: SchemaType, format: &str) -> Self {
        Self {
            object: SchemaObject {
                schema_type: Some(schema_type),
                format: format.to_string(),
                ..SchemaObject::default()
            },
            ..Self::default()
        }
    }

    pub fn by_pointer(pointer: &str) -> Self {
        Self {
            reference: Some(Reference::parse(pointer)),
            ..Self::default()
        }
    }

    pub fn integer() -> Self {
        Self::new(SchemaType::Integer, "int32")
    }

    pub fn long() -> Self {
        Self::new(SchemaType::Integer, "int64")
    }

    pub fn float() -> Self {
        Self::new(SchemaType::Number, "float")
    }

    pub fn double() -> Self {
        Self::new(SchemaType::Number, "double")
    }

    pub fn string() -> Self {
        Self::new(SchemaType::String, "")
    }

    pub fn byte() -> Self {
        Self::new(SchemaType::String, "byte")
    }

    pub fn binary() -> Self {
        Self::new(SchemaType::String, "binary")
    }

    pub fn date() -> Self {
        Self::new(SchemaType::String, "date")
    }

    pub fn date_time() -> Self {
        Self::new(SchemaType::String, "date-time")
    }

    pub fn password() -> Self {
        Self::new(SchemaType::String, "password")
    }

    pub fn boolean() -> Self {
        Self::new(SchemaType::Boolean, "")
    }

    pub fn items_of(items: Schema) -> Self {
        Self {
            object: SchemaObject {
                schema_type: Some(SchemaType::Array),
                items: Some(Box::new(items)),
                ..SchemaObject::default()
            },
            ..Self::default()
        }
    }

    /// An object schema with the given properties; `required` names are kept
    /// in the order given.
    pub fn object_of<I, K>(properties: I, required: &[&str]) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        Self {
            object: SchemaObject {
                schema_type: Some(SchemaType::Object),
                properties: properties.into_iter().map(|(k, v)| (k.into(), v)).collect(),
                ..SchemaObject::default()
            },
            validation: SchemaValidation {
                required: required.iter().map(|name| name.to_string()).collect(),
                ..SchemaValidation::default()
            },
            ..Self::default()
        }
    }

    pub fn map_of(values: Schema) -> Self {
        Self {
            object: SchemaObject {
                schema_type: Some(SchemaType::Object),
                additional_properties: Some(AdditionalProperties::Schema(Box::new(values))),
                ..SchemaObject::default()
            },
            ..Self::default()
        }
    }

    pub fn all_of(schemas: Vec<Schema>) -> Self {
        Self {
            object: SchemaObject {
                all_of: schemas,
                ..SchemaObject::default()
            },
            ..Self::default()
        }
    }

    pub fn any_of(schemas: Vec<Schema>) -> Self {
        Self {
            object: SchemaObject {
                any_of: schemas,
                ..SchemaObject::default()
            },
            ..Self::default()
        }
    }

    pub fn one_of(schemas: Vec<Schema>) -> Self {
        Self {
            object: SchemaObject {
                one_of: schemas,
                ..SchemaObject::default()
            },
            ..Self::default()
        }
    }

    pub fn not(schema: Schema) -> Self {
        Self {
            object: SchemaObject {
                not: Some(Box::new(schema)),
                ..SchemaObject::default()
            },
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.object.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.object.description = description.into();
        self
    }

    pub fn with_discriminator(mut self, discriminator: Discriminator) -> Self {
        self.object.discriminator = Some(discriminator);
        self
    }

    /// Copy the keywords of `validation` that apply to this schema's type.
    /// `enum` always applies; `required` only when the object has properties.
    pub fn with_validation(mut self, validation: &SchemaValidation) -> Self {
        let v = &mut self.validation;
        v.enum_values = validation.enum_values.clone();

        match self.object.schema_type {
            Some(SchemaType::Integer | SchemaType::Number) => {
                v.multiple_of = validation.multiple_of.clone();
                v.maximum = validation.maximum.clone();
                v.exclusive_maximum = validation.exclusive_maximum;
                v.minimum = validation.minimum.clone();
                v.exclusive_minimum = validation.exclusive_minimum;
            }
            Some(SchemaType::String) => {
                v.max_length = validation.max_length;
                v.min_length = validation.min_length;
                v.pattern = validation.pattern.clone();
            }
            Some(SchemaType::Array) => {
                v.max_items = validation.max_items;
                v.min_items = validation.min_items;
                v.unique_items = validation.unique_items;
            }
            Some(SchemaType::Object) => {
                v.max_properties = validation.max_properties;
                v.min_properties = validation.min_properties;
                if !self.object.properties.is_empty() {
                    v.required = validation.required.clone();
                }
            }
            Some(SchemaType::Boolean) | None => {}
        }
        self
    }

    /// Add a property to an object schema. Ignored for other types.
    pub fn set_property(&mut self, name: impl Into<String>, schema: Schema, required: bool) {
        if self.object.schema_type != Some(SchemaType::Object) {
            return;
        }
        let name = name.into();
        if required {
            self.validation.required.push(name.clone());
        }
        self.object.properties.insert(name, schema);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Composed;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn check(schema: &Schema, wire: &str) {
        assert_eq!(serde_json::to_string(schema).unwrap(), wire);
        let back: Schema = serde_json::from_str(wire).unwrap();
        assert_eq!(&back, schema);
    }

    fn sample_validation() -> SchemaValidation {
        SchemaValidation {
            multiple_of: Some(2.into()),
            maximum: Some(10.into()),
            exclusive_maximum: true,
            minimum: Some(1.into()),
            exclusive_minimum: true,
            max_length: Some(10),
            min_length: Some(0),
            pattern: "/+d/".to_string(),
            max_items: Some(10),
            min_items: Some(1),
            unique_items: true,
            max_properties: Some(10),
            min_properties: Some(1),
            required: vec!["key".to_string()],
            enum_values: vec![json!("1"), json!("2"), json!("3")],
        }
    }

    #[test]
    fn primitive_constructors() {
        check(&Schema::default(), "{}");
        check(&Schema::integer(), r#"{"type":"integer","format":"int32"}"#);
        check(&Schema::long(), r#"{"type":"integer","format":"int64"}"#);
        check(&Schema::double(), r#"{"type":"number","format":"double"}"#);
        check(&Schema::date_time(), r#"{"type":"string","format":"date-time"}"#);
        check(&Schema::boolean(), r#"{"type":"boolean"}"#);
        check(
            &Schema::string().with_title("title").with_description("desc"),
            r#"{"title":"title","type":"string","description":"desc"}"#,
        );
    }

    #[test]
    fn composite_constructors() {
        check(
            &Schema::items_of(Schema::string()),
            r#"{"type":"array","items":{"type":"string"}}"#,
        );
        check(
            &Schema::object_of([("key1", Schema::string()), ("key2", Schema::string())], &["key1"]),
            r#"{"type":"object","properties":{"key1":{"type":"string"},"key2":{"type":"string"}},"required":["key1"]}"#,
        );
        check(
            &Schema::map_of(Schema::string()),
            r#"{"type":"object","additionalProperties":{"type":"string"}}"#,
        );
        check(
            &Schema::one_of(vec![Schema::string(), Schema::boolean()]),
            r#"{"oneOf":[{"type":"string"},{"type":"boolean"}]}"#,
        );
        check(&Schema::not(Schema::string()), r#"{"not":{"type":"string"}}"#);
    }

    #[test]
    fn additional_properties_switch() {
        let mut schema = Schema::new(SchemaType::Object, "");
        schema.object.additional_properties = Some(AdditionalProperties::Allowed(false));
        check(&schema, r#"{"type":"object","additionalProperties":false}"#);
    }

    #[test]
    fn validation_is_filtered_by_type() {
        let v = sample_validation();
        check(
            &Schema::string().with_validation(&v),
            r#"{"type":"string","maxLength":10,"minLength":0,"pattern":"/+d/","enum":["1","2","3"]}"#,
        );
        check(
            &Schema::integer().with_validation(&v),
            r#"{"type":"integer","format":"int32","multipleOf":2,"maximum":10,"exclusiveMaximum":true,"minimum":1,"exclusiveMinimum":true,"enum":["1","2","3"]}"#,
        );
        check(
            &Schema::items_of(Schema::string()).with_validation(&v),
            r#"{"type":"array","items":{"type":"string"},"maxItems":10,"minItems":1,"uniqueItems":true,"enum":["1","2","3"]}"#,
        );
        check(
            &Schema::object_of([("key1", Schema::string())], &["key1"]).with_validation(&v),
            r#"{"type":"object","properties":{"key1":{"type":"string"}},"maxProperties":10,"minProperties":1,"required":["key"],"enum":["1","2","3"]}"#,
        );
    }

    #[test]
    fn set_property_only_applies_to_objects() {
        let mut obj = Schema::new(SchemaType::Object, "");
        obj.set_property("id", Schema::long(), true);
        obj.set_property("tag", Schema::string(), false);
        assert_eq!(obj.validation.required, vec!["id".to_string()]);
        assert_eq!(obj.object.properties.len(), 2);

        let mut s = Schema::string();
        s.set_property("id", Schema::long(), true);
        assert!(s.object.properties.is_empty());
    }

    #[test]
    fn ref_schema_hides_inline_fields() {
        let mut schema = Schema::string().with_description("ignored");
        schema.reference = Some(Reference::parse("#/components/schemas/Pet"));
        assert_eq!(schema.encode().unwrap(), r##"{"$ref":"#/components/schemas/Pet"}"##);
    }

    #[test]
    fn nested_refs_decode_as_pointers() {
        let wire = r##"{"type":"array","items":{"$ref":"#/components/schemas/Pet"},"x-order":2}"##;
        let schema: Schema = serde_json::from_str(wire).unwrap();
        let items = schema.object.items.as_deref().unwrap();
        assert_eq!(items, &Schema::by_pointer("#/components/schemas/Pet"));
        assert_eq!(schema.extensions.get("x-order"), Some(&json!(2)));
        assert_eq!(serde_json::to_string(&schema).unwrap(), wire);
    }
}
