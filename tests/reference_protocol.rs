use openapi_compose::model::{
    OAuthFlow, OAuthFlowsObject, Parameter, Response, Schema, SecurityScheme,
};
use openapi_compose::{
    ComponentGroup, Components, Composed, Error, Referable, Reference, merge,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn reference_exists_only_after_add() {
    let mut components = Components::default();
    assert!(components.reference::<Schema>("Pet").is_none());

    components.add("Pet", Some(Schema::object_of([("id", Schema::long())], &["id"])));
    let pet = components.reference::<Schema>("Pet").unwrap();
    assert_eq!(pet.pointer().unwrap().to_string(), "#/components/schemas/Pet");
    assert_eq!(pet.encode().unwrap(), r##"{"$ref":"#/components/schemas/Pet"}"##);
    assert!(components.reference::<Schema>("Dog").is_none());
}

#[test]
fn oauth2_without_scopes_gets_an_empty_list() {
    let mut components = Components::default();
    components.add(
        "id",
        Some(SecurityScheme::oauth2(OAuthFlowsObject {
            password: Some(OAuthFlow::new("", "https://t", "", Vec::<(String, String)>::new())),
            ..OAuthFlowsObject::default()
        })),
    );

    let requirement = components.require_security("id", &[]).unwrap();
    assert_eq!(serde_json::to_string(&requirement).unwrap(), r#"{"id":[]}"#);
}

#[test]
fn pointer_wins_over_inline_content() {
    let mut schema = Schema::string().with_description("inline");
    schema.extensions.insert("x-internal", json!(true));
    *schema.pointer_mut() = Some(Reference::component(ComponentGroup::Schemas, "Name"));

    assert_eq!(schema.encode().unwrap(), r##"{"$ref":"#/components/schemas/Name"}"##);
}

#[test]
fn external_pointers_are_kept_verbatim() {
    let wire = r##"{"$ref":"definitions.yaml#/Pet"}"##;
    let schema: Schema = serde_json::from_str(wire).unwrap();
    assert_eq!(
        schema.pointer(),
        Some(&Reference::External("definitions.yaml#/Pet".to_string()))
    );
    assert_eq!(serde_json::to_string(&schema).unwrap(), wire);
}

#[test]
fn inline_nodes_round_trip_byte_for_byte() {
    let mut param =
        Parameter::query("limit", Schema::integer(), true).with_description("page size");
    param.extensions.insert("x-max", json!(100));
    let first = param.encode().unwrap();

    let mut back = Parameter::default();
    back.decode(&first).unwrap();
    assert_eq!(back, param);
    assert_eq!(back.encode().unwrap(), first);
}

#[test]
fn decoding_a_pointer_leaves_groups_untouched() {
    let mut response = Response::default();
    response
        .decode(r##"{"$ref":"#/components/responses/NotFound","description":"ignored"}"##)
        .unwrap();
    assert!(response.is_ref());
    assert_eq!(response.object.description, "");
}

#[test]
fn merge_properties() {
    let a = r#"{"a":1}"#;
    let b = r#"{"b":2}"#;

    assert_eq!(merge([Some(a)]).unwrap(), a);
    assert_eq!(merge(Vec::<Option<&str>>::new()).unwrap(), "{}");
    assert_eq!(merge([None, Some("{}"), Some("null")]).unwrap(), "{}");
    assert_eq!(merge([Some(a), Some(b)]).unwrap(), r#"{"a":1,"b":2}"#);
    assert_eq!(merge([Some(b), Some(a)]).unwrap(), r#"{"b":2,"a":1}"#);
    assert!(matches!(
        merge([Some(a), Some("[1]")]),
        Err(Error::DelimiterMismatch { index: 1, .. })
    ));
}
