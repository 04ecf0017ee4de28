use openapi_compose::model::{HttpMethod, Schema};
use openapi_compose::{DocumentConfig, OpenApi, Referable, sample};
use pretty_assertions::assert_eq;

const PETSTORE: &str = concat!(
    r#"{"openapi":"3.0.3","info":{"title":"Swagger Petstore","license":{"name":"MIT"},"version":"1.0.0"},"#,
    r#""paths":{"/pets":{"#,
    r#""get":{"tags":["pets"],"summary":"List all pets","operationId":"listPets","#,
    r#""parameters":[{"name":"limit","in":"query","description":"How many items to return at one time (max 100)","schema":{"type":"integer","format":"int32"}}],"#,
    r#""responses":{"200":{"description":"An paged array of pets","headers":{"x-next":{"schema":{"type":"string","description":"A link to the next page of responses"}}},"#,
    r##""content":{"application/json":{"schema":{"$ref":"#/components/schemas/Pets"}}}},"##,
    r##""default":{"description":"unexpected error","content":{"application/json":{"schema":{"$ref":"#/components/schemas/Error"}}}}}},"##,
    r#""post":{"tags":["pets"],"summary":"Create a pet","operationId":"createPets","#,
    r#""responses":{"204":{"description":"Null response"},"#,
    r##""default":{"description":"unexpected error","content":{"application/json":{"schema":{"$ref":"#/components/schemas/Error"}}}}}}}},"##,
    r#""servers":[{"url":"http://petstore.swagger.io/v1"}],"tags":[{"name":"pets"}],"#,
    r#""components":{"schemas":{"#,
    r#""Error":{"type":"object","properties":{"code":{"type":"integer","format":"int32"},"message":{"type":"string"}},"required":["code","message"]},"#,
    r#""Pet":{"type":"object","properties":{"id":{"type":"integer","format":"int64"},"name":{"type":"string"},"tag":{"type":"string"}},"required":["id","name"]},"#,
    r##""Pets":{"type":"array","items":{"$ref":"#/components/schemas/Pet"}}},"##,
    r#""securitySchemes":{"token":{"type":"http","scheme":"bearer","bearerFormat":"JWT"}}}}"#,
);

#[test]
fn petstore_encodes_to_the_known_document() {
    assert_eq!(sample::petstore().to_json().unwrap(), PETSTORE);
}

#[test]
fn petstore_decodes_to_an_equal_document() {
    let doc = OpenApi::from_json(PETSTORE).unwrap();
    assert_eq!(doc, sample::petstore());
    assert_eq!(doc.to_json().unwrap(), PETSTORE);
}

#[test]
fn decoded_references_keep_their_pointers() {
    let doc = OpenApi::from_json(PETSTORE).unwrap();
    let pets = doc.components().get::<Schema>("Pets").unwrap();
    let items = pets.object.items.as_deref().unwrap();
    assert!(items.is_ref());
    assert_eq!(items.pointer().unwrap().to_string(), "#/components/schemas/Pet");

    let list = doc.object.paths.get("/pets").unwrap().operation(HttpMethod::Get).unwrap();
    assert_eq!(list.object.operation_id, "listPets");
}

#[test]
fn pretty_rendering_keeps_member_order() {
    let config = DocumentConfig {
        pretty: true,
        ..DocumentConfig::default()
    };
    let text = sample::petstore().to_json_with(&config).unwrap();
    assert!(text.starts_with(
        "{\n  \"openapi\": \"3.0.3\",\n  \"info\": {\n    \"title\": \"Swagger Petstore\","
    ));

    let first_get = text.find("\"get\"").unwrap();
    let first_post = text.find("\"post\"").unwrap();
    assert!(first_get < first_post);
    assert_eq!(OpenApi::from_json(&text).unwrap(), sample::petstore());
}
