//! The petstore document, built through the public API.

use crate::model::{
    Header, HttpMethod, Info, License, MediaType, Operation, Parameter, Response, Schema,
    SecurityScheme, Server, Tag,
};
use crate::openapi::OpenApi;

pub fn petstore() -> OpenApi {
    let mut doc = OpenApi::new();
    *doc.info_mut() = Info::new("Swagger Petstore", "1.0.0").with_license(License::new("MIT"));

    doc.add_tag(None);
    doc.add_tag(Some(Tag::new("pets")));
    doc.add_component("token", Some(SecurityScheme::http("bearer", "JWT")));
    doc.add_server(Server::new("http://petstore.swagger.io/v1"));

    doc.add_component(
        "Pet",
        Some(Schema::object_of(
            [("id", Schema::long()), ("name", Schema::string()), ("tag", Schema::string())],
            &["id", "name"],
        )),
    );
    let pets = doc.reference::<Schema>("Pet").map(Schema::items_of);
    doc.add_component("Pets", pets);
    doc.add_component(
        "Error",
        Some(Schema::object_of(
            [("code", Schema::integer()), ("message", Schema::string())],
            &["code", "message"],
        )),
    );

    let error_response = |doc: &OpenApi| {
        let mut resp = Response::new("unexpected error");
        if let Some(error) = doc.reference::<Schema>("Error") {
            resp.add_content("application/json", MediaType::with_schema(error));
        }
        resp
    };

    let mut list = Operation::new("listPets")
        .with_summary("List all pets")
        .with_tags(["pets"]);
    list.add_parameter(
        Parameter::query("limit", Schema::integer(), false)
            .with_description("How many items to return at one time (max 100)"),
    );
    let mut page = Response::new("An paged array of pets");
    page.add_header(
        "x-next",
        Header::with_schema(
            Schema::string().with_description("A link to the next page of responses"),
        ),
    );
    if let Some(pets) = doc.reference::<Schema>("Pets") {
        page.add_content("application/json", MediaType::with_schema(pets));
    }
    list.add_response(200, page);
    list.set_default_response(error_response(&doc));
    doc.add_operation(HttpMethod::Get, "/pets", list);

    let mut create = Operation::new("createPets")
        .with_summary("Create a pet")
        .with_tags(["pets"]);
    create.add_response(204, Response::new("Null response"));
    create.set_default_response(error_response(&doc));
    doc.add_operation(HttpMethod::Post, "/pets", create);

    doc
}
