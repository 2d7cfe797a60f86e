// Contract test for GET /ENSEK/orders
//
// The order collection must match the published JSON schema, including the
// remote API's inconsistent casing of the identifier field.

#[path = "../helpers/mod.rs"]
mod helpers;

use ensek_verify::schema::ResponseSchemas;
use ensek_verify::EnsekClient;
use helpers::*;
use serde_json::json;

#[tokio::test]
async fn order_collection_matches_schema() {
    let stub = EnsekStub::start().await;
    stub.with_orders(fixtures::seed_orders()).await;
    let client = EnsekClient::new(stub.base_url());

    let response = client.orders().await.expect("GET /ENSEK/orders");
    assert_ok(&response);

    let schemas = ResponseSchemas::load().expect("schemas compile");
    schemas
        .validate_orders(&response.body)
        .expect("order collection matches schema");
}

#[tokio::test]
async fn schema_accepts_either_id_field_spelling() {
    let schemas = ResponseSchemas::load().expect("schemas compile");

    let body = json!([
        fixtures::order_json("id", "abc-1", "gas", 1, "Sat, 05 Feb 2022 09:14:00 GMT"),
        fixtures::order_json("Id", "abc-2", "oil", 2, "Tue, 15 Feb 2022 18:30:00 GMT"),
    ]);

    schemas
        .validate_orders(&body)
        .expect("both id spellings are valid");
}

#[tokio::test]
async fn schema_rejects_order_without_any_id_field() {
    let schemas = ResponseSchemas::load().expect("schemas compile");

    let body = json!([
        { "fuel": "gas", "quantity": 1, "time": "Sat, 05 Feb 2022 09:14:00 GMT" }
    ]);

    assert!(schemas.validate_orders(&body).is_err());
}

#[tokio::test]
async fn schema_rejects_negative_quantity() {
    let schemas = ResponseSchemas::load().expect("schemas compile");

    let body = json!([
        { "id": "abc-1", "fuel": "gas", "quantity": -1, "time": "Sat, 05 Feb 2022 09:14:00 GMT" }
    ]);

    assert!(schemas.validate_orders(&body).is_err());
}
