mod harness;

use harness::catalog::seeded;
use harness::config::ConfigBuilder;
use harness::server::TestServer;
use serde_json::{Value, json};

async fn start() -> TestServer {
    TestServer::with_catalog(ConfigBuilder::new().build(), seeded())
        .await
        .unwrap()
}

#[tokio::test]
async fn record_not_found_maps_to_404() {
    let server = start().await;

    let resp = server
        .client()
        .get(server.url("/v1/errors/record_not_found"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "status_code": 404,
            "error": "Record not found",
            "error_slug": "record_not_found",
        })
    );
}

#[tokio::test]
async fn custom_error_maps_to_400() {
    let server = start().await;

    let resp = server
        .client()
        .get(server.url("/v1/errors/invalid_email"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid email");
    assert_eq!(body["error_slug"], "invalid_email");
}

#[tokio::test]
async fn unauthorized_maps_to_401() {
    let server = start().await;

    let resp = server
        .client()
        .get(server.url("/v1/errors/unauthorized"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status_code"], 401);
    assert_eq!(body["error"], "Please sign in");
}

#[tokio::test]
async fn missing_message_falls_back_to_generic() {
    let server = start().await;

    let resp = server
        .client()
        .get(server.url("/v1/errors/no_such_error"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Something went wrong");
    assert_eq!(body["error_slug"], "generic_err");
}

#[tokio::test]
async fn language_header_selects_translation() {
    let server = start().await;

    let resp = server
        .client()
        .get(server.url("/v1/errors/record_not_found"))
        .header("X-Language-Id", "2")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Zapis nije pronađen");
}

#[tokio::test]
async fn generic_fallback_uses_requested_language() {
    let server = start().await;

    let resp = server
        .client()
        .get(server.url("/v1/errors/invalid_email"))
        .header("X-Language-Id", "2")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Nešto je pošlo po zlu");
    assert_eq!(body["error_slug"], "generic_err");
}

#[tokio::test]
async fn configured_default_language_applies_without_header() {
    let config = ConfigBuilder::new().with_default_language(2).build();
    let server = TestServer::with_catalog(config, seeded()).await.unwrap();

    let resp = server
        .client()
        .get(server.url("/v1/errors/record_not_found"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Zapis nije pronađen");
}

#[tokio::test]
async fn invalid_language_header_uses_default() {
    let server = start().await;

    let resp = server
        .client()
        .get(server.url("/v1/errors/record_not_found"))
        .header("X-Language-Id", "croatian")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Record not found");
}

#[tokio::test]
async fn formatted_error_interpolates_values() {
    let server = start().await;

    let resp = server
        .client()
        .post(server.url("/v1/errors/name_too_long/format"))
        .json(&json!({ "values": ["Ana", 3] }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Name Ana is longer than 3 characters");
    assert_eq!(body["error_slug"], "name_too_long");
}

#[tokio::test]
async fn formatted_error_with_wrong_arity_is_generic() {
    let server = start().await;

    let resp = server
        .client()
        .post(server.url("/v1/errors/name_too_long/format"))
        .json(&json!({ "values": ["Ana"] }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Something went wrong");
    assert_eq!(body["error_slug"], "generic_err");
}

#[tokio::test]
async fn unique_violation_uses_configured_token() {
    let config = ConfigBuilder::new()
        .with_duplicate_key("user_username", "USERNAME")
        .build();
    let server = TestServer::with_catalog(config, seeded()).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/v1/unique-violations"))
        .json(&json!({ "detail": "Key (user_username)=(ana) already exists." }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "status_code": 400, "message": "ERR_DUPLICATE_ENTRY_USERNAME" }));
}

#[tokio::test]
async fn unique_violation_without_column_is_bare_token() {
    let server = start().await;

    let resp = server
        .client()
        .post(server.url("/v1/unique-violations"))
        .json(&json!({ "detail": "duplicate key value" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "ERR_DUPLICATE_ENTRY");
}

#[tokio::test]
async fn ok_endpoint_returns_canned_envelope() {
    let server = start().await;

    let resp = server.client().get(server.url("/v1/ok")).send().await.unwrap();

    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "status_code": 200, "message": "OK" }));
}
