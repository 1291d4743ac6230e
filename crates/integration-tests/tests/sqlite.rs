mod harness;

use harness::catalog::{EN, HR};
use harness::config::ConfigBuilder;
use harness::server::TestServer;
use rnd_catalog::SqliteCatalog;
use serde_json::Value;

async fn seed(url: &str) {
    let catalog = SqliteCatalog::connect(url, 1).await.unwrap();
    catalog.migrate().await.unwrap();
    catalog.upsert("generic_err", EN, "Something went wrong").await.unwrap();
    catalog.upsert("record_not_found", EN, "Record not found").await.unwrap();
    catalog.upsert("record_not_found", HR, "Zapis nije pronađen").await.unwrap();
    catalog.pool().close().await;
}

#[tokio::test]
async fn messages_are_read_from_database() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("errors.db").display());
    seed(&url).await;

    let config = ConfigBuilder::new().with_database(&url).build();
    let server = TestServer::start(config).await.unwrap();

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
async fn fresh_database_is_migrated_on_startup() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("fresh.db").display());

    let config = ConfigBuilder::new().with_database(&url).build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server
        .client()
        .get(server.url("/v1/errors/record_not_found"))
        .send()
        .await
        .unwrap();

    // Empty catalog: not even the generic message resolves
    assert_eq!(resp.status(), 500);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error_slug"], "generic_err");
    assert!(body.get("error").is_none());
}
