//! Tests for the HTTP backend against a mock server

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{sample_snapshot, test_hypervideo_id};
use crate::error::ModelError;
use crate::services::HttpDatabase;
use crate::traits::Database;

async fn database_for(server: &MockServer) -> HttpDatabase {
    HttpDatabase::new(&format!("{}/api", server.uri())).expect("valid base url")
}

#[test]
fn test_base_url_gets_trailing_slash() {
    let database = HttpDatabase::new("http://localhost:8080/api").unwrap();
    assert_eq!(database.base_url().as_str(), "http://localhost:8080/api/");
    assert!(HttpDatabase::new("not a url").is_err());
}

#[tokio::test]
async fn test_load_snapshot() {
    let server = MockServer::start().await;
    let snapshot = sample_snapshot();
    Mock::given(method("GET"))
        .and(path("/api/hypervideos/0001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&snapshot))
        .mount(&server)
        .await;

    let loaded = database_for(&server).await.load_hypervideo(&test_hypervideo_id()).await.unwrap();
    assert_eq!(loaded, snapshot);
}

#[tokio::test]
async fn test_load_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = database_for(&server).await.load_hypervideo(&test_hypervideo_id()).await;
    assert!(matches!(result, Err(ModelError::LoadFailed { .. })));
}

#[tokio::test]
async fn test_save_annotations_posts_list() {
    let server = MockServer::start().await;
    let annotations = sample_snapshot().annotations;
    Mock::given(method("POST"))
        .and(path("/api/hypervideos/0001/annotations"))
        .and(body_json(&annotations))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"failed": false})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = database_for(&server)
        .await
        .save_annotations(&test_hypervideo_id(), &annotations)
        .await;
    assert!(!outcome.is_failed());
}

#[tokio::test]
async fn test_failed_body_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"failed": true, "error": "read-only"})))
        .mount(&server)
        .await;

    let outcome = database_for(&server).await.save_config(&Default::default()).await;
    assert!(outcome.is_failed());
    assert_eq!(outcome.message(), "read-only");
}

#[tokio::test]
async fn test_empty_body_counts_as_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/css"))
        .and(body_json(json!({"css": "p {}"})))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let outcome = database_for(&server).await.save_global_css("p {}").await;
    assert!(!outcome.is_failed());
}

#[tokio::test]
async fn test_server_error_becomes_failed_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let bundle = sample_snapshot().bundle;
    let outcome = database_for(&server)
        .await
        .save_hypervideo(&test_hypervideo_id(), &bundle)
        .await;
    assert!(outcome.is_failed());
    assert!(outcome.message().contains("500"));
}
