mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use shortly::routes::router;

#[tokio::test]
async fn test_list_urls_not_allowed() {
    let (state, _repository) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/api/urls").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_delete_collection_not_allowed() {
    let (state, _repository) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let response = server.delete("/api/urls").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_update_url_not_allowed() {
    let (state, repository) = common::create_test_state();
    repository.seed("testcode", "https://example.com/");
    let server = TestServer::new(router(state)).unwrap();

    let put = server
        .put("/api/urls/testcode")
        .json(&json!({ "original_url": "https://other.example.com/" }))
        .await;
    put.assert_status(StatusCode::METHOD_NOT_ALLOWED);

    let patch = server
        .patch("/api/urls/testcode")
        .json(&json!({ "original_url": "https://other.example.com/" }))
        .await;
    patch.assert_status(StatusCode::METHOD_NOT_ALLOWED);

    // Records are immutable: the rejected methods left the store untouched.
    assert_eq!(
        repository.get("testcode").unwrap().original_url,
        "https://example.com/"
    );
}

#[tokio::test]
async fn test_delete_url_not_allowed() {
    let (state, repository) = common::create_test_state();
    repository.seed("testcode", "https://example.com/");
    let server = TestServer::new(router(state)).unwrap();

    let response = server.delete("/api/urls/testcode").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(repository.len(), 1);
}

#[tokio::test]
async fn test_post_to_redirect_route_not_allowed() {
    let (state, repository) = common::create_test_state();
    repository.seed("testcode", "https://example.com/");
    let server = TestServer::new(router(state)).unwrap();

    let response = server.post("/testcode").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
