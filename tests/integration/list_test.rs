//! Integration tests for pagination on the list endpoints.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_default_page() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/books", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["page"], 1);
    assert_eq!(response.body["data"]["limit"], 5);
    assert_eq!(response.total(), 7);
    assert_eq!(response.body["data"]["total_pages"], 2);
    assert_eq!(response.body["data"]["has_next"], true);
    assert_eq!(response.body["data"]["has_previous"], false);
    assert_eq!(response.names().len(), 5);
}

#[tokio::test]
async fn test_second_page() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/books", &[("page", "2")]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.names(),
        vec![
            "Harry Potter and the Chamber of Secrets",
            "Neuromancer",
        ]
    );
    assert_eq!(response.body["data"]["has_next"], false);
    assert_eq!(response.body["data"]["has_previous"], true);
}

#[tokio::test]
async fn test_explicit_page_and_limit() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/books", &[("page", "2"), ("limit", "3")]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["page"], 2);
    assert_eq!(response.body["data"]["limit"], 3);
    assert_eq!(
        response.names(),
        vec![
            "Children of Dune",
            "Harry Potter and the Philosopher's Stone",
            "Harry Potter and the Chamber of Secrets",
        ]
    );
}

#[tokio::test]
async fn test_limit_is_capped() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/books", &[("limit", "30")]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["limit"], 20);
    assert_eq!(response.names().len(), 7);
}

#[tokio::test]
async fn test_zero_and_negative_page_fall_back_to_first() {
    let app = helpers::TestApp::new();

    for page in ["0", "-1"] {
        let response = app.get("/api/books", &[("page", page)]).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["data"]["page"], 1);
    }
}

#[tokio::test]
async fn test_negative_limit_is_a_client_error() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/books", &[("limit", "-1")]).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_blank_and_garbage_pagination_use_defaults() {
    let app = helpers::TestApp::new();

    for query in [
        [("page", ""), ("limit", "")],
        [("page", "abc"), ("limit", "1.5")],
        [("page", "-"), ("limit", "five")],
    ] {
        let response = app.get("/api/books", &query).await;
        assert_eq!(response.status, StatusCode::OK, "{query:?}");
        assert_eq!(response.body["data"]["page"], 1);
        assert_eq!(response.body["data"]["limit"], 5);
        assert_eq!(response.names().len(), 5);
    }
}

#[tokio::test]
async fn test_garbage_limit_keeps_valid_page() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/books", &[("page", "2"), ("limit", "1.5")]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["page"], 2);
    assert_eq!(response.body["data"]["limit"], 5);
    assert_eq!(response.names().len(), 2);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/authors", &[("page", "5")]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.names().is_empty());
    assert_eq!(response.total(), 4);
}

#[tokio::test]
async fn test_list_authors() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/authors", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.names(),
        vec!["J. R. R. Tolkien", "Frank Herbert", "J. K. Rowling", "William Gibson"]
    );
}
