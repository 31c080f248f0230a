//! Integration tests for the `filter` query parameter.

mod helpers;

use bookshop_core::query::Combination;
use http::StatusCode;

#[tokio::test]
async fn test_like_prefix() {
    let app = helpers::TestApp::new();

    let response = app.filter("/api/books", &["title||like||Harry%"]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.names(),
        vec![
            "Harry Potter and the Philosopher's Stone",
            "Harry Potter and the Chamber of Secrets",
        ]
    );
}

#[tokio::test]
async fn test_equal_single_value() {
    let app = helpers::TestApp::new();

    let response = app.filter("/api/books", &["title||eq||Dune"]).await;

    assert_eq!(response.names(), vec!["Dune"]);
}

#[tokio::test]
async fn test_equal_multiple_values() {
    let app = helpers::TestApp::new();
    let element = format!("author_id||eq||{},{}", helpers::TOLKIEN, helpers::GIBSON);

    let response = app.filter("/api/books", &[element.as_str()]).await;

    assert_eq!(
        response.names(),
        vec!["The Hobbit", "The Lord of the Rings", "Neuromancer"]
    );
}

#[tokio::test]
async fn test_zero_is_a_valid_number() {
    let app = helpers::TestApp::new();

    let response = app.filter("/api/books", &["price||eq||0"]).await;
    assert_eq!(response.names(), vec!["Neuromancer"]);

    let response = app.filter("/api/books", &["stock||lte||0"]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.total(), 2);
}

#[tokio::test]
async fn test_comparison() {
    let app = helpers::TestApp::new();

    let response = app.filter("/api/books", &["price||lte||1500"]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.total(), 4);
}

#[tokio::test]
async fn test_between_is_inclusive() {
    let app = helpers::TestApp::new();

    let response = app
        .filter("/api/books", &["published_year||between||1954,1976"])
        .await;

    assert_eq!(
        response.names(),
        vec!["The Lord of the Rings", "Dune", "Children of Dune"]
    );
}

#[tokio::test]
async fn test_filters_combine_with_and() {
    let app = helpers::TestApp::new();

    let response = app
        .filter("/api/books", &["title||like||%Dune%", "price||gte||1900"])
        .await;

    assert_eq!(response.names(), vec!["Dune"]);
}

#[tokio::test]
async fn test_last_wins_applies_only_the_last_filter() {
    let app = helpers::TestApp::with_combination(Combination::LastWins);

    let response = app
        .filter("/api/books", &["title||like||%Dune%", "price||gte||1900"])
        .await;

    assert_eq!(response.names(), vec!["The Lord of the Rings", "Dune"]);
}

#[tokio::test]
async fn test_unlisted_and_disallowed_filters_are_ignored() {
    let app = helpers::TestApp::new();

    let response = app
        .filter(
            "/api/books",
            &["created_at||gte||0", "stock||eq||3", "title||neq||Dune"],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.total(), 7);
}

#[tokio::test]
async fn test_empty_filter_array() {
    let app = helpers::TestApp::new();

    let response = app.filter("/api/authors", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.total(), 4);
}

#[tokio::test]
async fn test_author_filters() {
    let app = helpers::TestApp::new();

    let response = app
        .filter("/api/authors", &["country||eq||GB", "name||like||%Rowling"])
        .await;

    assert_eq!(response.names(), vec!["J. K. Rowling"]);
}

#[tokio::test]
async fn test_invalid_filters_are_rejected() {
    let app = helpers::TestApp::new();
    let cases: [(&[&str], &str); 7] = [
        (&["price||lte"], "wrong_token_count"),
        (&["||eq||Dune"], "missing_field"),
        (&["title||||Dune"], "missing_operator"),
        (&["title||eq||"], "missing_value"),
        (&["price||lte||cheap"], "not_a_number"),
        (&["price||between||1000"], "between_arity"),
        (&["title||eq||Dune", "price||gt||10.5"], "not_a_number"),
    ];

    for (elements, reason) in cases {
        let response = app.filter("/api/books", elements).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{elements:?}");
        assert_eq!(response.body["error"], "INVALID_FILTER_SYNTAX");
        assert_eq!(response.reason(), Some(reason), "{elements:?}");
    }
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = helpers::TestApp::new();

    for raw in ["title||eq||Dune", "[1, 2]", "{\"title\": \"Dune\"}"] {
        let response = app.get("/api/books", &[("filter", raw)]).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{raw}");
        assert_eq!(response.reason(), Some("malformed_json"));
    }
}
