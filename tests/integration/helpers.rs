//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::Utc;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use bookshop_api::{AppState, build_app};
use bookshop_core::config::PaginationConfig;
use bookshop_core::query::Combination;
use bookshop_database::MemoryExecutor;
use bookshop_database::repositories::{AuthorRepository, BookRepository};
use bookshop_entity::{Author, Book, author, book};

pub const TOLKIEN: Uuid = Uuid::from_u128(1);
pub const HERBERT: Uuid = Uuid::from_u128(2);
pub const ROWLING: Uuid = Uuid::from_u128(3);
pub const GIBSON: Uuid = Uuid::from_u128(4);

/// Test application backed by an in-memory catalogue.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

/// Response from a test request
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Create a test application joining filters with `AND`.
    pub fn new() -> Self {
        Self::with_combination(Combination::All)
    }

    /// Create a test application using `combination` for both endpoints.
    pub fn with_combination(combination: Combination) -> Self {
        let books = MemoryExecutor::new().with_table(book::TABLE, seed_books());
        let authors = MemoryExecutor::new().with_table(author::TABLE, seed_authors());

        let state = AppState {
            pagination: PaginationConfig::default(),
            books: Arc::new(BookRepository::books(Arc::new(books)).with_combination(combination)),
            authors: Arc::new(
                AuthorRepository::authors(Arc::new(authors)).with_combination(combination),
            ),
        };

        Self {
            router: build_app(state),
        }
    }

    /// GET `path` with the given query pairs.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> TestResponse {
        let uri = if query.is_empty() {
            path.to_string()
        } else {
            let encoded = serde_urlencoded::to_string(query).expect("Failed to encode query");
            format!("{path}?{encoded}")
        };
        self.request(&uri).await
    }

    /// GET `path` with a `filter` built from `elements`.
    pub async fn filter(&self, path: &str, elements: &[&str]) -> TestResponse {
        let filter = serde_json::to_string(elements).expect("Failed to encode filter");
        self.get(path, &[("filter", &filter)]).await
    }

    /// Make a GET request to the test app
    pub async fn request(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

impl TestResponse {
    /// Titles (or names) of the returned page, in order.
    pub fn names(&self) -> Vec<String> {
        self.body["data"]["items"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|i| i.get("title").or_else(|| i.get("name")))
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn total(&self) -> u64 {
        self.body["data"]["total_items"].as_u64().unwrap_or(0)
    }

    pub fn reason(&self) -> Option<&str> {
        self.body["details"]["reason"].as_str()
    }
}

fn book(title: &str, author_id: Uuid, price: i64, stock: i32, published_year: i32) -> Book {
    Book {
        id: Uuid::new_v4(),
        title: title.to_string(),
        author_id,
        price,
        stock,
        published_year,
        created_at: Utc::now(),
    }
}

fn seed_books() -> Vec<Book> {
    vec![
        book("The Hobbit", TOLKIEN, 1500, 10, 1937),
        book("The Lord of the Rings", TOLKIEN, 3000, 0, 1954),
        book("Dune", HERBERT, 2000, 5, 1965),
        book("Children of Dune", HERBERT, 1800, 2, 1976),
        book("Harry Potter and the Philosopher's Stone", ROWLING, 1200, 20, 1997),
        book("Harry Potter and the Chamber of Secrets", ROWLING, 1250, 0, 1998),
        book("Neuromancer", GIBSON, 0, 3, 1984),
    ]
}

fn seed_authors() -> Vec<Author> {
    [
        (TOLKIEN, "J. R. R. Tolkien", "GB"),
        (HERBERT, "Frank Herbert", "US"),
        (ROWLING, "J. K. Rowling", "GB"),
        (GIBSON, "William Gibson", "US"),
    ]
    .into_iter()
    .map(|(id, name, country)| Author {
        id,
        name: name.to_string(),
        country: country.to_string(),
        created_at: Utc::now(),
    })
    .collect()
}
