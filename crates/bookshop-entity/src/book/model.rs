//! Book entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A book in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Book {
    /// Unique book identifier.
    pub id: Uuid,
    /// Book title.
    pub title: String,
    /// The author who wrote the book.
    pub author_id: Uuid,
    /// Price in cents.
    pub price: i64,
    /// Units in stock.
    pub stock: i32,
    /// Year of first publication.
    pub published_year: i32,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}
