//! # bookshop-entity
//!
//! Row models for the Bookshop catalogue. Every struct in this crate
//! represents a database table row and derives `Debug`, `Clone`,
//! `Serialize`, `Deserialize` and `sqlx::FromRow`. Each entity module also
//! defines the table name, the alias list queries use, and the filter
//! whitelist for its list endpoint.

pub mod author;
pub mod book;

pub use author::Author;
pub use book::Book;
