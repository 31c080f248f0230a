//! HTTP request handlers.

pub mod authors;
pub mod books;
pub mod health;
