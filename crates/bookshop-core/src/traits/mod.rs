//! Core traits defined in `bookshop-core` and implemented by other crates.

pub mod executor;

pub use executor::QueryExecutor;
