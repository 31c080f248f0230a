//! # bookshop-core
//!
//! Core crate for the Bookshop backend. Contains the list-filtering
//! subsystem (filter types, the `filter` expression parser, pagination
//! normalisation and the predicate builder), the query executor trait,
//! configuration schemas, and the unified error system.
//!
//! This crate performs no I/O and has **no** internal dependencies on other
//! Bookshop crates.

pub mod config;
pub mod error;
pub mod parser;
pub mod query;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use parser::{FilterParser, FilterSyntaxError};
pub use query::{ListQuery, PredicateBuilder};
pub use result::AppResult;
