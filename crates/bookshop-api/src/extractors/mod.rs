//! Custom Axum extractors.

pub mod list;

pub use list::ListParams;
