//! Book entity.

pub mod filter;
pub mod model;

pub use filter::{ALIAS, COLUMN_TYPES, TABLE, whitelist};
pub use model::Book;
