//! Core type definitions used across the Bookshop workspace.

pub mod filter;
pub mod pagination;
pub mod whitelist;

pub use filter::{FieldFilter, FilterOp, OperatorSet, UnknownOperator};
pub use pagination::{PageResponse, PaginationParameters};
pub use whitelist::FieldFilterWhitelist;
