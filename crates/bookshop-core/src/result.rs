//! Convenience result type alias for Bookshop.

use crate::error::AppError;

/// A specialized `Result` type for Bookshop operations.
pub type AppResult<T> = Result<T, AppError>;
