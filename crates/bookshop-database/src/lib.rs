//! # bookshop-database
//!
//! PostgreSQL connection management, the list-query executors, and the
//! entity repositories built on them.
//!
//! [`PgQueryExecutor`] renders a [`ListQuery`](bookshop_core::ListQuery) into
//! SQL with [`sql`] and runs it on a pool. [`MemoryExecutor`] evaluates the
//! same queries over in-memory rows.

pub mod connection;
pub mod executor;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod sql;

pub use connection::DatabasePool;
pub use executor::PgQueryExecutor;
pub use memory::MemoryExecutor;
