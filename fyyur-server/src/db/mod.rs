//! Database layer - connection pool, schema and repositories
//!
//! - Handlers share a bounded pool, never a global session
//! - Every write runs in its own transaction, committed or rolled back
//!   before the repository returns
//! - Referential integrity is left to the schema's foreign keys

pub mod pool;
pub mod migrations;
pub mod tx;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
