//! fyyur-server: venue and artist booking site
//!
//! Lists venues and artists, schedules shows between them, and serves
//! the whole thing as HTML backed by Postgres.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, create_pool_with_options, DbError};
pub use http::{build_router, run_server, ServerConfig, ServerError};
