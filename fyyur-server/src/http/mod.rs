//! HTTP server layer
//!
//! Axum server with:
//! - Server-rendered HTML pages
//! - Flash messages carried across redirects in a cookie
//! - Request tracing
//! - Graceful shutdown

pub mod server;
pub mod error;
pub mod extractors;
pub mod flash;
pub mod routes;
pub mod views;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
