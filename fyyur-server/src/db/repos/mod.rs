//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - List and detail pages are served by JOINs (no N+1)
//! - Writes run inside a transaction closed by [`finish`](super::tx::finish)
//! - Missing rows surface as `DbError::NotFound`

pub mod venues;
pub mod artists;
pub mod shows;

pub use venues::{VenueRepo, Venue, VenueSummary, VenueShow, VenueDetail};
pub use artists::{ArtistRepo, Artist, ArtistSummary, ArtistShow, ArtistDetail};
pub use shows::{ShowRepo, Show, ShowListing};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("not supported: {operation}")]
    NotSupported { operation: &'static str },
}
