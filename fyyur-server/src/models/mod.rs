//! Domain models with validation at construction
//!
//! Submitted forms are validated into these types before anything
//! touches the database. Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod form;
pub mod genre;
pub mod us_state;
pub mod profile;
pub mod venue;
pub mod artist;
pub mod show;
pub mod search;
pub mod listing;

pub use validation::ValidationError;
pub use form::FormFields;
pub use genre::Genre;
pub use us_state::UsState;
pub use profile::Profile;
pub use venue::VenueForm;
pub use artist::ArtistForm;
pub use show::{ShowForm, format_start_time};
pub use search::{SearchTerm, SearchResults};
pub use listing::{Area, ShowSplit, group_by_area, partition_shows};
