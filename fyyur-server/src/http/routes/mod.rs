//! Route handlers organized by resource

pub mod health;
pub mod home;
pub mod venues;
pub mod artists;
pub mod shows;

use chrono::{Local, NaiveDateTime};

/// Reference time for splitting past and upcoming shows.
///
/// Show times are stored without a zone and entered in local time.
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
