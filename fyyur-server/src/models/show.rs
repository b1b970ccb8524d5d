//! Show form and start-time handling

use chrono::NaiveDateTime;

use super::form::FormFields;
use super::ValidationError;

/// Formats accepted for `start_time`, tried in order.
///
/// The first is what the create form pre-fills; the `T` variants come
/// from `datetime-local` inputs.
const START_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Format used when pre-filling the form.
pub const FORM_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used on detail pages.
pub const DISPLAY_TIME_FORMAT: &str = "%m/%d/%Y, %H:%M";

/// Validated show submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowForm {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

impl ShowForm {
    pub fn from_fields(form: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            artist_id: parse_id(form, "artist_id")?,
            venue_id: parse_id(form, "venue_id")?,
            start_time: parse_start_time(form.get("start_time").unwrap_or_default())?,
        })
    }
}

fn parse_id(form: &FormFields, field: &'static str) -> Result<i32, ValidationError> {
    let raw = form.get(field).unwrap_or_default();
    if raw.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidFormat {
            field,
            reason: "must be a positive integer",
        }),
    }
}

/// Parse a submitted start time.
pub fn parse_start_time(raw: &str) -> Result<NaiveDateTime, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty { field: "start_time" });
    }
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or(ValidationError::InvalidFormat {
            field: "start_time",
            reason: "must look like YYYY-MM-DD HH:MM:SS",
        })
}

/// Start time as shown on venue and artist pages.
pub fn format_start_time(t: &NaiveDateTime) -> String {
    t.format(DISPLAY_TIME_FORMAT).to_string()
}
