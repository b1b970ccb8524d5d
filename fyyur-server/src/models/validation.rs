//! Why a submitted venue, artist or show form was refused

use std::fmt;

/// A form field that failed its check.
///
/// `field` is the form key (`facebook_link`, `start_time`, ...). The message
/// is shown above the re-rendered form, so `Display` spells the key with
/// spaces instead of underscores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field left blank or absent
    Empty { field: &'static str },

    TooLong { field: &'static str, max: usize },

    /// URL, phone, id or start time that doesn't parse
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Genre or state outside the fixed vocabulary
    InvalidChoice { field: &'static str, value: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::InvalidChoice { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.field().replace('_', " ");
        match self {
            Self::Empty { .. } => write!(f, "{label} is required"),
            Self::TooLong { max, .. } => write!(f, "{label} must be at most {max} characters"),
            Self::InvalidFormat { reason, .. } => write!(f, "{label} {reason}"),
            Self::InvalidChoice { value, .. } => write!(f, "'{value}' is not an accepted {label}"),
        }
    }
}

impl std::error::Error for ValidationError {}
