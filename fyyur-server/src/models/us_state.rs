//! US state codes accepted for venue and artist locations

use super::ValidationError;

/// Two-letter codes for the 50 states plus DC
pub const STATE_CODES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Validated state code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UsState(&'static str);

impl UsState {
    /// Accepts a code in any case, e.g. `"ca"` or `"CA"`.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "state" });
        }

        let upper = trimmed.to_ascii_uppercase();
        STATE_CODES
            .iter()
            .find(|code| **code == upper)
            .map(|code| Self(*code))
            .ok_or_else(|| ValidationError::InvalidChoice {
                field: "state",
                value: trimmed.to_owned(),
            })
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}
