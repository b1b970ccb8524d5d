//! Venue form

use super::form::FormFields;
use super::{Profile, ValidationError};

/// Validated venue submission (create and edit share it)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueForm {
    pub profile: Profile,
    pub address: String,
}

impl VenueForm {
    pub fn from_fields(form: &FormFields) -> Result<Self, ValidationError> {
        let profile = Profile::from_fields(form)?;
        let address = form.required("address")?;
        Ok(Self { profile, address })
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }
}
