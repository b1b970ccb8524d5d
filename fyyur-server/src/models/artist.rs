//! Artist form

use super::form::FormFields;
use super::{Profile, ValidationError};

/// Validated artist submission (create and edit share it)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistForm {
    pub profile: Profile,
}

impl ArtistForm {
    pub fn from_fields(form: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            profile: Profile::from_fields(form)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }
}
