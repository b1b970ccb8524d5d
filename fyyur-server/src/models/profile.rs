//! Fields shared by venues and artists

use super::form::FormFields;
use super::{Genre, UsState, ValidationError};

/// Public listing details common to venues and artists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub city: String,
    pub state: UsState,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<Genre>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl Profile {
    /// Validate the shared fields of a submitted form.
    pub fn from_fields(form: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            name: form.required("name")?,
            city: form.required("city")?,
            state: UsState::new(form.get("state").unwrap_or_default())?,
            phone: form.optional_phone("phone")?,
            website: form.optional_url("website")?,
            facebook_link: form.optional_url("facebook_link")?,
            image_link: form.optional_url("image_link")?,
            genres: Genre::parse_list(form.all("genres").as_slice())?,
            seeking_talent: form.checkbox("seeking_talent"),
            seeking_description: form.optional("seeking_description")?,
        })
    }

    /// Genre labels as stored in the database.
    pub fn genre_labels(&self) -> Vec<String> {
        Genre::labels(&self.genres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form::fields;

    #[test]
    fn parses_full_profile() {
        let form = fields(&[
            ("name", "The Musical Hop"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("phone", "123-123-1234"),
            ("website", "https://www.themusicalhop.com"),
            ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
            ("image_link", ""),
            ("genres", "Jazz"),
            ("genres", "Reggae"),
            ("seeking_talent", "y"),
            ("seeking_description", "We are on the lookout for a local artist"),
        ]);

        let profile = Profile::from_fields(&form).unwrap();
        assert_eq!(profile.name, "The Musical Hop");
        assert_eq!(profile.state.as_str(), "CA");
        assert_eq!(profile.image_link, None);
        assert_eq!(profile.genre_labels(), vec!["Jazz", "Reggae"]);
        assert!(profile.seeking_talent);
    }

    #[test]
    fn missing_state_is_empty_error() {
        let form = fields(&[("name", "x"), ("city", "y"), ("genres", "Jazz")]);
        assert_eq!(
            Profile::from_fields(&form).unwrap_err(),
            ValidationError::Empty { field: "state" }
        );
    }
}
