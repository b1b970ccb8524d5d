//! Music genres offered by the venue and artist forms

use super::ValidationError;

/// Genres a venue plays or an artist performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Alternative,
    Blues,
    Classical,
    Country,
    Electronic,
    Folk,
    Funk,
    HipHop,
    HeavyMetal,
    Instrumental,
    Jazz,
    MusicalTheatre,
    Pop,
    Punk,
    RnB,
    Reggae,
    RockNRoll,
    Soul,
    Other,
}

impl Genre {
    /// Every genre, in the order the forms list them.
    pub const ALL: [Genre; 19] = [
        Self::Alternative,
        Self::Blues,
        Self::Classical,
        Self::Country,
        Self::Electronic,
        Self::Folk,
        Self::Funk,
        Self::HipHop,
        Self::HeavyMetal,
        Self::Instrumental,
        Self::Jazz,
        Self::MusicalTheatre,
        Self::Pop,
        Self::Punk,
        Self::RnB,
        Self::Reggae,
        Self::RockNRoll,
        Self::Soul,
        Self::Other,
    ];

    /// Label stored in the database and shown in forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alternative => "Alternative",
            Self::Blues => "Blues",
            Self::Classical => "Classical",
            Self::Country => "Country",
            Self::Electronic => "Electronic",
            Self::Folk => "Folk",
            Self::Funk => "Funk",
            Self::HipHop => "Hip-Hop",
            Self::HeavyMetal => "Heavy Metal",
            Self::Instrumental => "Instrumental",
            Self::Jazz => "Jazz",
            Self::MusicalTheatre => "Musical Theatre",
            Self::Pop => "Pop",
            Self::Punk => "Punk",
            Self::RnB => "R&B",
            Self::Reggae => "Reggae",
            Self::RockNRoll => "Rock n Roll",
            Self::Soul => "Soul",
            Self::Other => "Other",
        }
    }

    /// Parse a genre from its label (exact match).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == label)
    }

    /// Parse a list of submitted labels.
    ///
    /// At least one genre is required; duplicates are collapsed while
    /// keeping submission order.
    pub fn parse_list<S: AsRef<str>>(labels: &[S]) -> Result<Vec<Self>, ValidationError> {
        let mut genres = Vec::with_capacity(labels.len());
        for label in labels {
            let label = label.as_ref();
            let genre = Self::from_label(label).ok_or_else(|| ValidationError::InvalidChoice {
                field: "genre",
                value: label.to_owned(),
            })?;
            if !genres.contains(&genre) {
                genres.push(genre);
            }
        }

        if genres.is_empty() {
            return Err(ValidationError::Empty { field: "genres" });
        }
        Ok(genres)
    }

    /// Labels for storage in a `TEXT[]` column.
    pub fn labels(genres: &[Genre]) -> Vec<String> {
        genres.iter().map(|g| g.as_str().to_owned()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for genre in Genre::ALL {
            assert_eq!(Genre::from_label(genre.as_str()), Some(genre));
        }
    }

    #[test]
    fn parse_list_rejects_unknown() {
        let err = Genre::parse_list(&["Jazz", "Polka"]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidChoice {
                field: "genre",
                value: "Polka".into()
            }
        );
    }

    #[test]
    fn parse_list_requires_one() {
        let empty: [&str; 0] = [];
        let err = Genre::parse_list(&empty).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "genres" }));
    }

    #[test]
    fn parse_list_dedupes() {
        let genres = Genre::parse_list(&["Jazz", "R&B", "Jazz"]).unwrap();
        assert_eq!(genres, vec![Genre::Jazz, Genre::RnB]);
    }
}
