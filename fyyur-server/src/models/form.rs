//! Raw url-encoded form fields
//!
//! Bodies arrive as ordered `(key, value)` pairs so that multi-selects
//! (`genres=Jazz&genres=Soul`) keep every value. Typed forms pull their
//! fields out of here and validate them.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Maximum length for free-text fields
pub const MAX_FIELD_LEN: usize = 120;

/// Maximum length for links and descriptions
pub const MAX_LONG_FIELD_LEN: usize = 500;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("invalid url regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+()\-. ]{7,20}$").expect("invalid phone regex"));

/// Submitted form body
#[derive(Debug, Clone, Default)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value for `key`, trimmed.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
    }

    /// Every non-blank value for `key`, in submission order.
    pub fn all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Required text field.
    pub fn required(&self, key: &'static str) -> Result<String, ValidationError> {
        let value = self.get(key).unwrap_or_default();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: key });
        }
        check_len(key, value, MAX_FIELD_LEN)?;
        Ok(value.to_owned())
    }

    /// Optional text field; blank becomes `None`.
    pub fn optional(&self, key: &'static str) -> Result<Option<String>, ValidationError> {
        match self.get(key) {
            Some(v) if !v.is_empty() => {
                check_len(key, v, MAX_LONG_FIELD_LEN)?;
                Ok(Some(v.to_owned()))
            }
            _ => Ok(None),
        }
    }

    /// Optional http(s) link.
    pub fn optional_url(&self, key: &'static str) -> Result<Option<String>, ValidationError> {
        let value = self.optional(key)?;
        if let Some(url) = &value {
            if !URL_RE.is_match(url) {
                return Err(ValidationError::InvalidFormat {
                    field: key,
                    reason: "must be an http(s) URL",
                });
            }
        }
        Ok(value)
    }

    /// Optional phone number.
    pub fn optional_phone(&self, key: &'static str) -> Result<Option<String>, ValidationError> {
        let value = self.optional(key)?;
        if let Some(phone) = &value {
            if !PHONE_RE.is_match(phone) {
                return Err(ValidationError::InvalidFormat {
                    field: key,
                    reason: "must contain 7-20 digits or separators",
                });
            }
        }
        Ok(value)
    }

    /// Checkbox: absent means unchecked.
    pub fn checkbox(&self, key: &str) -> bool {
        matches!(
            self.get(key).map(str::to_ascii_lowercase).as_deref(),
            Some("y" | "on" | "true" | "1")
        )
    }
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn fields(pairs: &[(&str, &str)]) -> FormFields {
    FormFields::new(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_are_kept() {
        let form = fields(&[("genres", "Jazz"), ("name", "x"), ("genres", "Soul"), ("genres", " ")]);
        assert_eq!(form.all("genres"), vec!["Jazz", "Soul"]);
        assert_eq!(form.get("name"), Some("x"));
    }

    #[test]
    fn required_rejects_blank() {
        let form = fields(&[("name", "   ")]);
        assert_eq!(
            form.required("name").unwrap_err(),
            ValidationError::Empty { field: "name" }
        );
        assert!(form.required("city").is_err());
    }

    #[test]
    fn required_enforces_length() {
        let long = "a".repeat(MAX_FIELD_LEN + 1);
        let form = fields(&[("name", long.as_str())]);
        assert!(matches!(
            form.required("name"),
            Err(ValidationError::TooLong { max: MAX_FIELD_LEN, .. })
        ));
    }

    #[test]
    fn urls_must_be_http() {
        let ok = fields(&[("website", "https://example.com/band")]);
        assert_eq!(
            ok.optional_url("website").unwrap().as_deref(),
            Some("https://example.com/band")
        );

        let bad = fields(&[("website", "example.com")]);
        assert!(bad.optional_url("website").is_err());

        let blank = fields(&[("website", "")]);
        assert_eq!(blank.optional_url("website").unwrap(), None);
    }

    #[test]
    fn phone_format() {
        assert!(fields(&[("phone", "326-123-5000")]).optional_phone("phone").is_ok());
        assert!(fields(&[("phone", "call me")]).optional_phone("phone").is_err());
    }

    #[test]
    fn checkbox_values() {
        assert!(fields(&[("seeking_talent", "y")]).checkbox("seeking_talent"));
        assert!(fields(&[("seeking_talent", "on")]).checkbox("seeking_talent"));
        assert!(!fields(&[("seeking_talent", "n")]).checkbox("seeking_talent"));
        assert!(!fields(&[]).checkbox("seeking_talent"));
    }
}
