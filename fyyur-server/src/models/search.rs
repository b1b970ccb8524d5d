//! Name search
//!
//! Search is a case-insensitive substring match on the name, evaluated by
//! the database through `ILIKE` with the pattern built here.

/// Normalised search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Surrounding whitespace is ignored. An empty term matches every name.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `ILIKE` pattern with `%`, `_` and `\` escaped so they match literally.
    ///
    /// Use with `ESCAPE '\'`.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

/// Search response: matches plus their count
#[derive(Debug, Clone)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for SearchResults<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_term_matches_everything() {
        assert_eq!(SearchTerm::new("   ").like_pattern(), "%%");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(SearchTerm::new("50%_off\\").like_pattern(), "%50\\%\\_off\\\\%");
        assert_eq!(SearchTerm::new("  hop ").like_pattern(), "%hop%");
    }

    #[test]
    fn results_count_tracks_data() {
        let results = SearchResults::from(vec![1, 2, 3]);
        assert_eq!(results.count, 3);
    }
}
