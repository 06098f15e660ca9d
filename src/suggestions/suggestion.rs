//! Suggestion type and the label marker

/// Glyph shown in front of every suggested username
pub const MARKER: &str = "👤";

/// Marker plus the separating space, as it appears at the start of a label
pub const MARKER_PREFIX: &str = "👤 ";

/// A single username suggestion from a lookup response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub username: String,
}

impl Suggestion {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Text shown in the list: marker, one space, username
    pub fn label(&self) -> String {
        format!("{} {}", MARKER, self.username)
    }
}

/// Remove the leading marker from a rendered label
///
/// Text that does not start with the marker is returned as-is.
pub fn strip_marker(label: &str) -> &str {
    label.strip_prefix(MARKER_PREFIX).unwrap_or(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_label_has_marker_and_space() {
        assert_eq!(Suggestion::new("alice").label(), "👤 alice");
    }

    #[test]
    fn test_marker_prefix_matches_marker() {
        assert_eq!(MARKER_PREFIX, format!("{} ", MARKER));
    }

    #[test]
    fn test_strip_marker_removes_prefix() {
        assert_eq!(strip_marker("👤 alice"), "alice");
    }

    #[test]
    fn test_strip_marker_only_removes_leading_marker() {
        assert_eq!(strip_marker("👤 👤 bob"), "👤 bob");
    }

    #[test]
    fn test_strip_marker_without_marker_is_unchanged() {
        assert_eq!(strip_marker("carol"), "carol");
        assert_eq!(strip_marker("👤carol"), "👤carol");
        assert_eq!(strip_marker(""), "");
    }

    proptest! {
        #[test]
        fn prop_strip_marker_inverts_label(username in "\\PC{0,24}") {
            let suggestion = Suggestion::new(username.clone());
            let label = suggestion.label();
            prop_assert_eq!(strip_marker(&label), username.as_str());
        }
    }
}
