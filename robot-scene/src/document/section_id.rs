use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier shared by a document section and the hotspots that target it.
///
/// The value is the bare leading numeral of the section title, so
/// `"6. Power"` is reachable as `"6"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Extract the identifier from a title of the form `"<digits>. ..."`.
    pub fn from_title(title: &str) -> Option<Self> {
        let digits_end = title
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(title.len(), |(i, _)| i);

        if digits_end == 0 || !title[digits_end..].starts_with('.') {
            return None;
        }

        Some(Self(title[..digits_end].to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_titles_yield_their_numeral() {
        assert_eq!(SectionId::from_title("6. Power"), Some(SectionId::new("6")));
        assert_eq!(SectionId::from_title("12. Appendix"), Some(SectionId::new("12")));
        assert_eq!(SectionId::from_title("3."), Some(SectionId::new("3")));
    }

    #[test]
    fn unnumbered_titles_have_no_identifier() {
        assert_eq!(SectionId::from_title("Introduction"), None);
        assert_eq!(SectionId::from_title("6 Power"), None);
        assert_eq!(SectionId::from_title(". Power"), None);
        assert_eq!(SectionId::from_title(" 6. Power"), None);
        assert_eq!(SectionId::from_title(""), None);
    }

    #[test]
    fn serialises_as_bare_string() {
        let json = serde_json::to_string(&SectionId::new("4")).unwrap();
        assert_eq!(json, "\"4\"");
    }
}
