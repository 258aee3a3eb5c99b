//! Language definitions
//!
//! The agent currently serves English and Italian conversations. English is
//! the default whenever the participant does not state a preference (or
//! states one we do not recognize).

use serde::{Deserialize, Serialize};

/// Supported conversation languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Italian,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Italian => "it",
        }
    }

    /// Name of the language as spelled inside the instruction template
    /// (in the language itself, so the model mirrors it).
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Italian => "Italiano",
        }
    }

    /// Parse a language code, case-insensitively.
    ///
    /// Only an exact match selects Italian; padded, unrecognized, or
    /// empty codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "it" => Self::Italian,
            _ => Self::English,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_italian() {
        assert_eq!(Language::from_code("it"), Language::Italian);
        assert_eq!(Language::from_code("IT"), Language::Italian);
        assert_eq!(Language::from_code("It"), Language::Italian);
    }

    #[test]
    fn test_from_code_defaults_to_english() {
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code(""), Language::English);
        assert_eq!(Language::from_code("fr"), Language::English);
        assert_eq!(Language::from_code("not-a-code"), Language::English);
    }

    #[test]
    fn test_padded_codes_default_to_english() {
        assert_eq!(Language::from_code("IT "), Language::English);
        assert_eq!(Language::from_code(" it "), Language::English);
        assert_eq!(Language::from_code("it\n"), Language::English);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Language::Italian.display_name(), "Italiano");
        assert_eq!(Language::English.display_name(), "English");
    }
}
