//! Participant metadata resolution
//!
//! Participants may attach an opaque JSON string when joining, carrying an
//! optional language preference and free-text interests. Resolution never
//! fails: malformed metadata is logged and treated as absent.

use serde::Deserialize;

use crate::language::Language;

/// Keys the agent understands inside participant metadata. Unknown keys
/// are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawMetadata {
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    interests: Option<String>,
}

/// Resolved per-participant preferences, accumulated across the
/// participants present in a room (last write wins).
#[derive(Debug, Clone, Default)]
pub struct ParticipantProfile {
    language: Option<Language>,
    interests: Option<String>,
}

impl ParticipantProfile {
    /// Fold one participant's metadata into the profile.
    ///
    /// `raw` is the opaque metadata string as received; `None` or empty
    /// means the participant attached nothing. A participant that sets a
    /// key overwrites any earlier participant's value for that key.
    pub fn absorb(&mut self, identity: &str, raw: Option<&str>) {
        let raw = match raw {
            Some(s) if !s.is_empty() => s,
            _ => {
                tracing::debug!(identity, "no metadata attached");
                return;
            }
        };

        match serde_json::from_str::<RawMetadata>(raw) {
            Ok(meta) => {
                if let Some(code) = meta.language.as_deref() {
                    let language = Language::from_code(code);
                    tracing::info!(identity, code, %language, "resolved language from metadata");
                    self.language = Some(language);
                }
                if let Some(interests) = meta.interests {
                    if !interests.is_empty() {
                        tracing::info!(identity, interests = %interests, "resolved interests from metadata");
                        self.interests = Some(interests);
                    }
                }
            }
            Err(e) => {
                tracing::warn!(identity, error = %e, "failed to decode participant metadata, using defaults");
            }
        }
    }

    /// Conversation language, defaulting to English.
    pub fn language(&self) -> Language {
        self.language.unwrap_or_default()
    }

    /// Free-text interests, defaulting to empty.
    pub fn interests(&self) -> &str {
        self.interests.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_it() {
        let mut profile = ParticipantProfile::default();
        profile.absorb("user-1", Some(r#"{"language": "it"}"#));
        assert_eq!(profile.language(), Language::Italian);
    }

    #[test]
    fn test_language_en_and_unknown_default() {
        let mut profile = ParticipantProfile::default();
        profile.absorb("user-1", Some(r#"{"language": "en"}"#));
        assert_eq!(profile.language(), Language::English);

        let mut profile = ParticipantProfile::default();
        profile.absorb("user-1", Some(r#"{"language": "xx"}"#));
        assert_eq!(profile.language(), Language::English);
    }

    #[test]
    fn test_malformed_metadata_defaults_without_panic() {
        let mut profile = ParticipantProfile::default();
        profile.absorb("user-1", Some("not-json"));
        assert_eq!(profile.language(), Language::English);
        assert_eq!(profile.interests(), "");
    }

    #[test]
    fn test_missing_metadata() {
        let mut profile = ParticipantProfile::default();
        profile.absorb("user-1", None);
        profile.absorb("user-2", Some(""));
        assert_eq!(profile.language(), Language::English);
    }

    #[test]
    fn test_interests_and_unknown_keys() {
        let mut profile = ParticipantProfile::default();
        profile.absorb(
            "user-1",
            Some(r#"{"interests": "hiking, jazz", "theme": "dark"}"#),
        );
        assert_eq!(profile.interests(), "hiking, jazz");
    }

    #[test]
    fn test_last_write_wins() {
        let mut profile = ParticipantProfile::default();
        profile.absorb("user-1", Some(r#"{"language": "it"}"#));
        profile.absorb("user-2", Some(r#"{"language": "en", "interests": "cinema"}"#));
        assert_eq!(profile.language(), Language::English);
        assert_eq!(profile.interests(), "cinema");
    }

    #[test]
    fn test_partial_metadata_keeps_earlier_values() {
        let mut profile = ParticipantProfile::default();
        profile.absorb("user-1", Some(r#"{"interests": "football"}"#));
        profile.absorb("user-2", Some(r#"{"language": "it"}"#));
        assert_eq!(profile.language(), Language::Italian);
        assert_eq!(profile.interests(), "football");
    }
}
