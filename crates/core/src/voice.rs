//! Voice selection for TTS

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Voice configuration handed to the external TTS provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceInfo {
    /// BCP-47 language code (e.g. "en-US")
    pub language_code: String,
    /// Provider voice identifier
    pub voice_name: String,
    /// Voice gender
    pub gender: VoiceGender,
}

/// Voice gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    Male,
    Female,
    Neutral,
}

impl VoiceInfo {
    /// Select the voice for a conversation language.
    ///
    /// The table mirrors the voices provisioned with the TTS account,
    /// including the gender labels as provisioned there.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Italian => Self {
                language_code: "it-IT".to_string(),
                voice_name: "it-IT-Standard-F".to_string(),
                gender: VoiceGender::Male,
            },
            Language::English => Self {
                language_code: "en-US".to_string(),
                voice_name: "en-US-Standard-I".to_string(),
                gender: VoiceGender::Male,
            },
        }
    }
}

impl Default for VoiceInfo {
    fn default() -> Self {
        Self::for_language(Language::English)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_italian_voice() {
        let voice = VoiceInfo::for_language(Language::Italian);
        assert_eq!(voice.language_code, "it-IT");
        assert_eq!(voice.voice_name, "it-IT-Standard-F");
    }

    #[test]
    fn test_english_voice_is_default() {
        let voice = VoiceInfo::for_language(Language::English);
        assert_eq!(voice, VoiceInfo::default());
        assert_eq!(voice.voice_name, "en-US-Standard-I");
    }
}
