//! Prompt composer
//!
//! Pure string substitution into the instruction template. The composed
//! output replaces the session's active instruction set; it must always
//! carry a non-empty context field.

use tutor_agent_config::EMPTY_CONTEXT_PLACEHOLDER;
use tutor_agent_core::Language;

/// Composes instruction text from the template, the conversation language,
/// the participant's interests, and the current retrieved context.
#[derive(Debug, Clone)]
pub struct PromptComposer {
    template: String,
    language: Language,
    interests: String,
}

impl PromptComposer {
    pub fn new(template: impl Into<String>, language: Language, interests: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            language,
            interests: interests.into(),
        }
    }

    /// Replace the conversation language (a later participant set it)
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Replace the interests text
    pub fn set_interests(&mut self, interests: impl Into<String>) {
        self.interests = interests.into();
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Substitute the template. Pure and idempotent; an empty context is
    /// replaced by the fixed placeholder so the context field never ends
    /// up blank.
    pub fn compose(&self, rag_context: &str) -> String {
        let context = if rag_context.is_empty() {
            EMPTY_CONTEXT_PLACEHOLDER
        } else {
            rag_context
        };

        self.template
            .replace("{language}", self.language.display_name())
            .replace("{interests}", &self.interests)
            .replace("{rag_context}", context)
    }

    /// Initial instructions, before anything has been retrieved
    pub fn compose_initial(&self) -> String {
        self.compose(EMPTY_CONTEXT_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_agent_config::SYSTEM_PROMPT_TEMPLATE;

    #[test]
    fn test_substitutes_language_and_context() {
        let composer = PromptComposer::new(SYSTEM_PROMPT_TEMPLATE, Language::Italian, "cinema");
        let output = composer.compose("Giacomo built Mavena.");
        assert!(output.contains("Italiano"));
        assert!(output.contains("Giacomo built Mavena."));
        assert!(output.contains("cinema"));
        assert!(!output.contains("{language}"));
        assert!(!output.contains("{rag_context}"));
        assert!(!output.contains("{interests}"));
    }

    #[test]
    fn test_idempotent_for_same_inputs() {
        let composer = PromptComposer::new(SYSTEM_PROMPT_TEMPLATE, Language::English, "");
        assert_eq!(composer.compose("ctx"), composer.compose("ctx"));
    }

    #[test]
    fn test_empty_context_uses_placeholder() {
        let composer = PromptComposer::new("Context: {rag_context}", Language::English, "");
        assert_eq!(
            composer.compose(""),
            format!("Context: {}", EMPTY_CONTEXT_PLACEHOLDER)
        );
        assert_eq!(composer.compose_initial(), composer.compose(""));
    }

    #[test]
    fn test_set_language_changes_output() {
        let mut composer = PromptComposer::new("Respond in {language}.", Language::English, "");
        assert_eq!(composer.compose("x"), "Respond in English.");
        composer.set_language(Language::Italian);
        assert_eq!(composer.compose("x"), "Respond in Italiano.");
    }
}
