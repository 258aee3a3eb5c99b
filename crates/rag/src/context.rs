//! Retrieved-context assembly

use tutor_agent_config::{EMPTY_CONTEXT_PLACEHOLDER, PASSAGE_SEPARATOR};
use tutor_agent_core::Passage;

/// Join passage texts with the fixed separator, or substitute the
/// placeholder when retrieval returned nothing. The context string is
/// never empty.
pub fn join_passages(passages: &[Passage]) -> String {
    if passages.is_empty() {
        return EMPTY_CONTEXT_PLACEHOLDER.to_string();
    }

    passages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join(PASSAGE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(text: &str) -> Passage {
        Passage {
            source: "cv.md".to_string(),
            text: text.to_string(),
            score: 0.9,
        }
    }

    #[test]
    fn test_empty_yields_placeholder() {
        assert_eq!(join_passages(&[]), EMPTY_CONTEXT_PLACEHOLDER);
    }

    #[test]
    fn test_single_passage() {
        assert_eq!(join_passages(&[passage("alpha")]), "alpha");
    }

    #[test]
    fn test_passages_joined_with_separator() {
        let joined = join_passages(&[passage("alpha"), passage("beta")]);
        assert_eq!(joined, format!("alpha{}beta", PASSAGE_SEPARATOR));
    }
}
