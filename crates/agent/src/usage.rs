//! Session usage collection
//!
//! Owned by the orchestrator for the lifetime of one session; never shared
//! across sessions. Read once at shutdown.

use tutor_agent_core::{UsageDelta, UsageSummary};

/// Accumulates pipeline metrics events into a session usage summary
#[derive(Debug, Default)]
pub struct UsageCollector {
    summary: UsageSummary,
}

impl UsageCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one metrics event into the running summary
    pub fn collect(&mut self, delta: &UsageDelta) {
        self.summary.add(delta);
    }

    /// Consume the collector, yielding the final summary
    pub fn finish(self) -> UsageSummary {
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_across_turns() {
        let mut collector = UsageCollector::new();
        collector.collect(&UsageDelta {
            llm_prompt_tokens: 10,
            llm_completion_tokens: 4,
            ..Default::default()
        });
        collector.collect(&UsageDelta {
            tts_characters_count: 80,
            stt_audio_duration: 2.5,
            ..Default::default()
        });

        let summary = collector.finish();
        assert_eq!(summary.llm_prompt_tokens, 10);
        assert_eq!(summary.llm_completion_tokens, 4);
        assert_eq!(summary.tts_characters_count, 80);
        assert!((summary.stt_audio_duration - 2.5).abs() < 1e-9);
    }
}
