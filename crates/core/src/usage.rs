//! Usage counters and cost estimation
//!
//! The external pipeline reports per-turn usage deltas (tokens, synthesized
//! characters, recognized audio seconds). These accumulate into a
//! `UsageSummary`, priced once at shutdown.

use serde::{Deserialize, Serialize};

/// Google TTS standard voices, USD per 1M characters
pub const TTS_PRICE_PER_MILLION_CHARS: f64 = 4.00;
/// Deepgram Nova-3 STT, USD per minute of audio
pub const STT_PRICE_PER_MINUTE: f64 = 0.0045;
/// GPT-4o-mini input, USD per 1M tokens
pub const LLM_INPUT_PRICE_PER_MILLION_TOKENS: f64 = 0.15;
/// GPT-4o-mini cached input, USD per 1M tokens
pub const LLM_CACHED_PRICE_PER_MILLION_TOKENS: f64 = 0.075;
/// GPT-4o-mini output, USD per 1M tokens
pub const LLM_OUTPUT_PRICE_PER_MILLION_TOKENS: f64 = 0.60;

/// One pipeline metrics event, as reported by the external session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageDelta {
    #[serde(default)]
    pub llm_prompt_tokens: u64,
    #[serde(default)]
    pub llm_prompt_cached_tokens: u64,
    #[serde(default)]
    pub llm_completion_tokens: u64,
    #[serde(default)]
    pub tts_characters_count: u64,
    /// Seconds of audio synthesized
    #[serde(default)]
    pub tts_audio_duration: f64,
    /// Seconds of audio recognized
    #[serde(default)]
    pub stt_audio_duration: f64,
}

/// Accumulated session usage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub llm_prompt_tokens: u64,
    pub llm_prompt_cached_tokens: u64,
    pub llm_completion_tokens: u64,
    pub tts_characters_count: u64,
    /// Seconds of audio synthesized (unpriced, kept for reporting)
    pub tts_audio_duration: f64,
    /// Seconds of audio recognized
    pub stt_audio_duration: f64,
}

/// Per-service cost estimate in USD
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub llm: f64,
    pub tts: f64,
    pub stt: f64,
    pub total: f64,
}

impl UsageSummary {
    /// Fold a metrics event into the summary
    pub fn add(&mut self, delta: &UsageDelta) {
        self.llm_prompt_tokens += delta.llm_prompt_tokens;
        self.llm_prompt_cached_tokens += delta.llm_prompt_cached_tokens;
        self.llm_completion_tokens += delta.llm_completion_tokens;
        self.tts_characters_count += delta.tts_characters_count;
        self.tts_audio_duration += delta.tts_audio_duration;
        self.stt_audio_duration += delta.stt_audio_duration;
    }

    /// Price the accumulated counters. Pure; zero counters yield zero cost.
    pub fn cost(&self) -> CostBreakdown {
        let llm = (self.llm_prompt_tokens as f64 / 1_000_000.0) * LLM_INPUT_PRICE_PER_MILLION_TOKENS
            + (self.llm_completion_tokens as f64 / 1_000_000.0)
                * LLM_OUTPUT_PRICE_PER_MILLION_TOKENS
            + (self.llm_prompt_cached_tokens as f64 / 1_000_000.0)
                * LLM_CACHED_PRICE_PER_MILLION_TOKENS;
        let tts = (self.tts_characters_count as f64 / 1_000_000.0) * TTS_PRICE_PER_MILLION_CHARS;
        let stt = (self.stt_audio_duration / 60.0) * STT_PRICE_PER_MINUTE;

        CostBreakdown {
            llm,
            tts,
            stt,
            total: llm + tts + stt,
        }
    }
}

impl std::fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LLM=${:.6}, TTS=${:.6}, STT=${:.6}, Total=${:.6}",
            self.llm, self.tts, self.stt, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_counters_cost_zero() {
        let cost = UsageSummary::default().cost();
        assert_eq!(cost.llm, 0.0);
        assert_eq!(cost.tts, 0.0);
        assert_eq!(cost.stt, 0.0);
        assert_eq!(cost.total, 0.0);
    }

    #[test]
    fn test_cost_formula() {
        let summary = UsageSummary {
            llm_prompt_tokens: 1_000_000,
            llm_prompt_cached_tokens: 2_000_000,
            llm_completion_tokens: 1_000_000,
            tts_characters_count: 500_000,
            tts_audio_duration: 12.0,
            stt_audio_duration: 120.0,
        };
        let cost = summary.cost();
        assert!((cost.llm - (0.15 + 0.15 + 0.60)).abs() < 1e-9);
        assert!((cost.tts - 2.0).abs() < 1e-9);
        assert!((cost.stt - 0.009).abs() < 1e-9);
        assert!((cost.total - (cost.llm + cost.tts + cost.stt)).abs() < 1e-9);
    }

    #[test]
    fn test_accumulation() {
        let mut summary = UsageSummary::default();
        summary.add(&UsageDelta {
            llm_prompt_tokens: 100,
            stt_audio_duration: 1.5,
            ..Default::default()
        });
        summary.add(&UsageDelta {
            llm_prompt_tokens: 50,
            llm_completion_tokens: 25,
            ..Default::default()
        });
        assert_eq!(summary.llm_prompt_tokens, 150);
        assert_eq!(summary.llm_completion_tokens, 25);
        assert!((summary.stt_audio_duration - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_display_formatting() {
        let text = CostBreakdown::default().to_string();
        assert_eq!(text, "LLM=$0.000000, TTS=$0.000000, STT=$0.000000, Total=$0.000000");
    }
}
