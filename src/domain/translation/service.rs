use super::chunker::{self, DEFAULT_CHUNK_SIZE};
use super::error::TranslationServiceError;
use super::language::normalize_target_language;
use crate::infrastructure::providers::TranslationProvider;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_secs(1);
const SEGMENT_DELAY: Duration = Duration::from_millis(800);

/// Result of translating one segment. `succeeded` is true only when the
/// provider produced non-empty output that differs from the input; an
/// unchanged translation is indistinguishable from a silent failure.
#[derive(Debug, Clone)]
pub struct SegmentOutcome {
    pub content: String,
    pub succeeded: bool,
    pub attempts_used: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationReport {
    pub translated_text: String,
    pub successful_segments: usize,
    pub failed_segments: usize,
}

/// End-to-end translation of arbitrary-length text against a provider with
/// a strict per-call size limit and unreliable availability.
///
/// Per-segment provider failures are absorbed: after retries are exhausted
/// the segment degrades to its untranslated original. Only a total inability
/// to proceed surfaces as an error.
pub struct TranslationService {
    provider: Arc<dyn TranslationProvider>,
    max_chunk_size: usize,
    max_attempts: u32,
    retry_backoff: Duration,
    segment_delay: Duration,
}

impl TranslationService {
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            provider,
            max_chunk_size: DEFAULT_CHUNK_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_backoff: RETRY_BACKOFF,
            segment_delay: SEGMENT_DELAY,
        }
    }

    /// Override chunking and retry settings. Used by tests and callers that
    /// need a different rate-limiting policy.
    pub fn with_settings(
        provider: Arc<dyn TranslationProvider>,
        max_chunk_size: usize,
        max_attempts: u32,
        retry_backoff: Duration,
        segment_delay: Duration,
    ) -> Self {
        Self {
            provider,
            max_chunk_size,
            max_attempts,
            retry_backoff,
            segment_delay,
        }
    }

    pub async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<TranslationReport, TranslationServiceError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(TranslationReport {
                translated_text: String::new(),
                successful_segments: 0,
                failed_segments: 0,
            });
        }

        let target = normalize_target_language(target_lang);

        // Direct strategy when the whole text fits in one provider call.
        if trimmed.chars().count() <= self.max_chunk_size {
            tracing::info!(
                strategy = "direct",
                target = target,
                text_length = trimmed.len(),
                "Starting translation"
            );
            let outcome = self.translate_segment(trimmed, target).await;
            let (successful_segments, failed_segments) =
                if outcome.succeeded { (1, 0) } else { (0, 1) };
            return Ok(TranslationReport {
                translated_text: outcome.content,
                successful_segments,
                failed_segments,
            });
        }

        let segments = chunker::split_text(trimmed, self.max_chunk_size);
        let total = segments.len();
        tracing::info!(
            strategy = "chunked",
            target = target,
            text_length = trimmed.len(),
            segment_count = total,
            "Starting translation"
        );

        let mut translated = Vec::with_capacity(total);
        let mut successful_segments = 0;
        let mut failed_segments = 0;

        for segment in &segments {
            let outcome = self.translate_segment(&segment.content, target).await;

            tracing::debug!(
                ordinal = segment.ordinal,
                segment_size = segment.size_hint(),
                succeeded = outcome.succeeded,
                attempts = outcome.attempts_used,
                "Segment translated"
            );

            if outcome.succeeded {
                successful_segments += 1;
            } else {
                failed_segments += 1;
            }
            translated.push(outcome.content);

            // Inter-segment delay to respect provider rate limits,
            // skipped after the final segment.
            if segment.ordinal + 1 < total {
                tokio::time::sleep(self.segment_delay).await;
            }
        }

        tracing::info!(
            segment_count = total,
            successful_segments,
            failed_segments,
            "Translation completed"
        );

        // Outcomes joined strictly in ordinal order.
        Ok(TranslationReport {
            translated_text: translated.join(" "),
            successful_segments,
            failed_segments,
        })
    }

    /// Translate one segment with bounded retries and linear backoff.
    /// Never fails the pipeline: after exhausting attempts the original
    /// content is returned as a designed degradation.
    async fn translate_segment(&self, content: &str, target: &str) -> SegmentOutcome {
        for attempt in 1..=self.max_attempts {
            match self.provider.translate(content, "auto", target).await {
                Ok(output) if !output.trim().is_empty() => {
                    let succeeded = output != content;
                    if !succeeded {
                        tracing::debug!(
                            attempt,
                            "Provider returned unchanged text, counting as failed"
                        );
                    }
                    return SegmentOutcome {
                        content: output,
                        succeeded,
                        attempts_used: attempt,
                    };
                }
                Ok(_) => {
                    tracing::warn!(attempt, "Provider returned empty translation");
                }
                Err(error) => {
                    tracing::warn!(attempt, error = %error, "Translation attempt failed");
                }
            }

            if attempt < self.max_attempts {
                tokio::time::sleep(self.retry_backoff * attempt).await;
            }
        }

        tracing::warn!(
            attempts = self.max_attempts,
            segment_size = content.len(),
            "Translation retries exhausted, keeping original text"
        );

        SegmentOutcome {
            content: content.to_string(),
            succeeded: false,
            attempts_used: self.max_attempts,
        }
    }
}
