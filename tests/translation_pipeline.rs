use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use docvoice_backend::domain::translation::{
    split_text, TranslationService, DEFAULT_CHUNK_SIZE,
};
use docvoice_backend::infrastructure::providers::TranslationProvider;

/// Provider that fails a fixed number of times before recovering.
struct FlakyProvider {
    calls: AtomicUsize,
    failures_before_success: usize,
}

impl FlakyProvider {
    fn new(failures_before_success: usize) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failures_before_success,
        }
    }
}

#[async_trait]
impl TranslationProvider for FlakyProvider {
    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<String, String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures_before_success {
            Err("temporarily unavailable".to_string())
        } else {
            Ok(format!("[translated] {}", text))
        }
    }
}

struct UppercaseProvider;

#[async_trait]
impl TranslationProvider for UppercaseProvider {
    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<String, String> {
        Ok(text.to_uppercase())
    }
}

#[tokio::test(start_paused = true)]
async fn flaky_provider_recovers_within_retry_limit() {
    let provider = Arc::new(FlakyProvider::new(2));
    let service = TranslationService::new(provider.clone());

    let report = service.translate("hello there", "fr").await.unwrap();

    assert_eq!(report.translated_text, "[translated] hello there");
    assert_eq!(report.successful_segments, 1);
    assert_eq!(report.failed_segments, 0);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn document_sized_text_is_chunked_translated_and_reassembled() {
    let sentence = "The committee reviewed the annual report in detail. ";
    let text = sentence.repeat(200);
    assert!(text.chars().count() > DEFAULT_CHUNK_SIZE);

    let service = TranslationService::new(Arc::new(UppercaseProvider));
    let report = service.translate(&text, "de").await.unwrap();

    assert_eq!(report.failed_segments, 0);
    assert!(report.successful_segments > 1);

    // Every word survives, in order, uppercased.
    let expected_words: Vec<String> = text
        .split_whitespace()
        .map(|w| w.to_uppercase())
        .collect();
    let got_words: Vec<String> = report
        .translated_text
        .split_whitespace()
        .map(|w| w.to_string())
        .collect();
    assert_eq!(expected_words, got_words);
}

#[tokio::test(start_paused = true)]
async fn unreachable_provider_degrades_to_full_original_text() {
    struct DeadProvider;

    #[async_trait]
    impl TranslationProvider for DeadProvider {
        async fn translate(
            &self,
            _text: &str,
            _source_lang: &str,
            _target_lang: &str,
        ) -> Result<String, String> {
            Err("connection refused".to_string())
        }
    }

    let sentence = "Nothing will be translated here. ";
    let text = sentence.repeat(300);

    let service = TranslationService::with_settings(
        Arc::new(DeadProvider),
        500,
        3,
        Duration::from_secs(1),
        Duration::from_millis(800),
    );
    let report = service.translate(&text, "es").await.unwrap();

    assert_eq!(report.successful_segments, 0);
    assert!(report.failed_segments > 1);

    // Degraded output is complete, never truncated.
    let original_words: Vec<&str> = text.split_whitespace().collect();
    let degraded_words: Vec<&str> = report.translated_text.split_whitespace().collect();
    assert_eq!(original_words, degraded_words);
}

#[tokio::test(start_paused = true)]
async fn inter_segment_delay_applies_between_segments_but_not_after_the_last() {
    let sentence = "Short sentence to repeat for chunking. ";
    let text = sentence.repeat(40);

    let service = TranslationService::with_settings(
        Arc::new(UppercaseProvider),
        200,
        3,
        Duration::from_secs(1),
        Duration::from_millis(800),
    );

    let start = tokio::time::Instant::now();
    let report = service.translate(&text, "de").await.unwrap();

    let segments = report.successful_segments as u32;
    assert!(segments > 1);

    // Every sleep comes from the inter-segment pacing; the final segment
    // must not add one.
    assert_eq!(
        start.elapsed(),
        Duration::from_millis(800) * (segments - 1)
    );
}

#[tokio::test(start_paused = true)]
async fn retry_backoff_grows_linearly_between_attempts() {
    struct RefusingProvider;

    #[async_trait]
    impl TranslationProvider for RefusingProvider {
        async fn translate(
            &self,
            _text: &str,
            _source_lang: &str,
            _target_lang: &str,
        ) -> Result<String, String> {
            Err("connection refused".to_string())
        }
    }

    let service = TranslationService::new(Arc::new(RefusingProvider));

    let start = tokio::time::Instant::now();
    let report = service.translate("short text", "fr").await.unwrap();

    assert_eq!(report.failed_segments, 1);
    // Three attempts, backoff of 1s then 2s between them, none after the last.
    assert_eq!(start.elapsed(), Duration::from_secs(3));
}

#[test]
fn chunker_properties_hold_for_document_sized_text() {
    let text = "Some reasonably long sentence to repeat many times over! ".repeat(300);
    let segments = split_text(&text, DEFAULT_CHUNK_SIZE);

    assert!(segments.len() > 1);
    for (index, segment) in segments.iter().enumerate() {
        assert_eq!(segment.ordinal, index);
        assert!(segment.size_hint() <= DEFAULT_CHUNK_SIZE);
    }

    let rejoined = segments
        .iter()
        .map(|s| s.content.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    // Boundary normalization maps "!" to "."; words are otherwise intact.
    let original_words = text.replace('!', ".");
    let original_words: Vec<&str> = original_words.split_whitespace().collect();
    let rejoined_words: Vec<&str> = rejoined.split_whitespace().collect();
    assert_eq!(original_words, rejoined_words);
}
