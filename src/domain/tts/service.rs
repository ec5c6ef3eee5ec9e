use super::error::TtsServiceError;
use super::normalize::normalize_for_speech;
use super::voice::{fallback_language, is_slow_speed, rate_adjustment, resolve_voice, VoiceGender};
use crate::infrastructure::providers::{FallbackSpeechProvider, SpeechProvider, SpeechRequest};
use std::sync::Arc;

const DEFAULT_VOLUME: &str = "+0%";

/// Speech synthesis orchestration: text normalization, voice selection,
/// and primary-to-fallback degradation.
///
/// The primary (neural, streaming) provider is tried exactly once; any
/// failure degrades to the secondary provider with its own language
/// validation. Only a secondary failure, or empty input, is fatal.
pub struct TtsService {
    primary: Arc<dyn SpeechProvider>,
    fallback: Arc<dyn FallbackSpeechProvider>,
}

impl TtsService {
    pub fn new(primary: Arc<dyn SpeechProvider>, fallback: Arc<dyn FallbackSpeechProvider>) -> Self {
        Self { primary, fallback }
    }

    pub async fn synthesize(
        &self,
        text: &str,
        voice_type: &str,
        speed: f32,
        language: &str,
    ) -> Result<Vec<u8>, TtsServiceError> {
        let normalized = normalize_for_speech(text);
        if normalized.is_empty() {
            return Err(TtsServiceError::Invalid("Text cannot be empty".to_string()));
        }

        let gender = VoiceGender::parse(voice_type);
        let voice_id = resolve_voice(language, gender);
        let rate = rate_adjustment(speed);

        tracing::info!(
            language = %language,
            gender = %gender,
            voice = voice_id,
            rate = %rate,
            original_length = text.len(),
            normalized_length = normalized.len(),
            "Starting speech synthesis"
        );

        let request = SpeechRequest {
            text: normalized.clone(),
            voice_id: voice_id.to_string(),
            rate,
            volume: DEFAULT_VOLUME.to_string(),
        };

        match self.primary.synthesize(&request).await {
            Ok(audio) => {
                tracing::info!(
                    provider = "primary",
                    audio_size = audio.len(),
                    "Speech synthesis completed"
                );
                Ok(audio)
            }
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    "Primary synthesis provider failed, degrading to fallback"
                );
                self.synthesize_fallback(&normalized, language, speed).await
            }
        }
    }

    /// One-shot fallback synthesis. Text is already normalized; only the
    /// language needs re-validation against the fallback provider's set.
    async fn synthesize_fallback(
        &self,
        normalized: &str,
        language: &str,
        speed: f32,
    ) -> Result<Vec<u8>, TtsServiceError> {
        let fallback_lang = fallback_language(language);
        let slow = is_slow_speed(speed);

        let audio = self
            .fallback
            .synthesize(normalized, fallback_lang, slow)
            .await
            .map_err(TtsServiceError::Dependency)?;

        tracing::info!(
            provider = "fallback",
            language = fallback_lang,
            slow,
            audio_size = audio.len(),
            "Speech synthesis completed"
        );

        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct RecordingPrimary {
        calls: AtomicUsize,
        last_request: Mutex<Option<SpeechRequest>>,
        fail: bool,
    }

    impl RecordingPrimary {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
                fail,
            }
        }
    }

    #[async_trait]
    impl SpeechProvider for RecordingPrimary {
        async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            if self.fail {
                Err("stream disconnected".to_string())
            } else {
                Ok(vec![1, 2, 3])
            }
        }
    }

    struct RecordingFallback {
        calls: AtomicUsize,
        last_call: Mutex<Option<(String, String, bool)>>,
        fail: bool,
    }

    impl RecordingFallback {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_call: Mutex::new(None),
                fail,
            }
        }
    }

    #[async_trait]
    impl FallbackSpeechProvider for RecordingFallback {
        async fn synthesize(
            &self,
            text: &str,
            language: &str,
            slow: bool,
        ) -> Result<Vec<u8>, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_call.lock().unwrap() =
                Some((text.to_string(), language.to_string(), slow));
            if self.fail {
                Err("fallback unavailable".to_string())
            } else {
                Ok(vec![9, 9])
            }
        }
    }

    #[tokio::test]
    async fn test_primary_success_returns_audio_without_fallback() {
        let primary = Arc::new(RecordingPrimary::new(false));
        let fallback = Arc::new(RecordingFallback::new(false));
        let service = TtsService::new(primary.clone(), fallback.clone());

        let audio = service.synthesize("hello world", "female", 1.0, "en").await.unwrap();

        assert_eq!(audio, vec![1, 2, 3]);
        assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 0);

        let request = primary.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.text, "hello world.");
        assert_eq!(request.voice_id, "en-US-JennyNeural");
        assert_eq!(request.rate, "+0%");
    }

    #[tokio::test]
    async fn test_primary_failure_degrades_to_fallback() {
        let primary = Arc::new(RecordingPrimary::new(true));
        let fallback = Arc::new(RecordingFallback::new(false));
        let service = TtsService::new(primary.clone(), fallback.clone());

        let audio = service
            .synthesize("hello world", "male", 0.5, "zh-CN")
            .await
            .unwrap();

        assert_eq!(audio, vec![9, 9]);
        assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 1);

        let (text, language, slow) = fallback.last_call.lock().unwrap().clone().unwrap();
        assert_eq!(text, "hello world.", "fallback must reuse normalized text");
        assert_eq!(language, "zh");
        assert!(slow, "speed below 0.9 maps to the slow flag");
    }

    #[tokio::test]
    async fn test_both_providers_failing_is_fatal() {
        let primary = Arc::new(RecordingPrimary::new(true));
        let fallback = Arc::new(RecordingFallback::new(true));
        let service = TtsService::new(primary, fallback);

        let result = service.synthesize("hello", "female", 1.0, "en").await;

        assert!(matches!(result, Err(TtsServiceError::Dependency(_))));
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected_before_any_provider_call() {
        let primary = Arc::new(RecordingPrimary::new(false));
        let fallback = Arc::new(RecordingFallback::new(false));
        let service = TtsService::new(primary.clone(), fallback.clone());

        let result = service.synthesize("  \n ", "female", 1.0, "en").await;

        assert!(matches!(result, Err(TtsServiceError::Invalid(_))));
        assert_eq!(primary.calls.load(Ordering::SeqCst), 0);
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_messy_text_is_normalized_before_synthesis() {
        let primary = Arc::new(RecordingPrimary::new(false));
        let fallback = Arc::new(RecordingFallback::new(false));
        let service = TtsService::new(primary.clone(), fallback);

        service
            .synthesize("hi my\nname\nis sam", "female", 1.0, "en")
            .await
            .unwrap();

        let request = primary.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.text, "hi my name is sam.");
    }
}
