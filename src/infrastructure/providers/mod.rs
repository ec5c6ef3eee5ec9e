use async_trait::async_trait;

pub mod google_translate;
pub mod groq;
pub mod neural_speech;
pub mod translate_tts;

pub use google_translate::GoogleTranslateClient;
pub use groq::GroqClient;
pub use neural_speech::NeuralSpeechClient;
pub use translate_tts::TranslateTtsClient;

/// External machine-translation provider.
/// Single-call size limit is around 5000 characters; callers chunk above
/// that and handle per-call failures themselves.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` from `source_lang` ("auto" for detection) to
    /// `target_lang`. An empty result is treated by callers as a failure.
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, String>;
}

/// One synthesis call against the primary provider.
/// Constructed per request and discarded once the audio buffer exists.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub text: String,
    pub voice_id: String,
    pub rate: String,
    pub volume: String,
}

/// Primary (neural, streaming) speech synthesis provider.
///
/// Implementations are responsible for:
/// - Streaming the provider response and assembling one audio buffer
/// - Provider-specific request encoding (voice id, rate, volume)
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Synthesize the request into a single MP3 buffer.
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, String>;
}

/// Secondary speech synthesis provider used when the primary fails.
/// Simpler interface: bare language code plus a boolean slow-speech flag.
#[async_trait]
pub trait FallbackSpeechProvider: Send + Sync {
    async fn synthesize(&self, text: &str, language: &str, slow: bool) -> Result<Vec<u8>, String>;
}

/// LLM chat-completion provider used for document summarization.
#[async_trait]
pub trait SummarizationProvider: Send + Sync {
    /// Run one system + user prompt exchange and return the assistant text.
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, String>;
}
