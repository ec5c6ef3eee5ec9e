use super::FallbackSpeechProvider;
use crate::domain::translation::chunker;
use async_trait::async_trait;
use std::sync::Arc;

const TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// The endpoint rejects long queries; keep each call well under the limit.
const MAX_BATCH_SIZE: usize = 200;

/// Fallback synthesis client over the public `translate_tts` endpoint.
/// Long text is split into provider-sized batches at sentence boundaries
/// and the returned MP3 frames are merged in order.
pub struct TranslateTtsClient {
    http: Arc<reqwest::Client>,
}

impl TranslateTtsClient {
    pub fn new(http: Arc<reqwest::Client>) -> Self {
        Self { http }
    }

    fn split_into_batches(text: &str) -> Vec<String> {
        chunker::split_text(text, MAX_BATCH_SIZE)
            .into_iter()
            .map(|segment| segment.content)
            .collect()
    }

    async fn call_endpoint(&self, text: &str, language: &str, slow: bool) -> Result<Vec<u8>, String> {
        let speed = if slow { "0.24" } else { "1" };
        let url = format!(
            "{}?ie=UTF-8&client=tw-ob&q={}&tl={}&ttsspeed={}",
            TTS_ENDPOINT,
            urlencoding::encode(text),
            urlencoding::encode(language),
            speed
        );

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::error!(error = %e, "Fallback TTS request failed");
            format!("Fallback TTS request failed: {}", e)
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(status = %status, "Fallback TTS returned error status");
            return Err(format!("Fallback TTS returned {}", status));
        }

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read fallback TTS response");
            format!("Failed to read fallback TTS audio: {}", e)
        })?;

        Ok(audio.to_vec())
    }
}

#[async_trait]
impl FallbackSpeechProvider for TranslateTtsClient {
    async fn synthesize(&self, text: &str, language: &str, slow: bool) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let batches = Self::split_into_batches(text);
        tracing::info!(
            language,
            slow,
            batch_count = batches.len(),
            text_length = text.len(),
            "Starting fallback TTS synthesis"
        );

        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            tracing::debug!(batch_index = index, batch_size = batch.len(), "Synthesizing batch");
            let audio_data = self.call_endpoint(batch, language, slow).await?;
            merged_audio.extend(audio_data);
        }

        tracing::info!(
            provider = "translate_tts",
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = merged_audio.len(),
            "Fallback TTS synthesis completed"
        );

        Ok(merged_audio)
    }
}
