use super::{SpeechProvider, SpeechRequest};
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use serde::Serialize;
use std::sync::Arc;

/// Primary neural synthesis client. The gateway streams MP3 audio back in
/// chunks; the whole response is assembled into one buffer before returning.
pub struct NeuralSpeechClient {
    http: Arc<reqwest::Client>,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct GatewayRequest<'a> {
    text: &'a str,
    voice: &'a str,
    rate: &'a str,
    volume: &'a str,
    output_format: &'a str,
}

impl NeuralSpeechClient {
    pub fn new(http: Arc<reqwest::Client>, endpoint: String) -> Self {
        Self { http, endpoint }
    }
}

#[async_trait]
impl SpeechProvider for NeuralSpeechClient {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            voice = %request.voice_id,
            rate = %request.rate,
            volume = %request.volume,
            text_length = request.text.len(),
            text_preview = %request.text.chars().take(80).collect::<String>(),
            "Calling neural speech gateway"
        );

        let body = GatewayRequest {
            text: &request.text,
            voice: &request.voice_id,
            rate: &request.rate,
            volume: &request.volume,
            output_format: "audio-24khz-48kbitrate-mono-mp3",
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Neural speech gateway request failed");
                format!("Speech gateway request failed: {}", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(status = %status, "Neural speech gateway returned error status");
            return Err(format!("Speech gateway returned {}", status));
        }

        let audio = collect_audio_stream(response.bytes_stream()).await?;
        if audio.is_empty() {
            return Err("Speech gateway returned no audio".to_string());
        }

        tracing::info!(
            provider = "neural",
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio.len(),
            "Speech synthesis stream collected"
        );

        Ok(audio)
    }
}

/// Assemble a chunk stream into one audio buffer.
///
/// Pure with respect to the stream source: no runtime re-entry, the caller's
/// task simply suspends on each incoming chunk and resumes to append it.
pub async fn collect_audio_stream<S, E>(stream: S) -> Result<Vec<u8>, String>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: std::fmt::Display,
{
    let mut stream = std::pin::pin!(stream);
    let mut buffer = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| format!("Audio stream error: {}", e))?;
        buffer.extend_from_slice(&chunk);
    }
    Ok(buffer)
}
