use super::SummarizationProvider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 2048;

/// Groq chat-completions client (OpenAI-compatible API).
pub struct GroqClient {
    http: Arc<reqwest::Client>,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl GroqClient {
    pub fn new(http: Arc<reqwest::Client>, api_key: String, model: String) -> Self {
        Self {
            http,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl SummarizationProvider for GroqClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            prompt_length = user_prompt.len(),
            "Calling Groq chat completions"
        );

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(GROQ_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Groq request failed");
                format!("Summarization request failed: {}", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(status = %status, "Groq returned error status");
            return Err(format!("Summarization provider returned {}", status));
        }

        let payload: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to decode Groq response");
            format!("Failed to decode summarization response: {}", e)
        })?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| "Summarization provider returned no choices".to_string())?;

        tracing::debug!(
            latency_ms = start_time.elapsed().as_millis(),
            response_length = content.len(),
            "Groq call completed"
        );

        Ok(content)
    }
}
