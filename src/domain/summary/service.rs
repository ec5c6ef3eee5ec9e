use super::error::SummaryServiceError;
use super::format::markdown_to_html;
use crate::infrastructure::providers::SummarizationProvider;
use std::sync::Arc;

/// Documents are truncated to this many characters before summarization.
const MAX_SUMMARY_INPUT: usize = 20_000;

const SYSTEM_PROMPT: &str = "You are an expert at summarizing documents.\n\n\
Format your summaries with:\n\
- **Main Topics** in bold (use **text**)\n\
- *Sub-points* in italic (use *text*)\n\
- Clear structure with headings (use # ## ###)\n\
- Bullet points for lists (use - or *)\n\n\
Provide clear, well-organized summaries that are easy to scan.";

#[derive(Debug, Clone)]
pub struct SummaryResult {
    /// Original markdown from the model
    pub markdown: String,
    /// Styled HTML for the viewer
    pub html: String,
}

/// Document summarization: a single prompt/response call against the LLM
/// provider, plus markdown-to-presentation formatting. One try, no retry;
/// a provider failure is reported to the caller.
pub struct SummaryService {
    provider: Arc<dyn SummarizationProvider>,
}

impl SummaryService {
    pub fn new(provider: Arc<dyn SummarizationProvider>) -> Self {
        Self { provider }
    }

    pub async fn summarize(&self, text: &str) -> Result<SummaryResult, SummaryServiceError> {
        if text.trim().is_empty() {
            return Err(SummaryServiceError::Invalid(
                "No text provided".to_string(),
            ));
        }

        let truncated = truncate_chars(text, MAX_SUMMARY_INPUT);

        tracing::info!(
            original_length = text.len(),
            truncated_length = truncated.len(),
            "Summarizing document"
        );

        let user_prompt = format!(
            "Summarize this document with clear formatting:\n\n{}",
            truncated
        );

        let markdown = self
            .provider
            .complete(SYSTEM_PROMPT, &user_prompt)
            .await
            .map_err(SummaryServiceError::Dependency)?;

        let html = markdown_to_html(&markdown);

        tracing::info!(summary_length = markdown.len(), "Summary generated");

        Ok(SummaryResult { markdown, html })
    }
}

/// Truncate to a character count without splitting a UTF-8 boundary.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}
