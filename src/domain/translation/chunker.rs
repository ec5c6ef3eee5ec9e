use once_cell::sync::Lazy;
use regex::Regex;

/// Providers reject calls around 5000 characters; stay safely under that.
pub const DEFAULT_CHUNK_SIZE: usize = 4500;

static SENTENCE_TERMINATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[!?]").unwrap());
static PARAGRAPH_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// An ordered piece of the original text, sized to fit one provider call.
/// Never mutated after creation; translation produces a new string instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub content: String,
    pub ordinal: usize,
}

impl TextSegment {
    fn new(content: String, ordinal: usize) -> Self {
        Self { content, ordinal }
    }

    /// Character count of this segment
    pub fn size_hint(&self) -> usize {
        self.content.chars().count()
    }
}

/// Split text into segments of at most `max_chunk_size` characters,
/// respecting sentence boundaries where possible.
///
/// Sentence terminators (`!`, `?`, doubled newlines) are normalized to `.`
/// before splitting, so reassembly is equivalent to the input modulo that
/// boundary normalization. A single sentence over the limit is further split
/// at word boundaries; an individual word over the limit is emitted as an
/// oversized segment rather than truncated.
pub fn split_text(text: &str, max_chunk_size: usize) -> Vec<TextSegment> {
    if text.chars().count() <= max_chunk_size {
        return vec![TextSegment::new(text.to_string(), 0)];
    }

    let normalized = SENTENCE_TERMINATORS.replace_all(text, ".");
    let normalized = PARAGRAPH_BREAKS.replace_all(&normalized, ". ");

    let mut segments = Vec::new();
    let mut buffer = String::new();

    for sentence in normalized.split('.') {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        let unit = format!("{}.", sentence);
        let unit_len = unit.chars().count();

        if unit_len > max_chunk_size {
            // A single sentence too large for one call: fall back to words.
            flush(&mut buffer, &mut segments);
            split_long_sentence(&unit, max_chunk_size, &mut segments);
            continue;
        }

        if !buffer.is_empty() && buffer.chars().count() + 1 + unit_len > max_chunk_size {
            flush(&mut buffer, &mut segments);
        }
        if !buffer.is_empty() {
            buffer.push(' ');
        }
        buffer.push_str(&unit);
    }

    flush(&mut buffer, &mut segments);
    segments
}

/// Split a single oversized sentence at word boundaries. A word that alone
/// exceeds the limit is emitted unsplit - oversized, never truncated.
fn split_long_sentence(sentence: &str, max_chunk_size: usize, segments: &mut Vec<TextSegment>) {
    let mut buffer = String::new();

    for word in sentence.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chunk_size {
            flush(&mut buffer, segments);
            segments.push(TextSegment::new(word.to_string(), segments.len()));
            continue;
        }

        if !buffer.is_empty() && buffer.chars().count() + 1 + word_len > max_chunk_size {
            flush(&mut buffer, segments);
        }
        if !buffer.is_empty() {
            buffer.push(' ');
        }
        buffer.push_str(word);
    }

    flush(&mut buffer, segments);
}

fn flush(buffer: &mut String, segments: &mut Vec<TextSegment>) {
    if !buffer.is_empty() {
        let content = std::mem::take(buffer);
        segments.push(TextSegment::new(content.trim().to_string(), segments.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_text_single_segment() {
        let text = "This is a short text.";
        let segments = split_text(text, DEFAULT_CHUNK_SIZE);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].content, text);
        assert_eq!(segments[0].ordinal, 0);
    }

    #[test]
    fn test_text_exactly_at_limit_is_not_split() {
        let text = "a".repeat(DEFAULT_CHUNK_SIZE);
        let segments = split_text(&text, DEFAULT_CHUNK_SIZE);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].content, text);
    }

    #[test]
    fn test_long_text_respects_max_size() {
        let sentence = "This is a sentence that will be repeated many times. ";
        let text = sentence.repeat(200); // > 4500 chars
        let segments = split_text(&text, DEFAULT_CHUNK_SIZE);

        assert!(segments.len() > 1, "Text should be split into multiple segments");
        for segment in &segments {
            assert!(
                segment.size_hint() <= DEFAULT_CHUNK_SIZE,
                "Segment size {} exceeds limit {}",
                segment.size_hint(),
                DEFAULT_CHUNK_SIZE
            );
        }
    }

    #[test]
    fn test_ordinals_are_sequential() {
        let text = "One sentence here. ".repeat(400);
        let segments = split_text(&text, DEFAULT_CHUNK_SIZE);
        for (index, segment) in segments.iter().enumerate() {
            assert_eq!(segment.ordinal, index);
        }
    }

    #[test]
    fn test_long_text_preserves_words_in_order() {
        let sentence = "The quick brown fox jumps over the lazy dog. ";
        let text = sentence.repeat(150);
        let segments = split_text(&text, DEFAULT_CHUNK_SIZE);

        let reconstructed = segments
            .iter()
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let original_words: Vec<&str> = text.split_whitespace().collect();
        let reconstructed_words: Vec<&str> = reconstructed.split_whitespace().collect();

        assert_eq!(original_words, reconstructed_words);
    }

    #[test]
    fn test_exclamation_and_question_marks_are_boundaries() {
        let first = "Is this a question that keeps going".to_string() + &" on and on".repeat(20) + "?";
        let second = "What an answer".to_string() + &" indeed".repeat(20) + "!";
        let text = format!("{} {}", first, second).repeat(30);
        let segments = split_text(&text, 500);

        for segment in &segments {
            assert!(segment.size_hint() <= 500);
        }
    }

    #[test]
    fn test_paragraph_breaks_are_boundaries() {
        let paragraph = "a paragraph without terminal punctuation".to_string();
        let text = format!("{}\n\n", paragraph).repeat(200);
        let segments = split_text(&text, 500);

        assert!(segments.len() > 1);
        for segment in &segments {
            assert!(segment.size_hint() <= 500);
        }
    }

    #[test]
    fn test_single_sentence_over_limit_splits_at_words() {
        let text = "word ".repeat(2000); // one giant "sentence", no punctuation
        let segments = split_text(&text, 100);

        assert!(segments.len() > 1);
        for segment in &segments {
            assert!(segment.size_hint() <= 100);
        }
    }

    #[test]
    fn test_oversized_word_emitted_unsplit() {
        let giant = "x".repeat(300);
        let text = format!("short words here {} and after", giant).repeat(3);
        let segments = split_text(&text, 100);

        let oversized: Vec<_> = segments.iter().filter(|s| s.size_hint() > 100).collect();
        assert!(!oversized.is_empty(), "Oversized word should survive unsplit");
        for segment in oversized {
            assert!(segment.content.contains(&giant));
        }
    }
}
