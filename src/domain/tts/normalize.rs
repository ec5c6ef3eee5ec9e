use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static WRAP_HYPHEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\s*\n\s*").unwrap());
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*(\n[ \t]*)+").unwrap());
static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([.,!?;:])").unwrap());
static ADJACENT_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.,!?;:])\s*([.,!?;:])").unwrap());
static PUNCT_THEN_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.,!?;:])([A-Za-z])").unwrap());
static REPEATED_PERIODS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}").unwrap());

/// Rewrite raw extracted text into speech-ready form.
///
/// Extraction leaves artifacts that make synthesized speech sound broken:
/// stray line breaks mid-sentence, hyphenated line-wrap splits, irregular
/// spacing around punctuation. The passes run in a fixed order, each
/// assuming the previous has normalized its input class. De-hyphenation
/// runs before line breaks are collapsed so the `exam-\nple` split is still
/// visible to it.
///
/// Deterministic and idempotent: normalizing its own output is a no-op.
pub fn normalize_for_speech(text: &str) -> String {
    let text = SPACE_RUNS.replace_all(text, " ");

    // "exam-\nple" -> "example"
    let text = WRAP_HYPHEN.replace_all(&text, "");

    // Paragraph boundaries become sentence boundaries.
    let text = PARAGRAPH_BREAK.replace_all(&text, ". ");

    // Remaining line breaks are mid-sentence wraps.
    let text = text.replace('\n', " ");
    let text = SPACE_RUNS.replace_all(&text, " ");

    // Punctuation spacing: no space before, exactly one after.
    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "${1}");
    let text = ADJACENT_PUNCT.replace_all(&text, "${1}${2}");
    let text = PUNCT_THEN_LETTER.replace_all(&text, "${1} ${2}");

    let text = REPEATED_PERIODS.replace_all(&text, ".");

    let mut text = text.trim().to_string();
    if !text.is_empty() && !text.ends_with(['.', '!', '?']) {
        text.push('.');
    }
    text
}
