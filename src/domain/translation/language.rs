/// Target languages the translation provider is asked for. Anything the
/// speech pipeline can voice is accepted here as well.
const SUPPORTED_TARGETS: &[&str] = &[
    "en", "si", "ta", "hi", "es", "fr", "de", "zh-CN", "ja", "ko", "ar", "ru", "pt", "it", "nl",
    "tr",
];

/// Resolve a user-supplied language code or name to a provider code.
/// Returns `None` for codes the system does not know about.
fn resolve(code: &str) -> Option<&'static str> {
    let lowered = code.trim().to_lowercase();

    // Common aliases and names first
    let aliased = match lowered.as_str() {
        "english" => "en",
        "sinhala" | "sinhalese" => "si",
        "tamil" => "ta",
        "hindi" => "hi",
        "spanish" => "es",
        "french" => "fr",
        "german" => "de",
        "chinese" | "zh" | "zh-cn" | "zh_cn" => "zh-CN",
        "japanese" => "ja",
        "korean" => "ko",
        "arabic" => "ar",
        "russian" => "ru",
        "portuguese" | "pt-br" => "pt",
        "italian" => "it",
        "dutch" => "nl",
        "turkish" => "tr",
        other => other,
    };

    SUPPORTED_TARGETS
        .iter()
        .find(|&&supported| supported.eq_ignore_ascii_case(aliased))
        .copied()
}

/// Normalize a target-language code, defaulting to English for unknown codes.
/// The fallback is a configuration substitution, logged and never raised.
pub fn normalize_target_language(code: &str) -> &'static str {
    match resolve(code) {
        Some(normalized) => normalized,
        None => {
            tracing::warn!(
                requested = %code,
                "Unknown target language, falling back to English"
            );
            "en"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code_passes_through() {
        assert_eq!(normalize_target_language("fr"), "fr");
        assert_eq!(normalize_target_language("si"), "si");
    }

    #[test]
    fn test_language_name_alias() {
        assert_eq!(normalize_target_language("Spanish"), "es");
        assert_eq!(normalize_target_language("german"), "de");
    }

    #[test]
    fn test_chinese_variants_normalize() {
        assert_eq!(normalize_target_language("zh"), "zh-CN");
        assert_eq!(normalize_target_language("zh-cn"), "zh-CN");
        assert_eq!(normalize_target_language("zh-CN"), "zh-CN");
    }

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        assert_eq!(normalize_target_language("xx"), "en");
        assert_eq!(normalize_target_language(""), "en");
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(normalize_target_language("  FR "), "fr");
    }
}
