use serde::{Deserialize, Serialize};

/// Voice gender requested by the client. Unrecognized values default to
/// female, matching the table's broader coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    Male,
    Female,
}

impl VoiceGender {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "male" => VoiceGender::Male,
            _ => VoiceGender::Female,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceGender::Male => "male",
            VoiceGender::Female => "female",
        }
    }
}

impl std::fmt::Display for VoiceGender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Languages the primary neural provider has voices for.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "si", "ta", "hi", "es", "fr", "de", "zh-CN", "ja", "ko", "ar", "ru", "pt", "it", "nl",
    "tr",
];

/// Bare ISO codes the fallback provider accepts. Region subtags are stripped
/// before the membership check (`zh-CN` -> `zh`).
const FALLBACK_LANGUAGES: &[&str] = &[
    "en", "si", "ta", "hi", "es", "fr", "de", "zh", "ja", "ko", "ar", "ru", "pt", "it", "nl", "tr",
];

/// Look up the neural voice id for a `(gender, language)` pair.
/// Absent languages fall back to the `en` entry for that gender.
pub fn resolve_voice(language: &str, gender: VoiceGender) -> &'static str {
    match gender {
        VoiceGender::Male => male_voice(language).unwrap_or_else(|| male_voice("en").unwrap()),
        VoiceGender::Female => {
            female_voice(language).unwrap_or_else(|| female_voice("en").unwrap())
        }
    }
}

fn male_voice(language: &str) -> Option<&'static str> {
    let voice = match language {
        "en" => "en-US-GuyNeural",
        "si" => "si-LK-SameeraNeural",
        "ta" => "ta-IN-ValluvarNeural",
        "hi" => "hi-IN-MadhurNeural",
        "es" => "es-ES-AlvaroNeural",
        "fr" => "fr-FR-HenriNeural",
        "de" => "de-DE-ConradNeural",
        "zh-CN" => "zh-CN-YunxiNeural",
        "ja" => "ja-JP-KeitaNeural",
        "ko" => "ko-KR-InJoonNeural",
        "ar" => "ar-SA-HamedNeural",
        "ru" => "ru-RU-DmitryNeural",
        "pt" => "pt-BR-AntonioNeural",
        "it" => "it-IT-DiegoNeural",
        "nl" => "nl-NL-MaartenNeural",
        "tr" => "tr-TR-AhmetNeural",
        _ => return None,
    };
    Some(voice)
}

fn female_voice(language: &str) -> Option<&'static str> {
    let voice = match language {
        "en" => "en-US-JennyNeural",
        "si" => "si-LK-ThiliniNeural",
        "ta" => "ta-IN-PallaviNeural",
        "hi" => "hi-IN-SwaraNeural",
        "es" => "es-ES-ElviraNeural",
        "fr" => "fr-FR-DeniseNeural",
        "de" => "de-DE-KatjaNeural",
        "zh-CN" => "zh-CN-XiaoxiaoNeural",
        "ja" => "ja-JP-NanamiNeural",
        "ko" => "ko-KR-SunHiNeural",
        "ar" => "ar-SA-ZariyahNeural",
        "ru" => "ru-RU-SvetlanaNeural",
        "pt" => "pt-BR-FranciscaNeural",
        "it" => "it-IT-ElsaNeural",
        "nl" => "nl-NL-ColetteNeural",
        "tr" => "tr-TR-EmelNeural",
        _ => return None,
    };
    Some(voice)
}

/// Convert a speed multiplier to the provider's signed percentage encoding:
/// 1.0 -> "+0%", 1.5 -> "+50%", 0.5 -> "-50%".
pub fn rate_adjustment(speed: f32) -> String {
    let percent = ((speed - 1.0) * 100.0).round() as i32;
    format!("{:+}%", percent)
}

/// Whether the speed multiplier maps to the fallback provider's boolean
/// slow-speech flag.
pub fn is_slow_speed(speed: f32) -> bool {
    speed < 0.9
}

/// Normalize a language code for the fallback provider, defaulting to
/// English when the language is not in its supported set.
pub fn fallback_language(language: &str) -> &'static str {
    let bare = language.split('-').next().unwrap_or(language);
    match FALLBACK_LANGUAGES
        .iter()
        .find(|&&supported| supported.eq_ignore_ascii_case(bare))
    {
        Some(supported) => supported,
        None => {
            tracing::warn!(
                requested = %language,
                "Language not supported by fallback provider, using English"
            );
            "en"
        }
    }
}
