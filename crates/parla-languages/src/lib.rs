use parla_types::{CaptureError, CaptureErrorKind};

/// One supported widget language. `code` is what the provider receives,
/// `capture_locale` is what a speech engine wants (BCP-47).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub capture_locale: &'static str,
}

/// The widget's selectable languages. Codes outside this table are still
/// passed through to the provider untouched; the table only feeds display
/// names, capture locales and quirk rows.
pub const LANGUAGES: &[LanguageInfo] = &[
    LanguageInfo { code: "en", name: "English", capture_locale: "en-US" },
    LanguageInfo { code: "es", name: "Spanish", capture_locale: "es-ES" },
    LanguageInfo { code: "fr", name: "French", capture_locale: "fr-FR" },
    LanguageInfo { code: "de", name: "German", capture_locale: "de-DE" },
    LanguageInfo { code: "it", name: "Italian", capture_locale: "it-IT" },
    LanguageInfo { code: "pt", name: "Portuguese", capture_locale: "pt-PT" },
    LanguageInfo { code: "ru", name: "Russian", capture_locale: "ru-RU" },
    LanguageInfo { code: "zh", name: "Chinese", capture_locale: "zh-CN" },
    LanguageInfo { code: "ja", name: "Japanese", capture_locale: "ja-JP" },
    LanguageInfo { code: "ar", name: "Arabic", capture_locale: "ar-SA" },
    LanguageInfo { code: "bn", name: "Bengali", capture_locale: "bn-IN" },
];

pub fn find(code: &str) -> Option<&'static LanguageInfo> {
    LANGUAGES.iter().find(|l| l.code == code)
}

/// Locale handed to a capture engine; unknown codes pass through as-is.
pub fn capture_locale(code: &str) -> &str {
    match find(code) {
        Some(info) => info.capture_locale,
        None => code,
    }
}

/// Known per-language capture limitation. Kept as data so a new provider
/// quirk is a new row, not a new conditional.
#[derive(Debug, Clone, Copy)]
pub struct SpeechQuirk {
    pub language: &'static str,
    pub trigger: CaptureErrorKind,
    pub message: &'static str,
}

pub const SPEECH_QUIRKS: &[SpeechQuirk] = &[SpeechQuirk {
    language: "bn",
    trigger: CaptureErrorKind::Network,
    message: "Speech recognition for Bengali is not available right now. \
              Please type your text instead.",
}];

pub fn speech_quirk(language: &str, trigger: CaptureErrorKind) -> Option<&'static SpeechQuirk> {
    SPEECH_QUIRKS
        .iter()
        .find(|q| q.language == language && q.trigger == trigger)
}

/// User-facing message for a failed capture session: a quirk row when one
/// matches the language and error kind, otherwise the generic template with
/// the engine's raw code.
pub fn capture_error_message(language: &str, err: &CaptureError) -> String {
    match speech_quirk(language, err.kind) {
        Some(quirk) => quirk.message.to_string(),
        None => format!(
            "Speech recognition error: {}. Please check your internet connection and try again.",
            err.code
        ),
    }
}
