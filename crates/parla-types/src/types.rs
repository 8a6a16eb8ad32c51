use serde::{Deserialize, Serialize};

/// Events exchanged between the widget UI and the coordinator. One enum for
/// both directions; the variant comments say which side produces it.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// UI: input box content was replaced (every edit sends the full text).
    InputChanged(String),
    /// UI: source language selection changed.
    SourceChanged(String),
    /// UI: target language selection changed.
    TargetChanged(String),
    /// UI: the speak button was pressed.
    ListenPressed,
    /// UI: explicit stop of a running capture session.
    StopPressed,
    /// Internal: a spawned translation request resolved.
    TranslationResolved {
        generation: u64,
        outcome: TranslationOutcome,
    },
    /// Internal: a capture session reached its terminal event.
    CaptureFinished { seq: u64, outcome: CaptureOutcome },
    /// Coordinator to UI: full widget state after handling an event.
    StateChanged(WidgetState),
    Shutdown,
}

/// Everything the widget renders. Mutated only by the coordinator and
/// published as whole snapshots; resets with the process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetState {
    pub input_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub loading: bool,
    pub listening: bool,
    pub error_message: Option<String>,
}

impl WidgetState {
    pub fn new(source_lang: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TranslationOutcome {
    Translated(String),
    /// The cause was already logged where the request ran; the display only
    /// ever shows the fixed fallback string.
    Failed,
}

/// Terminal event of one capture session. Exactly one per session.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureOutcome {
    Transcript(String),
    Error(CaptureError),
    /// The session was stopped or aborted before producing anything.
    Stopped,
}

/// Failure reported by a speech capture engine. `code` is the engine's raw
/// error code and is what user-facing messages template on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}")]
pub struct CaptureError {
    pub kind: CaptureErrorKind,
    pub code: String,
}

impl CaptureError {
    /// Classify a raw engine code. Unknown codes map to `Other` but keep the
    /// raw string for display.
    pub fn from_code(code: impl Into<String>) -> Self {
        let code = code.into();
        let kind = match code.as_str() {
            "network" => CaptureErrorKind::Network,
            "no-speech" => CaptureErrorKind::NoSpeech,
            "audio-capture" => CaptureErrorKind::AudioCapture,
            "not-allowed" | "service-not-allowed" => CaptureErrorKind::NotAllowed,
            "aborted" => CaptureErrorKind::Aborted,
            _ => CaptureErrorKind::Other,
        };
        Self { kind, code }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureErrorKind {
    Network,
    NoSpeech,
    AudioCapture,
    NotAllowed,
    Aborted,
    Other,
}
