use serde::{Deserialize, Serialize};

use crate::LanguageCode;

/// Body of `POST /translate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub input_lang: LanguageCode,
    pub target_lang: LanguageCode,
}

/// Success body of `POST /translate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// Failure body of `POST /translate`. Always carries
/// [`SERVICE_UNAVAILABLE`], never provider or configuration detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateFailure {
    pub error: String,
}

/// The one message every gateway failure collapses into.
pub const SERVICE_UNAVAILABLE: &str = "Translation service unavailable. Please try again later.";
