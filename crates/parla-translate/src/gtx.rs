use std::time::Duration;

use serde_json::Value;

use crate::{TranslateError, Translator};

/// Client for the unofficial `translate_a/single` style endpoint.
///
/// The endpoint is optional: without one the client still constructs, and
/// every call fails with [`TranslateError::MissingEndpoint`].
#[derive(Debug, Clone)]
pub struct GtxTranslator {
    http: reqwest::Client,
    endpoint: Option<String>,
}

impl GtxTranslator {
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self, TranslateError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }
}

#[async_trait::async_trait]
impl Translator for GtxTranslator {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or(TranslateError::MissingEndpoint)?;

        let url = format!(
            "{endpoint}?client=gtx&sl={from}&tl={to}&dt=t&q={}",
            urlencoding::encode(text)
        );

        tracing::debug!(from, to, chars = text.len(), "requesting translation");

        let response = self
            .http
            .get(&url)
            .header("User-Agent", "Mozilla/5.0")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Provider(status));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| TranslateError::Malformed(err.to_string()))?;

        // An empty or unusable body falls back to the untranslated input.
        Ok(flatten_segments(&body).unwrap_or_else(|| text.to_string()))
    }

    fn name(&self) -> &'static str {
        "gtx"
    }
}

/// Flattens the provider's array-of-arrays body.
///
/// The body's first element is a list of segments and each segment's first
/// element is a translated fragment. Fragments concatenate in order with no
/// separator. Returns `None` when nothing usable is present.
fn flatten_segments(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let mut out = String::new();
    for segment in segments {
        if let Some(fragment) = segment.get(0).and_then(Value::as_str) {
            out.push_str(fragment);
        }
    }
    if out.is_empty() { None } else { Some(out) }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn flatten_concatenates_segment_fragments_in_order() {
        let body = json!([
            [
                ["Hola, ", "Hello, ", null],
                ["mundo.", "world.", null]
            ],
            null,
            "en"
        ]);
        assert_eq!(flatten_segments(&body).as_deref(), Some("Hola, mundo."));
    }

    #[test]
    fn flatten_skips_segments_without_a_text_fragment() {
        let body = json!([[["Bonjour"], [null, "dropped"], [42], ["!"]]]);
        assert_eq!(flatten_segments(&body).as_deref(), Some("Bonjour!"));
    }

    #[test]
    fn flatten_rejects_empty_and_malformed_bodies() {
        assert_eq!(flatten_segments(&json!([])), None);
        assert_eq!(flatten_segments(&json!([[]])), None);
        assert_eq!(flatten_segments(&json!(null)), None);
        assert_eq!(flatten_segments(&json!({"unexpected": true})), None);
        assert_eq!(flatten_segments(&json!("just a string")), None);
    }

    #[tokio::test]
    async fn missing_endpoint_fails_per_request() {
        let translator = GtxTranslator::new(None, Duration::from_secs(1)).unwrap();
        let err = translator.translate("hello", "en", "es").await;
        assert!(matches!(err, Err(TranslateError::MissingEndpoint)));
    }
}
