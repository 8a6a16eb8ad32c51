use std::time::Duration;

use crate::wire::{TranslateRequest, TranslateResponse};
use crate::{TranslateError, Translator};

/// Client for our own gateway's `POST /translate`.
///
/// This is what the widget talks to; it never sees the upstream provider.
#[derive(Debug, Clone)]
pub struct ProxyTranslator {
    http: reqwest::Client,
    url: String,
}

impl ProxyTranslator {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, TranslateError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }
}

#[async_trait::async_trait]
impl Translator for ProxyTranslator {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let request = TranslateRequest {
            text: text.to_string(),
            input_lang: from.to_string(),
            target_lang: to.to_string(),
        };

        let response = self.http.post(&self.url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Provider(status));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|err| TranslateError::Malformed(err.to_string()))?;

        Ok(parsed.translated_text)
    }

    fn name(&self) -> &'static str {
        "proxy"
    }
}
