pub mod gtx;
pub mod proxy;
pub mod wire;


pub use gtx::GtxTranslator;
pub use proxy::ProxyTranslator;

pub type LanguageCode = String;

/// Anything that can turn text in one language into text in another.
///
/// Implementations own their transport. Callers only see the flattened
/// translated string or a [`TranslateError`].
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError>;

    /// Short provider name for logs.
    fn name(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// No provider base URL was configured. Raised per request, not at
    /// startup, so the process still comes up without one.
    #[error("translation endpoint is not configured")]
    MissingEndpoint,

    #[error("provider returned HTTP {0}")]
    Provider(reqwest::StatusCode),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}
