use parla_types::{AppEvent, TranslationOutcome};

use crate::events::Coordinator;

/// Fixed display fallback; the real cause only goes to the logs.
pub(crate) const TRANSLATION_FALLBACK: &str = "Translation failed. Please try again later.";

impl Coordinator {
    /// The quiet window elapsed: issue one request for the current input.
    pub(crate) fn fire_translation(&mut self) {
        let text = self.state.input_text.clone();
        if text.trim().is_empty() {
            return;
        }

        self.generation += 1;
        let generation = self.generation;
        self.state.loading = true;

        let from = self.state.source_lang.clone();
        let to = self.state.target_lang.clone();
        let translator = self.translator.clone();
        let tx = self.ui_to_app_tx.clone();

        tracing::debug!(
            "translation {generation} firing ({from} -> {to}, {} chars)",
            text.len()
        );

        tokio::spawn(async move {
            let outcome = match translator.translate(&text, &from, &to).await {
                Ok(translated) => TranslationOutcome::Translated(translated),
                Err(err) => {
                    tracing::warn!("translation {generation} failed: {err}");
                    TranslationOutcome::Failed
                }
            };
            if let Err(e) = tx
                .send(AppEvent::TranslationResolved {
                    generation,
                    outcome,
                })
                .await
            {
                tracing::debug!("coordinator gone, dropping translation {generation}: {e}");
            }
        });
    }

    pub(crate) fn handle_translation_resolved(
        &mut self,
        generation: u64,
        outcome: TranslationOutcome,
    ) {
        if generation != self.generation {
            tracing::debug!(
                "discarding stale translation {generation} (current {})",
                self.generation
            );
            return;
        }
        self.state.loading = false;
        self.state.translated_text = match outcome {
            TranslationOutcome::Translated(text) => text,
            TranslationOutcome::Failed => TRANSLATION_FALLBACK.to_string(),
        };
    }
}
