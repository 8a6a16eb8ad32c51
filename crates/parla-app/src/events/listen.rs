use parla_speech::{OutcomeFn, SpeechSupport};
use parla_types::{AppEvent, CaptureOutcome};

use crate::events::Coordinator;

/// Shown when no capture engine exists in this environment.
pub(crate) const CAPTURE_UNSUPPORTED: &str =
    "Speech recognition is not supported in this environment. Please type your text instead.";

impl Coordinator {
    pub(crate) fn handle_listen_pressed(&mut self) {
        let engine = match &self.speech {
            SpeechSupport::Available(engine) => engine.clone(),
            SpeechSupport::Unavailable => {
                tracing::warn!("listen pressed without a capture engine");
                self.state.error_message = Some(CAPTURE_UNSUPPORTED.to_string());
                return;
            }
        };

        // A second press restarts: the old session dies and its late
        // outcome falls to the sequence check.
        self.abort_capture();
        self.capture_seq += 1;
        let seq = self.capture_seq;

        let locale = parla_languages::capture_locale(&self.state.source_lang).to_string();
        let tx = self.ui_to_app_tx.clone();
        let done: OutcomeFn = Box::new(move |outcome| {
            tokio::spawn(async move {
                if let Err(e) = tx.send(AppEvent::CaptureFinished { seq, outcome }).await {
                    tracing::error!("failed to deliver capture outcome: {e}");
                }
            });
        });

        tracing::info!("capture session {seq} starting ({locale})");
        self.state.listening = true;
        self.state.error_message = None;
        self.capture = Some(engine.begin(&locale, done));
    }

    pub(crate) fn handle_stop_pressed(&mut self) {
        // Keep the handle: the engine still owes its terminal outcome,
        // which clears the listening flag when it arrives.
        if let Some(handle) = &self.capture {
            tracing::debug!("stop requested for capture session {}", handle.id());
            handle.abort();
        }
    }

    pub(crate) fn handle_capture_finished(&mut self, seq: u64, outcome: CaptureOutcome) {
        if seq != self.capture_seq {
            tracing::debug!("ignoring outcome of superseded capture session {seq}");
            return;
        }
        self.capture = None;
        self.state.listening = false;

        match outcome {
            CaptureOutcome::Transcript(text) => {
                tracing::info!("capture session {seq} produced {} chars", text.len());
                self.state.error_message = None;
                self.state.input_text = text;
                self.re_evaluate();
            }
            CaptureOutcome::Error(err) => {
                tracing::warn!("capture session {seq} failed: {err}");
                self.state.error_message = Some(parla_languages::capture_error_message(
                    &self.state.source_lang,
                    &err,
                ));
            }
            CaptureOutcome::Stopped => {
                tracing::debug!("capture session {seq} stopped");
            }
        }
    }
}
