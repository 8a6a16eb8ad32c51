use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use parla_config::widget::WidgetConfig;
use parla_speech::{CaptureHandle, SpeechSupport};
use parla_translate::Translator;
use parla_types::{AppEvent, WidgetState};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

pub mod edit;
pub mod listen;
pub mod translate;

/// Owner of the widget state. Everything that mutates [`WidgetState`] runs
/// through this loop one event at a time, and a full snapshot goes out to
/// the UI after every handled event.
pub struct Coordinator {
    state: WidgetState,
    translator: Arc<dyn Translator>,
    speech: SpeechSupport,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    /// Loopback sender: spawned request and capture tasks resolve through
    /// the same queue the UI feeds.
    ui_to_app_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    debounce: Duration,
    /// Armed while an edit waits out its quiet window.
    deadline: Option<Instant>,
    /// Id of the newest fired translation request. A response carrying an
    /// older id is discarded instead of overwriting the display.
    generation: u64,
    /// Id of the newest capture session, same discipline.
    capture_seq: u64,
    capture: Option<CaptureHandle>,
    cancel: CancellationToken,
}

impl Coordinator {
    pub fn new(
        widget: &WidgetConfig,
        translator: Arc<dyn Translator>,
        speech: SpeechSupport,
        ui_to_app_rx: AsyncReceiver<AppEvent>,
        ui_to_app_tx: AsyncSender<AppEvent>,
        app_to_ui_tx: AsyncSender<AppEvent>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            state: WidgetState::new(widget.source_lang.clone(), widget.target_lang.clone()),
            translator,
            speech,
            ui_to_app_rx,
            ui_to_app_tx,
            app_to_ui_tx,
            debounce: Duration::from_millis(widget.debounce_ms),
            deadline: None,
            generation: 0,
            capture_seq: 0,
            capture: None,
            cancel,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        tracing::info!(
            "coordinator up ({} -> {}, debounce {:?})",
            self.state.source_lang,
            self.state.target_lang,
            self.debounce
        );
        self.publish().await?;

        loop {
            let deadline = self.deadline;
            tokio::select! {
                event = self.ui_to_app_rx.recv() => {
                    let event = event?;
                    if matches!(event, AppEvent::Shutdown) {
                        tracing::info!("coordinator shutting down");
                        break;
                    }
                    self.dispatch(event);
                    self.publish().await?;
                }
                _ = debounce_elapsed(deadline) => {
                    self.deadline = None;
                    self.fire_translation();
                    self.publish().await?;
                }
                _ = self.cancel.cancelled() => break,
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::InputChanged(text) => self.handle_input_changed(text),
            AppEvent::SourceChanged(code) => self.handle_source_changed(code),
            AppEvent::TargetChanged(code) => self.handle_target_changed(code),
            AppEvent::ListenPressed => self.handle_listen_pressed(),
            AppEvent::StopPressed => self.handle_stop_pressed(),
            AppEvent::TranslationResolved {
                generation,
                outcome,
            } => self.handle_translation_resolved(generation, outcome),
            AppEvent::CaptureFinished { seq, outcome } => {
                self.handle_capture_finished(seq, outcome)
            }
            // UI-bound; nothing to do on this side.
            AppEvent::StateChanged(_) => {}
            // Handled by run() before dispatch.
            AppEvent::Shutdown => {}
        }
    }

    async fn publish(&self) -> anyhow::Result<()> {
        self.app_to_ui_tx
            .send(AppEvent::StateChanged(self.state.clone()))
            .await?;
        Ok(())
    }

    /// Re-runs the debounce decision for the current input: empty text
    /// clears the display at once, anything else re-arms the quiet window.
    fn re_evaluate(&mut self) {
        if self.state.input_text.trim().is_empty() {
            self.deadline = None;
            // Invalidate any in-flight request so it cannot resurrect the
            // cleared display.
            self.generation += 1;
            self.state.translated_text.clear();
            self.state.loading = false;
        } else {
            self.deadline = Some(Instant::now() + self.debounce);
        }
    }

    fn abort_capture(&mut self) {
        if let Some(handle) = self.capture.take() {
            tracing::debug!("aborting capture session {}", handle.id());
            handle.abort();
        }
    }
}

async fn debounce_elapsed(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
