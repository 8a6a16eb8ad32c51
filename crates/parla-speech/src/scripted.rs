//! Deterministic engine double for tests. Each `begin` consumes the next
//! scripted step and resolves it on the tokio clock, so paused-time tests
//! can drive whole capture sessions without audio hardware.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use parla_types::{CaptureError, CaptureOutcome};

use crate::{CaptureHandle, OutcomeFn, SpeechCapture};

#[derive(Debug)]
pub enum ScriptStep {
    /// Deliver a transcript after the delay.
    Transcript { text: String, after: Duration },
    /// Deliver a recognition error with the given code after the delay.
    Fail { code: String, after: Duration },
    /// Never resolve on its own; only an abort ends the session.
    Silent,
}

pub struct ScriptedCapture {
    steps: Mutex<VecDeque<ScriptStep>>,
    locales: Mutex<Vec<String>>,
}

impl ScriptedCapture {
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into_iter().collect()),
            locales: Mutex::new(Vec::new()),
        })
    }

    /// Locales passed to `begin`, in call order.
    pub fn seen_locales(&self) -> Vec<String> {
        self.locales.lock().unwrap().clone()
    }
}

impl SpeechCapture for ScriptedCapture {
    fn begin(&self, locale: &str, done: OutcomeFn) -> CaptureHandle {
        self.locales.lock().unwrap().push(locale.to_string());
        let step = self
            .steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(ScriptStep::Silent);

        let handle = CaptureHandle::new();
        let cancel = handle.cancel_token();
        tracing::debug!(session = %handle.id(), locale, "scripted capture started");

        tokio::spawn(async move {
            let outcome = match step {
                ScriptStep::Transcript { text, after } => {
                    tokio::select! {
                        _ = cancel.cancelled() => CaptureOutcome::Stopped,
                        _ = tokio::time::sleep(after) => CaptureOutcome::Transcript(text),
                    }
                }
                ScriptStep::Fail { code, after } => {
                    tokio::select! {
                        _ = cancel.cancelled() => CaptureOutcome::Stopped,
                        _ = tokio::time::sleep(after) => {
                            CaptureOutcome::Error(CaptureError::from_code(&code))
                        }
                    }
                }
                ScriptStep::Silent => {
                    cancel.cancelled().await;
                    CaptureOutcome::Stopped
                }
            };
            done(outcome);
        });

        handle
    }
}

#[cfg(test)]
mod tests {
    use parla_types::CaptureErrorKind;
    use tokio::time::timeout;

    use super::*;

    fn forwarding(tx: kanal::AsyncSender<CaptureOutcome>) -> OutcomeFn {
        Box::new(move |outcome| {
            tokio::spawn(async move {
                let _ = tx.send(outcome).await;
            });
        })
    }

    #[tokio::test(start_paused = true)]
    async fn transcript_step_resolves_after_its_delay() {
        let engine = ScriptedCapture::new([ScriptStep::Transcript {
            text: "hola".into(),
            after: Duration::from_millis(80),
        }]);
        let (tx, rx) = kanal::bounded_async(4);

        let _handle = engine.begin("es-ES", forwarding(tx));

        let outcome = timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(outcome, CaptureOutcome::Transcript("hola".into()));
        assert_eq!(engine.seen_locales(), vec!["es-ES".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn fail_step_carries_the_error_code() {
        let engine = ScriptedCapture::new([ScriptStep::Fail {
            code: "network".into(),
            after: Duration::from_millis(10),
        }]);
        let (tx, rx) = kanal::bounded_async(4);

        let _handle = engine.begin("bn-IN", forwarding(tx));

        let outcome = timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        match outcome {
            CaptureOutcome::Error(err) => {
                assert_eq!(err.kind, CaptureErrorKind::Network);
                assert_eq!(err.code, "network");
            }
            other => panic!("expected error outcome, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn abort_resolves_a_pending_session_as_stopped() {
        let engine = ScriptedCapture::new([ScriptStep::Transcript {
            text: "never delivered".into(),
            after: Duration::from_secs(30),
        }]);
        let (tx, rx) = kanal::bounded_async(4);

        let handle = engine.begin("en-US", forwarding(tx));
        handle.abort();

        let outcome = timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(outcome, CaptureOutcome::Stopped);

        // Exactly one terminal outcome per session.
        assert!(timeout(Duration::from_millis(50), rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_aborts_the_session() {
        let engine = ScriptedCapture::new([ScriptStep::Silent]);
        let (tx, rx) = kanal::bounded_async(4);

        let handle = engine.begin("en-US", forwarding(tx));
        drop(handle);

        let outcome = timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(outcome, CaptureOutcome::Stopped);
    }

    #[tokio::test]
    async fn handles_are_distinct_per_session() {
        let engine = ScriptedCapture::new([ScriptStep::Silent, ScriptStep::Silent]);
        let (tx, _rx) = kanal::bounded_async(4);
        let (tx2, _rx2) = kanal::bounded_async(4);

        let first = engine.begin("en-US", forwarding(tx));
        let second = engine.begin("en-US", forwarding(tx2));
        assert_ne!(first.id(), second.id());
    }
}
