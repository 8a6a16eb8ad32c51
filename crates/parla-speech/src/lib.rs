pub mod scripted;

use std::sync::Arc;

use parla_types::CaptureOutcome;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

pub use scripted::{ScriptStep, ScriptedCapture};

/// Callback an engine fires with the session's single terminal outcome.
pub type OutcomeFn = Box<dyn FnOnce(CaptureOutcome) + Send>;

/// A speech engine that can run one capture session at a time per handle.
///
/// Contract: `done` is called with exactly one terminal outcome per `begin`,
/// even when the session is aborted first. An aborted session resolves as
/// [`CaptureOutcome::Stopped`] unless a transcript or error already won.
pub trait SpeechCapture: Send + Sync {
    fn begin(&self, locale: &str, done: OutcomeFn) -> CaptureHandle;
}

/// Whether a speech engine exists in this environment. Resolved once at
/// startup and never re-probed.
#[derive(Clone)]
pub enum SpeechSupport {
    Available(Arc<dyn SpeechCapture>),
    Unavailable,
}

impl SpeechSupport {
    pub fn is_available(&self) -> bool {
        matches!(self, SpeechSupport::Available(_))
    }
}

/// Owner's end of one capture session.
///
/// Dropping the handle aborts the session, so holding it in an `Option` and
/// replacing it is enough to guarantee release.
#[derive(Debug)]
pub struct CaptureHandle {
    id: Uuid,
    cancel: CancellationToken,
}

impl CaptureHandle {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Token an engine task selects on to observe aborts.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn abort(&self) {
        self.cancel.cancel();
    }
}

impl Default for CaptureHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CaptureHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
