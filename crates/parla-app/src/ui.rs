use kanal::AsyncReceiver;
use parla_types::{AppEvent, WidgetState};
use tokio_util::sync::CancellationToken;

use crate::display::OutputView;

/// Consumes state snapshots and renders them. The viewport only re-snaps
/// to the bottom when the translated text actually changed.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    view_width: usize,
    view_height: usize,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut view = OutputView::new(view_width, view_height);
    let mut shown = WidgetState::default();

    loop {
        tokio::select! {
            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else { break };
                let AppEvent::StateChanged(state) = event else { continue };
                if state.translated_text != shown.translated_text {
                    view.set_text(&state.translated_text);
                }
                render(&state, &view);
                shown = state;
            }
            _ = cancel.cancelled() => break,
        }
    }

    tracing::debug!("ui loop ended");
    Ok(())
}

fn render(state: &WidgetState, view: &OutputView) {
    let mut status = format!("[{} -> {}]", state.source_lang, state.target_lang);
    if state.loading {
        status.push_str(" translating...");
    }
    if state.listening {
        status.push_str(" listening...");
    }
    println!("{status}");

    if let Some(message) = &state.error_message {
        println!("! {message}");
    }
    for line in view.visible() {
        println!("| {line}");
    }
}
