use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use parla_speech::SpeechSupport;
use parla_translate::Translator;
use parla_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::Coordinator;
use crate::io::watcher_io;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(256), // snapshot bursts
            ui_to_app: kanal::bounded_async(64),  // edits and resolutions
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(
        &self,
        translator: Arc<dyn Translator>,
        speech: SpeechSupport,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Coordinator
        {
            let state = self.state.clone();
            let ui_to_app_rx = self.channels.ui_to_app.1.clone();
            let ui_to_app_tx = self.channels.ui_to_app.0.clone();
            let app_to_ui_tx = self.channels.app_to_ui.0.clone();
            let cancel = self.cancel_token.child_token();
            tasks.spawn(async move {
                let widget = state.config.read().await.widget.clone();
                Coordinator::new(
                    &widget,
                    translator,
                    speech,
                    ui_to_app_rx,
                    ui_to_app_tx,
                    app_to_ui_tx,
                    cancel,
                )
                .run()
                .await
            });
        }

        // UI loop
        {
            let state = self.state.clone();
            let app_to_ui_rx = self.channels.app_to_ui.1.clone();
            let cancel = self.cancel_token.child_token();
            tasks.spawn(async move {
                let (view_width, view_height) = {
                    let config = state.config.read().await;
                    (config.widget.view_width, config.widget.view_height)
                };
                ui_loop(app_to_ui_rx, view_width, view_height, cancel).await
            });
        }

        // Input watcher
        tasks.spawn(watcher_io(
            self.channels.ui_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
