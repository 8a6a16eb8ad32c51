use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use parla_speech::SpeechSupport;
use parla_translate::{ProxyTranslator, Translator};

pub mod controller;
pub mod display;
pub mod events;
pub mod io;
pub mod state;
pub mod ui;


use self::controller::AppController;
use self::state::AppState;

/// Terminal front end of the live translation widget.
#[derive(Debug, Parser)]
#[command(about = "Live translation widget")]
struct Args {
    /// Source language code, e.g. `en`.
    #[arg(long)]
    from: Option<String>,
    /// Target language code, e.g. `es`.
    #[arg(long)]
    to: Option<String>,
    /// Gateway URL the widget posts its requests to.
    #[arg(long)]
    server_url: Option<String>,
    /// Quiet window after the last edit, in milliseconds.
    #[arg(long)]
    debounce_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let mut config = parla_config::Config::new();
    if let Some(from) = args.from {
        config.widget.source_lang = from;
    }
    if let Some(to) = args.to {
        config.widget.target_lang = to;
    }
    if let Some(url) = args.server_url {
        config.widget.server_url = url;
    }
    if let Some(ms) = args.debounce_ms {
        config.widget.debounce_ms = ms;
    }

    tracing::info!(
        "starting widget ({} -> {}) against {}",
        config.widget.source_lang,
        config.widget.target_lang,
        config.widget.server_url
    );

    let translator: Arc<dyn Translator> = Arc::new(ProxyTranslator::new(
        config.widget.server_url.clone(),
        Duration::from_millis(config.widget.request_timeout_ms),
    )?);

    // No capture engine ships with the terminal build; the seam stays and
    // the capability resolves unavailable.
    let speech = SpeechSupport::Unavailable;

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(translator, speech);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("ctrl_c listener failed: {e}");
        }
    };

    tokio::select! {
        _ = shutdown => {
            tracing::info!("shutdown requested");
        }
        result = tasks.join_next() => match result {
            Some(Ok(Ok(()))) => tracing::info!("a task finished"),
            Some(Ok(Err(e))) => tracing::error!("a task failed: {e}"),
            Some(Err(e)) => tracing::error!("a task panicked: {e}"),
            None => {}
        },
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Err(e) = result {
            tracing::error!("task join failed: {e}");
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if atty::is(atty::Stream::Stdout) {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    }
}
