use std::time::Duration;

use actix_web::{App, HttpServer, web};
use clap::Parser;
use parla_translate::GtxTranslator;

mod routes;
mod state;

use crate::routes::{health, translate};
use crate::state::AppState;

/// Translation gateway between widgets and the upstream provider.
#[derive(Debug, Parser)]
#[command(about = "Translation gateway")]
struct Args {
    /// Bind host override.
    #[arg(long)]
    host: Option<String>,
    /// Bind port override.
    #[arg(long)]
    port: Option<u16>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let mut config = parla_config::Config::new();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    if config.provider.endpoint.is_none() {
        tracing::warn!("TRANSLATE_ENDPOINT is not set; requests will fail until it is");
    }

    let translator = GtxTranslator::new(
        config.provider.endpoint.clone(),
        Duration::from_millis(config.provider.request_timeout_ms),
    )?;
    let shared = web::Data::new(AppState::new(translator));

    tracing::info!(
        "gateway listening on {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(shared.clone())
            .service(health)
            .service(translate)
    })
    .bind((config.server.host.clone(), config.server.port))?
    .run()
    .await?;

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
