use kanal::AsyncSender;
use parla_types::AppEvent;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Reads stdin lines and feeds the coordinator. Colon commands switch
/// languages and drive capture; any other line replaces the input text.
pub async fn watcher_io(
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("stdin closed");
                    ui_to_app_tx.send(AppEvent::Shutdown).await?;
                    break;
                };
                let event = parse_line(&line);
                let is_shutdown = matches!(event, AppEvent::Shutdown);
                ui_to_app_tx.send(event).await?;
                if is_shutdown {
                    break;
                }
            }
            _ = cancel.cancelled() => break,
        }
    }
    Ok(())
}

/// `:from CODE` and `:to CODE` switch languages, `:speak`/`:stop` drive the
/// capture session, `:quit` exits. Everything else is input text.
pub fn parse_line(line: &str) -> AppEvent {
    let trimmed = line.trim_end();
    if let Some(code) = trimmed.strip_prefix(":from ") {
        AppEvent::SourceChanged(code.trim().to_string())
    } else if let Some(code) = trimmed.strip_prefix(":to ") {
        AppEvent::TargetChanged(code.trim().to_string())
    } else {
        match trimmed {
            ":speak" => AppEvent::ListenPressed,
            ":stop" => AppEvent::StopPressed,
            ":quit" => AppEvent::Shutdown,
            text => AppEvent::InputChanged(text.to_string()),
        }
    }
}
