// Main entry point - Dependency injection and the terminal host loop
use std::io::Write;
use std::sync::Arc;

use air_quality_dashboard::application::telemetry_service::TelemetryService;
use air_quality_dashboard::infrastructure::config::load_dashboard_config;
use air_quality_dashboard::infrastructure::http_source::HttpTelemetrySource;
use air_quality_dashboard::presentation::commands::{parse_command, Command};
use air_quality_dashboard::presentation::render::render_text;
use air_quality_dashboard::presentation::widget::Widget;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::{LinesStream, WatchStream};
use tokio_stream::StreamExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they do not interleave with the dashboard on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = load_dashboard_config()?;

    // Infrastructure -> application -> presentation
    let source = Arc::new(HttpTelemetrySource::new(
        config.endpoint_url(),
        config.request_timeout(),
    )?);
    tracing::info!(endpoint = source.endpoint(), "starting air quality dashboard");
    let service = TelemetryService::new(source);
    let mut widget = Widget::mount(service);

    let mut updates = WatchStream::from_changes(widget.subscribe());
    let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());

    draw(&widget, None)?;

    loop {
        tokio::select! {
            update = updates.next() => {
                if update.is_none() {
                    tracing::warn!("poller stopped unexpectedly");
                    break;
                }
                draw(&widget, None)?;
            }
            line = lines.next() => {
                let Some(line) = line.transpose()? else {
                    tracing::info!("input closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        let mut notice = None;
                        for event in command.events() {
                            if let Err(e) = event.apply(widget.panel_mut()) {
                                notice = Some(e.to_string());
                                break;
                            }
                        }
                        draw(&widget, notice.as_deref())?;
                    }
                    Err(e) => draw(&widget, Some(&e.to_string()))?,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted");
                break;
            }
        }
    }

    widget.unmount();
    Ok(())
}

fn draw(widget: &Widget, notice: Option<&str>) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\x1B[2J\x1B[H{}", render_text(&widget.view()))?;
    if let Some(notice) = notice {
        writeln!(stdout, "! {}", notice)?;
    }
    write!(stdout, "> ")?;
    stdout.flush()
}
