//! Event ingestion loop.
//!
//! Reads host events as newline-delimited JSON from stdin and hands each
//! one to the event handlers. Handlers return immediately; outbound calls
//! complete on the runtime in the background.

use std::future::Future;
use std::io::{self, BufRead};
use std::thread;

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::signal;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::{Stream, StreamExt};

use twin_mills::config::Settings;
use twin_mills::handler::EventHandlers;
use twin_mills::host::HostEvent;
use twin_mills::webhook::{DispatchReporter, HttpClient, ReqwestClient, WebhookDispatcher};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Reading the event stream failed.
    #[error("Failed to read host events: {0}")]
    EventStream(#[source] io::Error),
}

/// Runs the relay until stdin closes or a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if reading stdin fails.
///
/// Excluded from coverage - requires stdin and signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn execute(settings: Settings) -> Result<(), RunError> {
    let dispatcher = WebhookDispatcher::new(ReqwestClient::new(), Handle::current())
        .with_dry_run(settings.dry_run);
    let handlers = EventHandlers::new(&settings, &dispatcher);

    if settings.dry_run {
        tracing::info!("Dry-run mode enabled - webhook requests will be logged but not sent");
    }
    if settings.api_key.is_none() {
        tracing::warn!("No API key configured - events will be read but not sent");
    }

    let lines =
        spawn_line_reader(io::BufReader::new(io::stdin())).map_err(RunError::EventStream)?;
    tracing::info!("Reading host events from stdin");

    run_event_loop(lines, &handlers, shutdown_signal()).await
}

/// Capacity of the channel between the reader thread and the event loop.
const LINE_BUFFER: usize = 64;

/// Reads lines from `reader` on a dedicated OS thread.
///
/// A blocked read on this thread never holds up runtime shutdown, so a
/// host that keeps the pipe open without writing cannot stall exit.
///
/// # Errors
///
/// Returns an error if the thread cannot be spawned.
fn spawn_line_reader<B>(reader: B) -> io::Result<ReceiverStream<io::Result<String>>>
where
    B: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    thread::Builder::new()
        .name("host-events".to_string())
        .spawn(move || read_lines(reader, &tx))?;

    Ok(ReceiverStream::new(rx))
}

/// Forwards lines until end of input, a read error, or the receiver
/// going away.
fn read_lines<B: BufRead>(reader: B, tx: &mpsc::Sender<io::Result<String>>) {
    for line in reader.lines() {
        let failed = line.is_err();
        if tx.blocking_send(line).is_err() || failed {
            return;
        }
    }
}

/// Feeds each event line to the handlers until the stream ends or
/// `shutdown` completes.
///
/// On end of stream, requests already submitted are awaited so their
/// completion lines are logged. On shutdown they are abandoned.
async fn run_event_loop<S, H, R, F>(
    mut lines: S,
    handlers: &EventHandlers<'_, H, R>,
    shutdown: F,
) -> Result<(), RunError>
where
    S: Stream<Item = io::Result<String>> + Unpin,
    H: HttpClient + 'static,
    R: DispatchReporter + 'static,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut in_flight: Vec<JoinHandle<()>> = Vec::new();

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                in_flight.retain(|handle| !handle.is_finished());
                tracing::info!(
                    "Shutdown signal received, dropping {} in-flight dispatch(es)",
                    in_flight.len()
                );
                return Ok(());
            }

            line = lines.next() => {
                match line {
                    Some(Ok(line)) => {
                        if let Some(event) = parse_event(&line) {
                            if let Some(handle) = handlers
                                .handle(&event)
                                .into_dispatch()
                                .and_then(|d| d.into_handle())
                            {
                                in_flight.retain(|handle| !handle.is_finished());
                                in_flight.push(handle);
                            }
                        }
                    }
                    Some(Err(e)) => return Err(RunError::EventStream(e)),
                    None => break,
                }
            }
        }
    }

    tracing::info!(
        "Event stream closed, waiting for {} in-flight dispatch(es)",
        in_flight.len()
    );
    for handle in in_flight {
        if let Err(e) = handle.await {
            tracing::error!("Dispatch task failed: {e}");
        }
    }

    Ok(())
}

/// Parses one event line. Blank lines are ignored; malformed lines are
/// logged and skipped.
fn parse_event(line: &str) -> Option<HostEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match serde_json::from_str(line) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::warn!("Skipping malformed host event: {e}");
            None
        }
    }
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
