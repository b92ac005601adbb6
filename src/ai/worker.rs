//! AI worker thread
//!
//! Runs suggestion requests on a background thread so the TUI never blocks
//! on network I/O. Receives requests over a channel, drives the async
//! client on a current-thread tokio runtime, and sends results back.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use tokio_util::sync::CancellationToken;

use super::ai_state::{AiRequest, AiResponse};
use super::provider::{AiError, OpenAiClient};
use crate::config::AiConfig;

/// Spawn the AI worker thread
///
/// The client is constructed once from config; a missing API key is
/// reported lazily, on the first request, so the rest of the app starts
/// normally.
pub fn spawn_worker(
    config: &AiConfig,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let client_result = OpenAiClient::from_config(config);

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                let _ = response_tx.send(AiResponse::Error(format!(
                    "Failed to start async runtime: {}",
                    e
                )));
                return;
            }
        };

        worker_loop(&runtime, client_result, request_rx, response_tx);
    });
}

/// Messages observed on the request channel while a call is in flight
#[derive(Default)]
struct Drained {
    /// The current request was cancelled
    cancelled: bool,
    /// A newer suggestion request arrived and must be processed next
    next: Option<AiRequest>,
    /// The main thread hung up
    disconnected: bool,
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    runtime: &tokio::runtime::Runtime,
    client_result: Result<OpenAiClient, AiError>,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let client = match client_result {
        Ok(c) => Some(c),
        Err(e) => {
            // Wait for a request before surfacing the configuration error
            log::debug!("Suggestion client not configured: {}", e);
            None
        }
    };

    let mut pending: Option<AiRequest> = None;
    loop {
        let request = match pending.take() {
            Some(r) => r,
            None => match request_rx.recv() {
                Ok(r) => r,
                Err(_) => break,
            },
        };

        match request {
            AiRequest::Suggest {
                source_text,
                request_id,
            } => {
                pending = handle_suggest(
                    runtime,
                    &client,
                    &source_text,
                    request_id,
                    &request_rx,
                    &response_tx,
                );
            }
            AiRequest::Cancel { request_id } => {
                // Cancel received when no request is in-flight - acknowledge
                let _ = response_tx.send(AiResponse::Cancelled { request_id });
                log::debug!("Cancelled request {} (no active request)", request_id);
            }
        }
    }

    log::debug!("AI worker thread shutting down");
}

/// Run a single suggestion request to completion
///
/// The call itself is one round trip, so cancellation is checked at two
/// points: queued cancels are drained before issuing the request (and trip
/// the token), and again after it returns, in which case the result is
/// discarded. The UI additionally filters stale results by request id.
///
/// Returns the next queued suggestion request, if one superseded this call
/// while it was in flight.
fn handle_suggest(
    runtime: &tokio::runtime::Runtime,
    client: &Option<OpenAiClient>,
    source_text: &str,
    request_id: u64,
    request_rx: &Receiver<AiRequest>,
    response_tx: &Sender<AiResponse>,
) -> Option<AiRequest> {
    let client = match client {
        Some(c) => c,
        None => {
            let _ = response_tx.send(AiResponse::Error(
                "AI not configured. Add an [ai] section with api_key to config.".to_string(),
            ));
            return None;
        }
    };

    let cancel_token = CancellationToken::new();
    let before = drain_requests(request_rx, request_id);
    if before.disconnected {
        return None;
    }
    if before.cancelled {
        cancel_token.cancel();
    }

    let result = runtime.block_on(client.generate_options_with_cancel(source_text, cancel_token));

    // A cancel or a superseding request may have arrived while in flight
    let after = drain_requests(request_rx, request_id);
    if after.disconnected {
        return None;
    }
    if after.cancelled {
        let _ = response_tx.send(AiResponse::Cancelled { request_id });
        log::debug!("Discarded result of cancelled request {}", request_id);
        return after.next.or(before.next);
    }

    let response = match result {
        Ok(options) => AiResponse::Suggestions {
            options,
            request_id,
        },
        Err(AiError::Cancelled) => AiResponse::Cancelled { request_id },
        Err(e) => AiResponse::Error(e.to_string()),
    };
    let _ = response_tx.send(response);

    after.next.or(before.next)
}

/// Drain queued messages without blocking
///
/// Only the newest queued suggestion request is kept; anything older is
/// already stale from the UI's perspective.
fn drain_requests(request_rx: &Receiver<AiRequest>, current_request_id: u64) -> Drained {
    let mut drained = Drained::default();
    loop {
        match request_rx.try_recv() {
            Ok(AiRequest::Cancel { request_id }) => {
                if request_id == current_request_id {
                    drained.cancelled = true;
                } else {
                    log::debug!(
                        "Ignoring cancel for request {} (current: {})",
                        request_id,
                        current_request_id
                    );
                }
            }
            Ok(request @ AiRequest::Suggest { .. }) => {
                drained.next = Some(request);
            }
            Err(TryRecvError::Empty) => return drained,
            Err(TryRecvError::Disconnected) => {
                drained.disconnected = true;
                return drained;
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
