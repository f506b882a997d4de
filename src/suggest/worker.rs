//! Suggest Worker Thread
//!
//! Handles skills queries in a background thread to avoid blocking the UI.
//! Receives requests via channel, queries the GraphQL endpoint, and sends
//! rendered display text back to the main thread.
//!
//! Every request gets its own task, so any number of queries can be in
//! flight at once; nothing is cancelled and nothing enforces completion
//! order. A failed query logs and sends no response at all, which keeps
//! failures invisible to the display.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;

use super::client::SuggestClient;
use super::render::render_skills;
use super::state::{SuggestRequest, SuggestResponse};

/// Spawn the suggest worker thread
///
/// Creates a background thread that:
/// 1. Listens for requests on the request channel
/// 2. Runs each skills query against the GraphQL endpoint
/// 3. Sends rendered text back via the response channel
///
/// The thread exits once every request sender is dropped.
///
/// # Arguments
/// * `client` - Client bound to the configured endpoint
/// * `request_rx` - Channel to receive requests from the main thread
/// * `response_tx` - Channel to send responses to the main thread
pub fn spawn_worker(
    client: SuggestClient,
    request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx);
    });
}

/// Main worker loop - spawns one task per request until the channel closes
fn worker_loop(
    client: SuggestClient,
    mut request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            // No runtime means no suggestions; the input field still works
            log::error!("Failed to start suggest runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async {
        while let Some(request) = request_rx.recv().await {
            let client = client.clone();
            let response_tx = response_tx.clone();
            tokio::spawn(async move {
                handle_request(client, request, response_tx).await;
            });
        }
    });

    log::debug!("Suggest worker thread shutting down");
}

/// Run one skills query and deliver its rendered text
///
/// Exactly one response on success, zero on failure. Failures stay in
/// the log; the display keeps whatever it was showing.
async fn handle_request(
    client: SuggestClient,
    request: SuggestRequest,
    response_tx: Sender<SuggestResponse>,
) {
    match client.fetch(&request.example).await {
        Ok(skills) => {
            log::debug!(
                "Skills query {} returned {} skills",
                request.seq,
                skills.len()
            );
            let text = render_skills(&skills);
            // Main thread disconnecting just means the app is exiting
            let _ = response_tx.send(SuggestResponse {
                seq: request.seq,
                text,
            });
        }
        Err(e) => {
            log::warn!("Skills query {} failed: {}", request.seq, e);
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
