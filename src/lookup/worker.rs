//! Lookup worker thread
//!
//! Runs a current-thread tokio runtime in a background thread so HTTP calls
//! never block the UI. Every request becomes its own task: nothing is tracked
//! or aborted when newer input arrives, and each task answers on the response
//! channel whenever its call finishes.

use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::client::SearchClient;
use super::{LookupRequest, LookupResponse};

/// Handle to the running worker thread
#[derive(Debug)]
pub struct LookupWorker {
    shutdown: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

impl LookupWorker {
    /// Abort outstanding lookups and wait for the thread to exit
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.shutdown.cancel();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log::warn!("Lookup worker thread panicked");
        }
    }
}

impl Drop for LookupWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn the lookup worker thread
///
/// The worker runs until `request_rx` is closed or the returned handle is
/// shut down.
pub fn spawn_worker(
    client: SearchClient,
    request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) -> LookupWorker {
    let shutdown = CancellationToken::new();
    let token = shutdown.clone();

    let thread = std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log::error!("Failed to start lookup runtime: {}", e);
                return;
            }
        };

        runtime.block_on(worker_loop(client, request_rx, response_tx, token));
        log::debug!("Lookup worker thread shutting down");
    });

    LookupWorker {
        shutdown,
        thread: Some(thread),
    }
}

/// Main worker loop - spawns one task per request until the channel closes
async fn worker_loop(
    client: SearchClient,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            request = request_rx.recv() => match request {
                Some(request) => {
                    tokio::spawn(run_lookup(
                        client.clone(),
                        request,
                        response_tx.clone(),
                        shutdown.clone(),
                    ));
                }
                None => break,
            },
        }
    }
}

/// Perform one lookup and report its outcome
async fn run_lookup(
    client: SearchClient,
    request: LookupRequest,
    response_tx: Sender<LookupResponse>,
    shutdown: CancellationToken,
) {
    let LookupRequest { request_id, query } = request;

    let outcome = tokio::select! {
        _ = shutdown.cancelled() => {
            log::debug!("Dropped lookup {} during shutdown", request_id);
            return;
        }
        outcome = client.search(&query) => outcome,
    };

    let response = match outcome {
        Ok(usernames) => LookupResponse::Users {
            request_id,
            query,
            usernames,
        },
        Err(e) => LookupResponse::Failed {
            request_id,
            query,
            error: e.to_string(),
        },
    };

    // The UI may already be gone
    let _ = response_tx.send(response);
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
