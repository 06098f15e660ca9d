//! Username lookups
//!
//! The UI thread sends [`LookupRequest`]s through a [`LookupChannel`]; the
//! worker thread answers each one with a [`LookupResponse`] on a std channel
//! that the UI polls. Requests are independent: nothing is cancelled when a
//! newer one starts, so responses can arrive in any order.

mod client;
mod worker;

use tokio::sync::mpsc::UnboundedSender;

pub use client::{LookupError, SearchClient};
pub use worker::{LookupWorker, spawn_worker};

/// Request messages sent to the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Increasing id, used to spot responses that arrive out of order
    pub request_id: u64,
    pub query: String,
}

/// Response messages received from the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResponse {
    Users {
        request_id: u64,
        /// Query the lookup was issued for
        query: String,
        usernames: Vec<String>,
    },
    Failed {
        request_id: u64,
        query: String,
        error: String,
    },
}

impl LookupResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            LookupResponse::Users { request_id, .. } | LookupResponse::Failed { request_id, .. } => {
                *request_id
            }
        }
    }
}

/// Sending half of the lookup worker, with request id bookkeeping
#[derive(Debug)]
pub struct LookupChannel {
    request_tx: UnboundedSender<LookupRequest>,
    last_request_id: u64,
}

impl LookupChannel {
    pub fn new(request_tx: UnboundedSender<LookupRequest>) -> Self {
        Self {
            request_tx,
            last_request_id: 0,
        }
    }

    /// Send a lookup for `query`
    ///
    /// Returns the request id, or `None` if the worker has gone away.
    pub fn issue(&mut self, query: &str) -> Option<u64> {
        let request_id = self.last_request_id + 1;
        let request = LookupRequest {
            request_id,
            query: query.to_string(),
        };

        match self.request_tx.send(request) {
            Ok(()) => {
                self.last_request_id = request_id;
                log::debug!("Issued lookup {} for {:?}", request_id, query);
                Some(request_id)
            }
            Err(_) => {
                log::warn!("Lookup worker is gone; dropping lookup for {:?}", query);
                None
            }
        }
    }
}
