//! Test doubles shared by the unit tests of this crate.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use tracker_core::ports::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use tracker_infra::{InMemoryStore, JwtTokenDecoder};

use crate::session::AuthSession;

/// Transport that records every request and replays queued outcomes.
///
/// With nothing queued it answers `200 null`.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, error: TransportError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, Value::Null)))
    }
}

/// Session over a fresh in-memory store.
pub fn memory_session() -> AuthSession {
    AuthSession::new(Arc::new(InMemoryStore::new()), Arc::new(JwtTokenDecoder::new()))
}
