//! Scripted transport for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value as JsonValue;

use crate::{ApiError, HttpRequest, HttpResponse, Transport};

#[derive(Default)]
struct MockState {
    responses: VecDeque<Result<HttpResponse, ApiError>>,
    requests: Vec<HttpRequest>,
}

/// Transport that records every request and replays queued responses in
/// order. With nothing queued it fails like an unreachable server.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a JSON response.
    pub fn respond_json(&self, status: u16, body: JsonValue) -> &Self {
        self.respond_raw(status, body.to_string())
    }

    /// Queue a response with an arbitrary body.
    pub fn respond_raw(&self, status: u16, body: impl Into<String>) -> &Self {
        self.state()
            .responses
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a transport failure.
    pub fn fail(&self, error: ApiError) -> &Self {
        self.state().responses.push_back(Err(error));
        self
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state().requests.clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.state().requests.last().cloned()
    }

    /// Responses still waiting to be consumed.
    pub fn pending_responses(&self) -> usize {
        self.state().responses.len()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut state = self.state();
        state.requests.push(request);
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("connection refused".to_string())))
    }
}
