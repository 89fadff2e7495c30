//! In-process [`Network`] for unit tests.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{Method, Network, NetworkError, Request};

/// Replays queued bodies keyed by `(method, path)` and records every request.
#[derive(Default)]
pub struct MockNetwork {
    responses: Mutex<HashMap<(Method, String), VecDeque<Vec<u8>>>>,
    requests: Mutex<Vec<Request>>,
}

impl MockNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, method: Method, path: &str, body: &str) {
        self.responses
            .lock()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(body.as_bytes().to_vec());
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Network for MockNetwork {
    async fn response_data(&self, request: Request) -> Result<Vec<u8>, NetworkError> {
        self.requests.lock().push(request.clone());
        self.responses
            .lock()
            .get_mut(&(request.method, request.path.clone()))
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| NetworkError::UnacceptableStatusCode {
                status: 404,
                body: format!("no mock response for {}", request.path),
            })
    }
}
