//! Shared test doubles

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Request, Response};

use crate::client::DripClient;
use crate::errors::DripError;
use crate::transport::Transport;

/// Transport double that records call counts and answers every request with
/// an empty 204.
#[derive(Default)]
pub(crate) struct SpyTransport {
    calls: AtomicUsize,
}

impl SpyTransport {
    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for SpyTransport {
    async fn execute(&self, _request: Request) -> Result<Response, DripError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let response = http::Response::builder().status(204).body("").unwrap();
        Ok(Response::from(response))
    }
}

/// A client wired to a spy transport, plus the spy for assertions.
pub(crate) fn client_with_spy() -> (DripClient, Arc<SpyTransport>) {
    let spy = Arc::new(SpyTransport::default());
    let client = DripClient::builder()
        .api_key("test-key")
        .account_id("9999999")
        .transport(spy.clone())
        .build()
        .unwrap();
    (client, spy)
}
