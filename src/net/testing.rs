//! In-memory transport for driving feed code in tests.

use std::collections::HashMap;
use std::sync::Mutex;

use futures::future::LocalBoxFuture;

use super::error::FeedError;
use super::transport::FeedTransport;

/// Serves canned bodies per URL and records every request.
///
/// URLs with no canned response fail with a `Request` error.
#[derive(Default)]
pub struct StubTransport {
    responses: HashMap<String, Result<String, FeedError>>,
    calls: Mutex<Vec<String>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_owned(), Ok(body.to_owned()));
        self
    }

    pub fn with_json(self, url: &str, value: &serde_json::Value) -> Self {
        let body = value.to_string();
        self.with_body(url, &body)
    }

    pub fn with_error(mut self, url: &str, err: FeedError) -> Self {
        self.responses.insert(url.to_owned(), Err(err));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls().iter().filter(|u| *u == url).count()
    }
}

impl FeedTransport for StubTransport {
    fn get_text<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<String, FeedError>> {
        self.calls.lock().expect("calls lock").push(url.to_owned());
        let result = self.responses.get(url).cloned().unwrap_or_else(|| {
            Err(FeedError::Request { url: url.to_owned(), reason: "no stub response".to_owned() })
        });
        Box::pin(async move { result })
    }
}
