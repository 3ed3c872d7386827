//! HTTP GET seam for the feed endpoints.
//!
//! Client-side (csr): real requests via `gloo-net`.
//! Native builds: [`HttpTransport`] reports [`FeedError::Unavailable`] so
//! callers fall through to their fallback paths.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and JSON decode failures each map to
//! a distinct [`FeedError`] kind. Nothing here retries or times out.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use super::error::FeedError;

/// Source of raw feed bodies.
///
/// Futures are `!Send`: everything runs on the browser's single event loop.
pub trait FeedTransport: Send + Sync {
    /// Issue one GET to `url` and return the response body.
    fn get_text<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<String, FeedError>>;
}

/// Browser `fetch` transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl FeedTransport for HttpTransport {
    fn get_text<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<String, FeedError>> {
        Box::pin(async move {
            #[cfg(feature = "csr")]
            {
                let resp = gloo_net::http::Request::get(url)
                    .send()
                    .await
                    .map_err(|e| FeedError::Request { url: url.to_owned(), reason: e.to_string() })?;
                if !resp.ok() {
                    return Err(FeedError::Status { url: url.to_owned(), status: resp.status() });
                }
                resp.text()
                    .await
                    .map_err(|e| FeedError::Request { url: url.to_owned(), reason: e.to_string() })
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = url;
                Err(FeedError::Unavailable)
            }
        })
    }
}

/// Fetch `url` and decode the body as JSON.
///
/// # Errors
///
/// Propagates transport errors; a body that does not decode as `T` becomes
/// [`FeedError::MalformedPayload`].
pub async fn get_json<T: DeserializeOwned>(transport: &dyn FeedTransport, url: &str) -> Result<T, FeedError> {
    let body = transport.get_text(url).await?;
    decode_json(url, &body)
}

pub(crate) fn decode_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, FeedError> {
    serde_json::from_str(body).map_err(|e| FeedError::MalformedPayload { url: url.to_owned(), reason: e.to_string() })
}
