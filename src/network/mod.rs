//! REST request plumbing.
//!
//! Remotes describe what they want as a [`Request`] and hand it to a
//! [`Network`]. The network only moves bytes: validation and decoding happen
//! in the caller so error envelopes are seen before any mapper runs.

mod error;
mod http;
mod request;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

pub use error::NetworkError;
pub use http::HttpNetwork;
pub use request::{Api, Method, Request};

/// Transport seam between remotes and the wire.
#[async_trait]
pub trait Network: Send + Sync {
    /// Perform one exchange and return the raw response body.
    ///
    /// The future resolves exactly once. Bodies of failed responses are
    /// returned as long as they carry a backend error envelope.
    async fn response_data(&self, request: Request) -> Result<Vec<u8>, NetworkError>;
}
