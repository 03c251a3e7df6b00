//! HTTP transport seam
//!
//! Services talk to the backend through the [`HttpTransport`] trait so that
//! tests can substitute a scripted double. The production implementation is
//! [`http_client::RestClient`], a thin reqwest wrapper that understands the
//! backend's `{success, data}` envelope.

/// Reqwest implementation of the transport
pub mod http_client;

pub use http_client::RestClient;

use crate::error::AppError;
use crate::session::Session;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

/// One authorized request/response round trip against the backend.
///
/// Implementations return the payload found under the envelope's `data` field
/// on success, and map every failure (network, non-2xx, `success: false`) to a
/// single [`AppError`] carrying a user-displayable message. There is no retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a request and unwraps the response envelope
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the configured base URL
    /// * `session` - Session whose token authorizes the call, if required
    /// * `body` - JSON body for POST requests
    async fn request(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
        body: Option<Value>,
    ) -> Result<Value, AppError>;
}
