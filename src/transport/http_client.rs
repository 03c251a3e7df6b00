use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::session::Session;
use crate::transport::HttpTransport;
use async_trait::async_trait;
use reqwest::{Client as HttpInternalClient, Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Reqwest-backed transport for the Nightrader backend
///
/// Handles URL joining, the bearer token header, and decoding of the
/// `{success, data}` response envelope. The backend may report application
/// failures with a 2xx status and `success: false`; the envelope decides the
/// outcome, the HTTP status only refines the error class.
pub struct RestClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl RestClient {
    /// Creates a new transport from the given configuration
    pub fn new(config: Arc<Config>) -> Self {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            config,
        }
    }

    fn build_url(&self, path: &str) -> String {
        let base = self.config.rest_api.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[async_trait]
impl HttpTransport for RestClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
        body: Option<Value>,
    ) -> Result<Value, AppError> {
        let url = self.build_url(path);
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header("Content-Type", "application/json; charset=UTF-8")
            .header("Accept", "application/json; charset=UTF-8");

        if let Some(session) = session {
            request = request.header("Authorization", format!("Bearer {}", session.token));
        }

        if let Some(b) = &body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let text = response.text().await?;
        decode_envelope(status, &text)
    }
}

/// Decodes a raw response body against the backend envelope.
///
/// On `success: true` the payload under `data` is returned. On a failure
/// envelope the backend message is extracted verbatim; a 401 classifies it as
/// an authentication error, anything else as a backend error. Bodies that are
/// not an envelope at all map to status-based errors.
pub fn decode_envelope(status: StatusCode, text: &str) -> Result<Value, AppError> {
    let parsed: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            if status.is_success() {
                return Err(AppError::Deserialization(e.to_string()));
            }
            error!("Request failed with status {}: {}", status, text);
            return Err(AppError::Unexpected(status));
        }
    };

    let success = parsed
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if success {
        return Ok(parsed.get("data").cloned().unwrap_or(Value::Null));
    }

    let message = failure_message(&parsed);
    error!("Backend reported failure (status {}): {}", status, message);

    if status == StatusCode::UNAUTHORIZED {
        return Err(AppError::Unauthorized(message));
    }
    Err(AppError::Backend(message))
}

/// Pulls the human-readable message out of a failure envelope.
///
/// The backend is not consistent: errors arrive as `data.error`, as a
/// top-level `message`, or as a bare `error` field. Whatever is found is
/// forwarded verbatim.
fn failure_message(body: &Value) -> String {
    if let Some(msg) = body
        .get("data")
        .and_then(|d| d.get("error"))
        .and_then(Value::as_str)
    {
        return msg.to_string();
    }
    if let Some(msg) = body.get("message").and_then(Value::as_str) {
        return msg.to_string();
    }
    if let Some(msg) = body.get("error").and_then(Value::as_str) {
        return msg.to_string();
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_yields_data() {
        let data = decode_envelope(StatusCode::OK, r#"{"success":true,"data":{"balance":100.0}}"#)
            .expect("should decode");
        assert_eq!(data, json!({"balance": 100.0}));
    }

    #[test]
    fn success_without_data_yields_null() {
        let data = decode_envelope(StatusCode::OK, r#"{"success":true}"#).expect("should decode");
        assert!(data.is_null());
    }

    #[test]
    fn failure_envelope_forwards_data_error_verbatim() {
        let err = decode_envelope(
            StatusCode::OK,
            r#"{"success":false,"data":{"error":"Insufficient funds"}}"#,
        )
        .unwrap_err();
        match err {
            AppError::Backend(msg) => assert_eq!(msg, "Insufficient funds"),
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn failure_envelope_falls_back_to_message_field() {
        let err = decode_envelope(
            StatusCode::BAD_REQUEST,
            r#"{"success":false,"data":null,"message":"Invalid token"}"#,
        )
        .unwrap_err();
        match err {
            AppError::Backend(msg) => assert_eq!(msg, "Invalid token"),
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unauthorized_status_maps_to_unauthorized() {
        let err = decode_envelope(
            StatusCode::UNAUTHORIZED,
            r#"{"success":false,"data":null,"message":"Token expired"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(msg) if msg == "Token expired"));
    }

    #[test]
    fn non_json_error_body_maps_to_unexpected() {
        let err = decode_envelope(StatusCode::BAD_GATEWAY, "upstream down").unwrap_err();
        assert!(matches!(err, AppError::Unexpected(StatusCode::BAD_GATEWAY)));
    }

    #[test]
    fn non_json_success_body_maps_to_deserialization() {
        let err = decode_envelope(StatusCode::OK, "<html></html>").unwrap_err();
        assert!(matches!(err, AppError::Deserialization(_)));
    }
}
