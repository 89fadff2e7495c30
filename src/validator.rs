//! Backend error envelope detection.
//!
//! Both APIs report failures inside the response body, sometimes with a 200
//! status. [`validate`] looks for the known envelopes and raises them; any
//! other payload (including non-JSON) passes untouched.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Error reported by the WordPress.com API as `{"error": "<code>", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DotcomError {
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },
    #[error("Invalid token: {message}")]
    InvalidToken { message: String },
    #[error("Authorization required: {message}")]
    AuthorizationRequired { message: String },
    #[error("No route matches the request: {message}")]
    NoRestRoute { message: String },
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
    #[error("Dotcom error '{code}': {message}")]
    Unknown { code: String, message: String },
}

impl DotcomError {
    fn from_envelope(code: String, message: String) -> Self {
        match code.as_str() {
            "unauthorized" => DotcomError::Unauthorized { message },
            "invalid_token" => DotcomError::InvalidToken { message },
            "authorization_required" => DotcomError::AuthorizationRequired { message },
            "rest_no_route" => DotcomError::NoRestRoute { message },
            "invalid_input" => DotcomError::InvalidInput { message },
            _ => DotcomError::Unknown { code, message },
        }
    }
}

/// Error reported by the domain API as
/// `{"code": "...", "message": "...", "data": {"status": 400}}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("API error '{code}': {message}")]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub status: Option<u16>,
}

/// Any error a backend reported in its response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Dotcom(#[from] DotcomError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Deserialize)]
struct DotcomEnvelope {
    error: String,
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct ApiEnvelope {
    code: String,
    message: String,
    #[serde(default)]
    data: Option<ApiEnvelopeData>,
}

#[derive(Deserialize)]
struct ApiEnvelopeData {
    #[serde(default)]
    status: Option<u16>,
}

/// Raise the backend error carried by `response`, if any.
pub fn validate(response: &[u8]) -> Result<(), ServiceError> {
    match classify(response) {
        Some(error) => {
            tracing::warn!(error = %error, "Backend reported error");
            Err(error)
        }
        None => Ok(()),
    }
}

/// Whether `response` carries one of the recognised error envelopes.
pub fn contains_error_envelope(response: &[u8]) -> bool {
    classify(response).is_some()
}

/// Envelopes are JSON objects; serde would otherwise also accept a JSON
/// array for a struct, matching fields by position.
fn classify(response: &[u8]) -> Option<ServiceError> {
    let value = serde_json::from_slice::<Value>(response).ok()?;
    if !value.is_object() {
        return None;
    }

    if let Ok(envelope) = DotcomEnvelope::deserialize(&value) {
        return Some(DotcomError::from_envelope(envelope.error, envelope.message).into());
    }

    if let Ok(envelope) = ApiEnvelope::deserialize(&value) {
        return Some(
            ApiError {
                code: envelope.code,
                message: envelope.message,
                status: envelope.data.and_then(|data| data.status),
            }
            .into(),
        );
    }

    None
}
