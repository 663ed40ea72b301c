//! Interpretation of raw service responses.

use mever_types::{ErrorBody, HealthStatus, VerificationResult};

use crate::error::VerifyError;
use crate::transport::RawResponse;

/// Classify a completed `/verify` exchange.
///
/// - 2xx with a well-formed body: the verdict.
/// - 2xx with anything else: [`VerifyError::InvalidResponse`].
/// - non-2xx: [`VerifyError::Server`] carrying the body's `error` string when
///   the body is JSON and has a non-empty one.
pub fn interpret_response(response: &RawResponse) -> Result<VerificationResult, VerifyError> {
    if response.is_success() {
        return serde_json::from_slice(&response.body)
            .map_err(|e| VerifyError::InvalidResponse(e.to_string()));
    }

    let message = serde_json::from_slice::<ErrorBody>(&response.body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty());
    Err(VerifyError::Server {
        status: response.status,
        message,
    })
}

/// Classify a completed `/healthz` exchange.
pub fn interpret_health(response: &RawResponse) -> Result<HealthStatus, VerifyError> {
    if !response.is_success() {
        return Err(VerifyError::Server {
            status: response.status,
            message: None,
        });
    }
    serde_json::from_slice(&response.body).map_err(|e| VerifyError::InvalidResponse(e.to_string()))
}
