//! Transport seam between request handling and the wire.

use mever_types::{HealthStatus, ImageUpload};

use crate::error::{TransportError, VerifyError};

/// Status and body of a completed HTTP exchange, before interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A response with a JSON body.
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Carries uploads to the verification service.
///
/// Implementations only move bytes: a completed exchange is returned as a
/// [`RawResponse`] whatever its status, and only a request that never
/// completed is a [`TransportError`].
#[allow(async_fn_in_trait)]
pub trait VerifyTransport {
    /// `POST /verify` with the upload as the multipart `image` part.
    async fn verify(&self, upload: &ImageUpload) -> Result<RawResponse, TransportError>;

    /// `GET /healthz`.
    async fn health(&self) -> Result<HealthStatus, VerifyError>;

    /// Human-readable name for logs.
    fn name(&self) -> &str;
}
