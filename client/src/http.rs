//! reqwest-backed transport.

use reqwest::multipart::{Form, Part};
use tracing::debug;

use mever_types::{HealthStatus, ImageUpload};

use crate::config::ClientConfig;
use crate::error::{ClientError, TransportError, VerifyError};
use crate::response::interpret_health;
use crate::transport::{RawResponse, VerifyTransport};

/// Name of the multipart field carrying the image.
pub const IMAGE_FIELD: &str = "image";

/// HTTP transport for the verification service.
///
/// Wraps `reqwest::Client` (a reusable connection pool) with the service's
/// base URL.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport with the timeouts from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn read(response: reqwest::Response) -> Result<RawResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(RawResponse::new(status, body.to_vec()))
    }
}

impl VerifyTransport for HttpTransport {
    async fn verify(&self, upload: &ImageUpload) -> Result<RawResponse, TransportError> {
        let url = self.endpoint("verify");
        let part = Part::bytes(upload.data.to_vec())
            .file_name(upload.file_name.clone())
            .mime_str(upload.media_type.as_mime())
            .map_err(|e| TransportError::Request(e.to_string()))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        debug!(%url, file = %upload.file_name, bytes = upload.len(), "posting image");
        let response = self.http.post(&url).multipart(form).send().await?;
        Self::read(response).await
    }

    async fn health(&self) -> Result<HealthStatus, VerifyError> {
        let url = self.endpoint("healthz");
        debug!(%url, "probing service health");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(TransportError::from)?;
        let raw = Self::read(response).await?;
        interpret_health(&raw)
    }

    fn name(&self) -> &str {
        "http"
    }
}
