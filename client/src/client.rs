//! Non-interactive verification: validate, send, classify.

use tracing::{info, warn};

use mever_types::{FileSelection, HealthStatus, VerificationResult};

use crate::error::VerifyError;
use crate::response::interpret_response;
use crate::transport::VerifyTransport;

/// One-shot client over any [`VerifyTransport`].
///
/// Applies the same local checks and response handling as the form
/// controller, without any view state.
pub struct VerifyClient<T> {
    transport: T,
    max_upload_bytes: usize,
}

impl<T: VerifyTransport> VerifyClient<T> {
    pub fn new(transport: T, max_upload_bytes: usize) -> Self {
        Self {
            transport,
            max_upload_bytes,
        }
    }

    /// Verify one file. Invalid input fails before any request is made.
    pub async fn verify(
        &self,
        selection: FileSelection,
    ) -> Result<VerificationResult, VerifyError> {
        let upload = selection.accept(self.max_upload_bytes)?;
        let raw = self.transport.verify(&upload).await?;
        let outcome = interpret_response(&raw);
        match &outcome {
            Ok(result) => info!(
                transport = self.transport.name(),
                is_me = result.is_me,
                score = result.score,
                "verification complete"
            ),
            Err(e) => warn!(transport = self.transport.name(), "verification failed: {e}"),
        }
        outcome
    }

    /// Query the service's health endpoint.
    pub async fn health(&self) -> Result<HealthStatus, VerifyError> {
        self.transport.health().await
    }
}
