//! Nullable transport — scripted responses, recorded uploads.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Semaphore;

use mever_client::{RawResponse, TransportError, VerifyError, VerifyTransport};
use mever_types::{HealthStatus, ImageUpload};

/// Holds scripted requests in flight until released.
///
/// Each [`TransportGate::release`] lets exactly one pending request complete.
#[derive(Clone)]
pub struct TransportGate {
    permits: Arc<Semaphore>,
}

impl TransportGate {
    fn new() -> Self {
        Self {
            permits: Arc::new(Semaphore::new(0)),
        }
    }

    /// Let one held request complete.
    pub fn release(&self) {
        self.permits.add_permits(1);
    }

    async fn pass(&self) {
        if let Ok(permit) = self.permits.acquire().await {
            permit.forget();
        }
    }
}

/// A verification transport that replays scripted outcomes in order.
///
/// Uploads are recorded before the (optional) gate, so a test can observe a
/// request while it is still in flight.
pub struct NullTransport {
    responses: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
    health: RefCell<Option<Result<HealthStatus, VerifyError>>>,
    uploads: RefCell<Vec<ImageUpload>>,
    gate: Option<TransportGate>,
}

impl NullTransport {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(VecDeque::new()),
            health: RefCell::new(None),
            uploads: RefCell::new(Vec::new()),
            gate: None,
        }
    }

    /// A transport whose requests wait on the returned gate.
    pub fn gated() -> (Self, TransportGate) {
        let gate = TransportGate::new();
        let transport = Self {
            gate: Some(gate.clone()),
            ..Self::new()
        };
        (transport, gate)
    }

    /// Queue a completed exchange.
    pub fn respond(self, response: RawResponse) -> Self {
        self.responses.borrow_mut().push_back(Ok(response));
        self
    }

    /// Queue a completed exchange with a JSON body.
    pub fn respond_json(self, status: u16, body: serde_json::Value) -> Self {
        self.respond(RawResponse::json(status, &body))
    }

    /// Queue a request that never completes.
    pub fn fail(self, error: TransportError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    /// Set the outcome of every health check.
    pub fn with_health(self, health: Result<HealthStatus, VerifyError>) -> Self {
        *self.health.borrow_mut() = Some(health);
        self
    }

    /// All uploads received so far (for assertions).
    pub fn uploads(&self) -> Vec<ImageUpload> {
        self.uploads.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.uploads.borrow().len()
    }

    /// Scripted outcomes not yet consumed.
    pub fn pending_responses(&self) -> usize {
        self.responses.borrow().len()
    }
}

impl Default for NullTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl VerifyTransport for NullTransport {
    async fn verify(&self, upload: &ImageUpload) -> Result<RawResponse, TransportError> {
        self.uploads.borrow_mut().push(upload.clone());
        if let Some(gate) = &self.gate {
            gate.pass().await;
        }
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no scripted response".into())))
    }

    async fn health(&self) -> Result<HealthStatus, VerifyError> {
        self.health
            .borrow()
            .clone()
            .unwrap_or_else(|| Err(TransportError::Connect("no scripted health".into()).into()))
    }

    fn name(&self) -> &str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mever_types::FileSelection;
    use serde_json::json;

    fn upload() -> ImageUpload {
        FileSelection::new("face.jpg", "image/jpeg", vec![1u8, 2, 3])
            .accept(1024)
            .unwrap()
    }

    #[tokio::test]
    async fn replays_in_order_and_records() {
        let transport = NullTransport::new()
            .respond_json(200, json!({"ok": true}))
            .fail(TransportError::Timeout("slow".into()));

        let first = transport.verify(&upload()).await.unwrap();
        assert_eq!(first.status, 200);
        let second = transport.verify(&upload()).await.unwrap_err();
        assert_eq!(second, TransportError::Timeout("slow".into()));

        assert_eq!(transport.request_count(), 2);
        assert_eq!(transport.pending_responses(), 0);
        assert_eq!(transport.uploads()[0].file_name, "face.jpg");
    }

    #[tokio::test]
    async fn exhausted_script_is_transport_error() {
        let transport = NullTransport::new();
        assert!(matches!(
            transport.verify(&upload()).await,
            Err(TransportError::Request(_))
        ));
    }

    #[tokio::test]
    async fn gate_holds_request_until_released() {
        let (transport, gate) = NullTransport::gated();
        let transport = transport.respond(RawResponse::new(204, ""));

        let upload = upload();
        let (response, observed) = tokio::join!(transport.verify(&upload), async {
            let in_flight = transport.request_count();
            gate.release();
            in_flight
        });
        assert_eq!(observed, 1);
        assert_eq!(response.unwrap().status, 204);
    }

    #[tokio::test]
    async fn health_defaults_to_unreachable() {
        let transport = NullTransport::new();
        assert!(matches!(
            transport.health().await,
            Err(VerifyError::Transport(_))
        ));
    }
}
