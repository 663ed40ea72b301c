//! Records returned by the verification service.

use serde::{Deserialize, Serialize};

/// Response of `POST /verify` on success.
///
/// Rendered and discarded, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Whether the image matches the enrolled identity.
    pub is_me: bool,
    /// Classifier confidence.
    pub score: f64,
    /// Decision threshold the score was compared against.
    pub threshold: f64,
    /// Server-side processing time in milliseconds.
    pub timing_ms: f64,
}

/// Optional JSON body of a non-success response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `GET /healthz`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model: String,
    pub threshold: f64,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
