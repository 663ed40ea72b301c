//! Client for the image verification service.
//!
//! The service exposes two endpoints:
//! - `POST /verify` — multipart body with the image under `image`; returns
//!   `{ is_me, score, threshold, timing_ms }` or a non-2xx status with an
//!   optional `{ error }` body.
//! - `GET /healthz` — `{ status, model, threshold }`.
//!
//! [`VerifyTransport`] is the seam between request handling and the wire;
//! [`HttpTransport`] is the reqwest implementation and tests swap in a
//! nullable one.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod response;
pub mod transport;

pub use client::VerifyClient;
pub use config::ClientConfig;
pub use error::{ClientError, TransportError, VerifyError, FALLBACK_MESSAGE, NETWORK_MESSAGE};
pub use http::HttpTransport;
pub use response::{interpret_health, interpret_response};
pub use transport::{RawResponse, VerifyTransport};
