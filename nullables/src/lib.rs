//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies are abstracted behind traits; this crate provides
//! test-friendly implementations that:
//! - Return scripted values
//! - Record what they were asked to do
//! - Never touch the network
//!
//! Usage: swap [`mever_client::HttpTransport`] for [`NullTransport`] in tests.

pub mod transport;

pub use transport::{NullTransport, TransportGate};
