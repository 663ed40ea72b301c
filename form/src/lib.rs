//! Verification form controller.
//!
//! Reacts to two user events:
//! - file selection — allow-list and size check, local preview, enable submit
//! - submit — busy-guarded upload through a [`mever_client::VerifyTransport`],
//!   then render either the verdict or a user-facing error
//!
//! The controller is single-threaded: state lives in `Cell`/`RefCell` and
//! every handler takes `&self`, so handlers can interleave on one task
//! while a request is in flight.

mod busy;
pub mod controller;
pub mod preview;
pub mod view;

pub use controller::{FormOptions, IgnoreReason, SubmitOutcome, VerificationForm};
pub use preview::data_uri;
pub use view::{Badge, FormView, ResultPanel};
