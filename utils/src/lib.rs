//! Shared utilities for the mever workspace.

pub mod format;
pub mod logging;

pub use format::{format_latency, format_score, format_threshold, to_fixed};
pub use logging::{init_logging, LogFormat};
