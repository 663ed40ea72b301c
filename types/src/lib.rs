//! Fundamental types for the mever verification client.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! allow-listed media types, file selections and accepted uploads, the
//! verification and health records returned by the service, and the local
//! selection errors.

pub mod error;
pub mod media;
pub mod upload;
pub mod verdict;

pub use error::SelectionError;
pub use media::{declared_type_for_path, MediaType};
pub use upload::{FileSelection, ImageUpload, DEFAULT_MAX_UPLOAD_BYTES};
pub use verdict::{ErrorBody, HealthStatus, VerificationResult};
