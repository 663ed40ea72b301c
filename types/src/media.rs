//! Allow-listed image media types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::SelectionError;

/// An image media type the verification service accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    /// `image/jpeg`
    Jpeg,
    /// `image/png`
    Png,
}

impl MediaType {
    /// Every accepted type, in display order.
    pub const ALLOWED: [MediaType; 2] = [MediaType::Jpeg, MediaType::Png];

    /// The canonical MIME string.
    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    /// Parse a declared MIME type against the allow-list.
    ///
    /// Only the essence is compared: case is ignored and parameters after
    /// `;` are dropped, so `IMAGE/PNG; charset=binary` is accepted.
    pub fn from_mime(declared: &str) -> Result<Self, SelectionError> {
        let essence = declared
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        Self::ALLOWED
            .into_iter()
            .find(|t| t.as_mime() == essence)
            .ok_or_else(|| SelectionError::UnsupportedType(declared.to_string()))
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mime())
    }
}

/// Declared MIME type for a file on disk, derived from its extension.
///
/// Mirrors what a browser file picker reports: known image extensions map to
/// their own type (and most are then rejected by the allow-list), anything
/// else is `application/octet-stream`.
pub fn declared_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "jpeg" | "jpe" | "jfif") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif" | "tiff") => "image/tiff",
        Some("heic") => "image/heic",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
