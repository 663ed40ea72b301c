//! Local preview URIs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use mever_types::ImageUpload;

/// A `data:` URI displaying the upload without any network round-trip.
pub fn data_uri(upload: &ImageUpload) -> String {
    format!(
        "data:{};base64,{}",
        upload.media_type.as_mime(),
        STANDARD.encode(&upload.data)
    )
}
