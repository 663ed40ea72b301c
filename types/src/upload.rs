//! File selections and the uploads accepted from them.

use std::sync::Arc;

use crate::error::SelectionError;
use crate::media::MediaType;

/// Default upload limit, matching the service's 5 MB cap.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// A file exactly as the user picked it: name, declared type, bytes.
#[derive(Clone, Debug)]
pub struct FileSelection {
    pub file_name: String,
    pub declared_type: String,
    pub data: Arc<[u8]>,
}

impl FileSelection {
    pub fn new(
        file_name: impl Into<String>,
        declared_type: impl Into<String>,
        data: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            declared_type: declared_type.into(),
            data: data.into(),
        }
    }

    /// Validate against the allow-list and the size limit.
    ///
    /// The type check runs first, so an oversized GIF reports the type.
    pub fn accept(self, max_bytes: usize) -> Result<ImageUpload, SelectionError> {
        let media_type = MediaType::from_mime(&self.declared_type)?;
        if self.data.len() > max_bytes {
            return Err(SelectionError::TooLarge {
                size: self.data.len(),
                limit: max_bytes,
            });
        }
        Ok(ImageUpload {
            file_name: self.file_name,
            media_type,
            data: self.data,
        })
    }
}

/// A selection that passed local validation and may be sent to `/verify`.
///
/// Cloning is cheap: the bytes are shared.
#[derive(Clone, Debug)]
pub struct ImageUpload {
    pub file_name: String,
    pub media_type: MediaType,
    pub data: Arc<[u8]>,
}

impl ImageUpload {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
