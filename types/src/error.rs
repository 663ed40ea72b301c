//! Local selection errors. These never reach the network.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Unsupported format (use JPG or PNG), got {0:?}")]
    UnsupportedType(String),

    #[error("File is too large: {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },
}
