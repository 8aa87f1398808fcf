//! Error types for quantification

use liuyao_domain::InvalidBranchError;
use thiserror::Error;

/// Errors that can occur while quantifying a reading
#[derive(Error, Debug)]
pub enum QuantifyError {
    /// Response is not a usable quantification object
    #[error("Invalid quantification format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// A field held something other than an Earthly Branch
    #[error("Field '{field}': {source}")]
    InvalidBranch {
        /// Field the token came from (e.g. `月建`, `动爻列表[2]`)
        field: String,
        /// Underlying domain error
        source: InvalidBranchError,
    },
}

impl From<serde_json::Error> for QuantifyError {
    fn from(e: serde_json::Error) -> Self {
        QuantifyError::JsonParse(e.to_string())
    }
}
