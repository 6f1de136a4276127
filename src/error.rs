//! Common error types for petlens

use thiserror::Error;

/// Common result type for petlens operations
pub type Result<T> = std::result::Result<T, ClassifyError>;

/// Terminal failure causes for a per-image pipeline.
///
/// `Display` strings are shown verbatim on the failed item, so each variant
/// renders as a short human-readable message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    /// The image file could not be read or encoded.
    #[error("Could not read image file: {0}")]
    Read(String),

    /// The service answered but reported it could not classify the image.
    #[error("{0}")]
    Service(String),

    /// The request never completed (unreachable service, timeout).
    #[error("Could not connect to the classification service")]
    Transport,

    /// Configuration loading or validation error.
    #[error("Configuration error: {0}")]
    Config(String),
}
