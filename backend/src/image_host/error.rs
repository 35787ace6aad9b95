//! Error types for image-host operations

use thiserror::Error;

/// Result type for image-host operations
pub type ImageHostResult<T> = Result<T, ImageHostError>;

/// Errors that can occur while proxying an upload to the image host
#[derive(Error, Debug)]
pub enum ImageHostError {
    /// The HTTP request to the host failed outright
    #[error("Image host request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The host answered with a 5xx status
    #[error("Image host upstream error: {0}")]
    UpstreamError(String),

    /// The host rejected the upload (4xx status)
    #[error("Image host rejected the upload: {0}")]
    RejectedUpload(String),

    /// The host reply carried no usable URL
    #[error("Failed to parse image host response: {0}")]
    ParseResponseError(String),
}
