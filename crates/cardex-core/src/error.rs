use thiserror::Error;

/// Application-wide error types for cardex.
#[derive(Error, Debug)]
pub enum AppError {
    /// Browser session failed to launch or configure.
    #[error("Browser error: {0}")]
    Browser(String),

    /// HTTP request or page navigation failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Navigation or rendering did not finish in time.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// A required element was not found under a product card.
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// An element that must carry text had none.
    #[error("Missing text: {0}")]
    MissingText(String),

    /// A matched link carried no usable attribute.
    #[error("Missing attribute: {0}")]
    MissingAttr(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing the output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid runtime configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}
