use thiserror::Error;

/// Errors that can stop the animator from mounting or a control payload
/// from being read. Nothing inside a running animation produces one.
#[derive(Debug, Error)]
pub enum RevealError {
    /// A required page element is not in the document.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// The canvas exists but no 2D drawing context could be obtained.
    #[error("no 2d rendering context available")]
    MissingContext,

    /// A host API call failed (the message is whatever the host reported).
    #[error("host error: {0}")]
    Host(String),

    /// A JSON control payload could not be parsed.
    #[error("invalid control payload: {0}")]
    Controls(#[from] serde_json::Error),
}
