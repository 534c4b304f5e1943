use thiserror::Error;

/// Failure talking to the remote store. Every variant lands on the generic
/// error outcome; the distinction only matters for logs.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store responded with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
    #[error("store returned a malformed body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl StoreError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            Self::MalformedBody(_) => None,
        }
    }
}
