/// Failure of a single classification request.
///
/// Every variant is terminal for the request it belongs to. The `Display`
/// text is what ends up in the scientific-name field of the results view.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// The endpoint answered with a non-2xx status.
    #[error("Server error: {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body was not a valid classification response.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The file could not be read from disk.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ClassifyError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ClassifyError::Status(status.as_u16()),
            None => ClassifyError::Transport(err),
        }
    }
}

/// Errors raised by the fact carousel.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("carousel needs at least one panel")]
    Empty,

    #[error("indicator index {index} is out of range for {count} panels")]
    OutOfRange { index: usize, count: usize },

    #[error("invalid indicator index {0:?}")]
    InvalidIndicator(String),

    #[error("rotation interval must be greater than zero")]
    ZeroInterval,
}
