use thiserror::Error;

/// Failure surfaced by message assembly, configuration, or delivery.
#[derive(Debug, Error)]
pub enum SlackError {
    /// Input rejected before any network activity. Never retried.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transport-level failure: connection refused, DNS, timeout.
    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    /// The platform answered but rejected the message, either with a
    /// non-2xx status or an `ok: false` acknowledgment.
    #[error("Slack API returned an error: {0}")]
    ApiError(String),

    /// Every configured attempt failed; carries the last underlying error.
    #[error("Failed to send message after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<SlackError>,
    },

    /// The caller's cancellation signal fired before an attempt or while
    /// waiting between retries.
    #[error("Cancelled while waiting to retry")]
    Cancelled,
}

impl SlackError {
    /// Whether the delivery loop would try again after this error.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, SlackError::HttpError(_) | SlackError::ApiError(_))
    }
}

impl From<reqwest::Error> for SlackError {
    fn from(error: reqwest::Error) -> Self {
        SlackError::HttpError(error.to_string())
    }
}
