use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Timeouts and connection failures; HTTP status errors are never transient.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Ways a transcript lookup can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("Transcripts are disabled for this video")]
    Disabled,

    #[error("Video unavailable")]
    VideoUnavailable,

    #[error("No transcript found for the requested languages")]
    NotFound,

    #[error("{0}")]
    Other(String),
}

/// Text stored in place of a transcript that could not be retrieved.
pub fn transcript_placeholder(error: &TranscriptError) -> String {
    match error {
        TranscriptError::Disabled => "Transcripts are disabled for this video.".to_string(),
        TranscriptError::VideoUnavailable => "The video is unavailable.".to_string(),
        TranscriptError::NotFound => "No transcript is available for this video.".to_string(),
        TranscriptError::Other(message) => format!("An error occurred: {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_placeholders() {
        assert_eq!(
            transcript_placeholder(&TranscriptError::Disabled),
            "Transcripts are disabled for this video."
        );
        assert_eq!(
            transcript_placeholder(&TranscriptError::VideoUnavailable),
            "The video is unavailable."
        );
        assert_eq!(
            transcript_placeholder(&TranscriptError::NotFound),
            "No transcript is available for this video."
        );
        assert_eq!(
            transcript_placeholder(&TranscriptError::Other("too many requests".to_string())),
            "An error occurred: too many requests"
        );
    }

    #[test]
    fn test_non_http_errors_are_not_transient() {
        assert!(!Error::Upstream("apiKeyInvalid".to_string()).is_transient());
        assert!(!Error::HttpStatus { url: "http://test.com".to_string(), status: 503 }.is_transient());
    }
}
