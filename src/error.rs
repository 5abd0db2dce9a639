use thiserror::Error;

#[derive(Debug, Error)]
pub enum PagefreqError {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PagefreqError {
    /// The URL the error belongs to, if it came from processing one.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::InvalidUrl { url, .. }
            | Self::Request { url, .. }
            | Self::Status { url, .. }
            | Self::Body { url, .. } => Some(url),
            Self::Client(_) | Self::Io(_) => None,
        }
    }
}
