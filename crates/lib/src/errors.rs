use thiserror::Error;

/// The two ways fetching a page can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No usable response: DNS, connection, timeout or a non-2xx status.
    #[error("request failed: {0}")]
    Request(String),
    /// A response arrived but its body is not a page summary.
    #[error("invalid page summary: {0}")]
    Validation(String),
}

impl FetchError {
    pub fn is_request(&self) -> bool {
        matches!(self, FetchError::Request(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FetchError::Validation(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err.to_string())
    }
}
