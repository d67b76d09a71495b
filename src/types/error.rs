use thiserror::Error;

/// otfstats error types
#[derive(Error, Debug)]
pub enum OtfError {
    /// Credentials or tokens were rejected
    #[error("authentication failed (HTTP {status}): {body}")]
    Authentication { status: u16, body: String },

    /// Member or workout resource does not exist
    #[error("not found (HTTP {status}): {body}")]
    NotFound { status: u16, body: String },

    /// Any other non-2xx response
    #[error("unexpected HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Response or file did not have the expected shape
    #[error("malformed data: {0}")]
    MalformedData(String),

    /// Transport-level failure (DNS, TLS, timeout)
    #[error("request error: {0}")]
    Request(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write failure
    #[error("csv error: {0}")]
    Csv(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for OtfError {
    fn from(err: reqwest::Error) -> Self {
        OtfError::Request(err.to_string())
    }
}

impl From<csv::Error> for OtfError {
    fn from(err: csv::Error) -> Self {
        OtfError::Csv(err.to_string())
    }
}

/// Result type alias for otfstats
pub type Result<T> = std::result::Result<T, OtfError>;
