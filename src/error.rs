use thiserror::Error;

/// Errors surfaced by the relay service.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("upstream failure: {0}")]
    Upstream(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Error::Upstream(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// The caller-facing description carried in the JSON error body.
    pub fn message(&self) -> &str {
        match self {
            Error::InvalidInput(message)
            | Error::Upstream(message)
            | Error::Config(message) => message,
        }
    }
}

// Transport failures (including the client timeout) are upstream failures as
// far as the caller is concerned.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Upstream("request to provider timed out".to_string())
        } else {
            Error::Upstream(err.to_string())
        }
    }
}
