use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Error taxonomy for the summarization workflow.
///
/// `Validation`, `Transport`, `Payload` and `Unknown` are the request-level
/// kinds; they are all collapsed into a single user-visible message at the
/// workflow boundary and never crash the UI. The remaining variants cover
/// startup concerns (config, terminal IO).
#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected before any network call was made (e.g. empty URL).
    #[error("{0}")]
    Validation(String),

    /// The request failed or the server answered with a non-2xx status.
    /// Carries the most specific message available: the server-supplied
    /// `error` field when the body decoded, the status line otherwise.
    #[error("{0}")]
    Transport(String),

    /// The response decoded but is missing required fields.
    #[error("{0}")]
    Payload(String),

    #[error("{0}")]
    Unknown(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
