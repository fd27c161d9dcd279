use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure a client call can end in. All variants are terminal for the
/// current invocation; there is no retry path.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid {field} '{value}', valid options: {options}")]
    InvalidArgument {
        field: &'static str,
        value: String,
        options: &'static str,
    },
    #[error("session file '{path}' not found")]
    SessionFileNotFound { path: String },
    #[error("session file '{path}' is empty")]
    SessionFileEmpty { path: String },
    #[error("failed to read session file '{path}'")]
    SessionFileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write session file '{path}'")]
    SessionFileWrite {
        path: String,
        source: std::io::Error,
    },
    #[error("session not loaded, load a session before calling the API")]
    SessionNotLoaded,
    #[error("session is invalid or expired")]
    SessionInvalid,
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The raw body is kept so the caller can show what the API actually sent.
    #[error("failed to parse API response: {source}")]
    Parse {
        body: String,
        source: serde_json::Error,
    },
    #[error("{0}")]
    Api(String),
}
