use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("connection error: {0}")]
    Connection(String),

    /// The endpoint answered 503: the model is not yet loaded into serving
    /// memory. Recoverable by resubmitting.
    #[error("model is still loading")]
    ModelLoading,

    #[error("endpoint returned status {status}")]
    UpstreamStatus { status: reqwest::StatusCode },

    #[error("endpoint reported an error: {0}")]
    Upstream(String),

    #[error("malformed response body: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("unexpected response shape")]
    UnexpectedShape,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
