use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("API key not set. Run `roas-cli init` to configure.")]
    ApiKeyMissing,

    #[error("Could not parse channel URL: {0}")]
    MalformedReference(String),

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("YouTube API error: {0}")]
    Upstream(String),

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
