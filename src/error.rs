use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum LeiaError {
    #[error("missing required environment variable {name}")]
    MissingConfig { name: &'static str },
    #[error("network request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API request failed with status {status}: {body}")]
    Provider {
        status: StatusCode,
        body: serde_json::Value,
    },
    #[error("failed to presign storage URL: {0}")]
    Presign(String),
    #[error("failed to parse API response: {0}")]
    ResponseParseFailed(#[from] serde_json::Error),
    #[error("URL parsing failed: {0}")]
    UrlParseFailed(#[from] url::ParseError),
    #[error("file I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
