use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{message} (HTTP {status})")]
    Status { status: StatusCode, message: String },

    #[error("invalid url `{0}`")]
    InvalidUrl(String),
}
