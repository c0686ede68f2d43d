use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenFilterError {
    #[error("Record '{record}' is missing required field '{field}'")]
    MissingField { record: String, field: &'static str },

    #[error("Invalid threshold '{name}': {value} (must be a non-negative finite number)")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("Invalid threshold '{name}': '{raw}' is not a number")]
    UnparseableThreshold { name: &'static str, raw: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Market data provider error: {0}")]
    Provider(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Security error: {0}")]
    SecurityError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TokenFilterError>;

impl TokenFilterError {
    /// HTTP status a web handler should answer with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            TokenFilterError::MissingField { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            TokenFilterError::InvalidThreshold { .. }
            | TokenFilterError::UnparseableThreshold { .. } => StatusCode::BAD_REQUEST,
            TokenFilterError::Http(_)
            | TokenFilterError::Provider(_)
            | TokenFilterError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            TokenFilterError::SecurityError(_) => StatusCode::FORBIDDEN,
            TokenFilterError::Serialization(_)
            | TokenFilterError::Config(_)
            | TokenFilterError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error type returned by JSON API handlers.
#[derive(Debug)]
pub struct ApiError(pub TokenFilterError);

impl From<TokenFilterError> for ApiError {
    fn from(err: TokenFilterError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self.0, "request failed");
        }
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
