use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Required field absent or of the wrong shape.
    #[error("{0}")]
    Validation(String),
    /// Anything that went wrong reading the body or talking to the backend.
    /// Only `message` reaches the client.
    #[error("{message}: {source}")]
    Upstream {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    pub fn upstream(message: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Upstream {
            message,
            source: source.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(reason) => (StatusCode::BAD_REQUEST, reason).into_response(),
            Self::Upstream { message, source } => {
                error!("{}: {:#}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
