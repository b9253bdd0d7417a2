//! Error types and JSON error responses for the mock API server.

use std::net::AddrParseError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Request-level failures, rendered as `{"message": ...}`.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{label} not found")]
    NotFound { label: &'static str },

    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServerError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "message": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}

/// Failures that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid bind address '{addr}': {source}")]
    InvalidAddr {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    #[error("could not find available port in range {start}-{end}")]
    NoFreePort { start: u16, end: u16 },

    #[error("try_bind() must be called before run()")]
    NotBound,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
