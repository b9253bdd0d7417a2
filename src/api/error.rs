use thiserror::Error;

/// Errors returned by remote CRUD calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered 404 for this record.
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    /// Network failure, timeout, or any other non-success response.
    /// `status` is `None` when no response was received.
    #[error("{}", transport_message(.status, .message))]
    Transport { status: Option<u16>, message: String },
}

fn transport_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("request failed ({code}): {message}"),
        None => format!("request failed: {message}"),
    }
}

impl ApiError {
    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        ApiError::Transport {
            status,
            message: message.into(),
        }
    }

    /// HTTP-like status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::Transport { status, .. } => *status,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else if err.is_decode() {
            format!("invalid response body: {err}")
        } else {
            err.to_string()
        };
        ApiError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message,
        }
    }
}
