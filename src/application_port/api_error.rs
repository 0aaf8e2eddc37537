use crate::client::ClientError;
use http::StatusCode;

/// Error surfaced by resource services.
///
/// `message` values come from the server's `message` field when it sent one.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401 on a call that does not go through session recovery, e.g. bad
    /// credentials at login.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// The session could not be recovered; the token has been cleared.
    #[error("session expired: {0}")]
    SessionExpired(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("http error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::Conflict(_) => Some(409),
            ApiError::NotFound(_) => Some(404),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn encode(e: serde_json::Error) -> Self {
        ApiError::Internal(format!("cannot encode request body: {e}"))
    }
}

fn message_or_default(response: &crate::domain_model::HttpResponse) -> String {
    response
        .message()
        .unwrap_or_else(|| format!("request failed with status {}", response.status))
}

impl From<ClientError> for ApiError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Status(response) => {
                let message = message_or_default(&response);
                match response.status {
                    StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                        ApiError::Validation(message)
                    }
                    StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
                    StatusCode::FORBIDDEN => ApiError::Forbidden(message),
                    StatusCode::NOT_FOUND => ApiError::NotFound(message),
                    StatusCode::CONFLICT => ApiError::Conflict(message),
                    status => ApiError::Http {
                        status: status.as_u16(),
                        message,
                    },
                }
            }
            ClientError::SessionExpired(response) => {
                ApiError::SessionExpired(message_or_default(&response))
            }
            ClientError::Refresh(e) => ApiError::SessionExpired(e.to_string()),
            ClientError::Transport(e) => ApiError::Network(e.to_string()),
            ClientError::Storage(e) => ApiError::Internal(e.to_string()),
            ClientError::Json(e) => ApiError::Decode(e.to_string()),
            ClientError::InvalidRequest(e) => ApiError::Internal(e),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl From<garde::Report> for ApiError {
    fn from(report: garde::Report) -> Self {
        ApiError::Validation(report.to_string())
    }
}
