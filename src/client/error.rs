use crate::domain_model::HttpResponse;
use crate::domain_port::{StorageError, TransportError};
use crate::session::RefreshError;
use http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Non-2xx response other than a session failure, returned verbatim.
    #[error("request failed with status {}", .0.status)]
    Status(HttpResponse),
    /// 401 on a request that had already been resent after a refresh.
    #[error("session expired: request rejected after refresh")]
    SessionExpired(HttpResponse),
    #[error("session expired: {0}")]
    Refresh(#[from] RefreshError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status(response) | ClientError::SessionExpired(response) => {
                Some(response.status)
            }
            _ => None,
        }
    }

    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            ClientError::Status(response) | ClientError::SessionExpired(response) => {
                Some(response)
            }
            _ => None,
        }
    }
}
