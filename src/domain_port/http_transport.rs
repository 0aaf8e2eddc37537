use crate::domain_model::{HttpResponse, OutboundRequest};
use crate::domain_port::StorageError;

/// Sends one request to the remote API.
///
/// Every HTTP status is an `Ok` response; only failures to obtain a response at
/// all are errors. Implementations include ambient session cookies.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: &OutboundRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("cookie jar: {0}")]
    Cookies(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
