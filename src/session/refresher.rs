use crate::domain_model::{AccessToken, OutboundRequest};
use crate::domain_port::{HttpTransport, StorageError, TransportError};
use crate::session::SessionContext;
use http::StatusCode;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub const REFRESH_PATH: &str = "/auth/refresh";

/// How concurrent 401s share refresh work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshPolicy {
    /// Every rejected request calls the refresh endpoint itself: each first
    /// 401 makes exactly one refresh call.
    Independent,
    /// Refreshes run one at a time; a request whose token was already replaced
    /// by another flow reuses the replacement and makes no refresh call of its
    /// own. Still at most one refresh per request.
    #[default]
    Coalesced,
}

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("refresh request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("refresh rejected with status {status}")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("refresh response carries no access token")]
    MissingToken,
    #[error("refresh response is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("refreshed token could not be stored: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshResponse {
    access_token: Option<AccessToken>,
}

/// Performs Refresh Attempts against `/auth/refresh`.
///
/// The call carries no bearer header; the session proof is the cookie the
/// transport sends along.
pub struct Refresher {
    transport: Arc<dyn HttpTransport>,
    session: Arc<SessionContext>,
    policy: RefreshPolicy,
    gate: Mutex<()>,
}

impl Refresher {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        session: Arc<SessionContext>,
        policy: RefreshPolicy,
    ) -> Self {
        Refresher {
            transport,
            session,
            policy,
            gate: Mutex::new(()),
        }
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    /// Obtains a fresh token for a request that was rejected while carrying
    /// `sent_with`. On success the token is already stored.
    pub async fn refresh(
        &self,
        sent_with: Option<&AccessToken>,
    ) -> Result<AccessToken, RefreshError> {
        match self.policy {
            RefreshPolicy::Independent => self.refresh_now().await,
            RefreshPolicy::Coalesced => {
                let _guard = self.gate.lock().await;
                if let Some(current) = self.session.access_token().await? {
                    if Some(&current) != sent_with {
                        debug!("token already replaced by a concurrent refresh");
                        return Ok(current);
                    }
                }
                self.refresh_now().await
            }
        }
    }

    async fn refresh_now(&self) -> Result<AccessToken, RefreshError> {
        let request = OutboundRequest::post(REFRESH_PATH).json(&serde_json::json!({}))?;
        debug!(request_id = %request.id, "calling refresh endpoint");

        let response = self.transport.send(&request).await?;
        if !response.is_success() {
            return Err(RefreshError::Rejected {
                status: response.status,
                message: response.message(),
            });
        }

        let body: RefreshResponse = response.json()?;
        let token = body
            .access_token
            .filter(|t| !t.is_blank())
            .ok_or(RefreshError::MissingToken)?;
        self.session.store_token(&token).await?;
        info!("access token refreshed");
        Ok(token)
    }
}
