use crate::client::ClientError;
use crate::domain_model::*;
use crate::domain_port::{HttpTransport, SessionEventSink};
use crate::session::{RefreshPolicy, Refresher, SessionContext};
use chrono::Utc;
use http::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// HTTP client that attaches the session's bearer token to every call and
/// recovers once from an expired session.
///
/// A 401 on a request without the retry marker marks it, refreshes the token
/// and resends it through the same pipeline. A 401 on a marked request, or a
/// failed refresh, clears the token and publishes [`SessionEvent::Expired`].
/// Any other error is returned untouched.
pub struct AuthenticatedClient {
    transport: Arc<dyn HttpTransport>,
    session: Arc<SessionContext>,
    refresher: Refresher,
    events: Arc<dyn SessionEventSink>,
    login_route: String,
}

impl AuthenticatedClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        session: Arc<SessionContext>,
        events: Arc<dyn SessionEventSink>,
        policy: RefreshPolicy,
        login_route: impl Into<String>,
    ) -> Self {
        let refresher = Refresher::new(transport.clone(), session.clone(), policy);
        AuthenticatedClient {
            transport,
            session,
            refresher,
            events,
            login_route: login_route.into(),
        }
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    pub fn events(&self) -> &Arc<dyn SessionEventSink> {
        &self.events
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    pub async fn send(&self, request: OutboundRequest) -> Result<HttpResponse, ClientError> {
        self.dispatch(request, true).await
    }

    /// Sends without the refresh protocol: a 401 is returned as a plain
    /// [`ClientError::Status`]. For endpoints where 401 means bad credentials.
    pub async fn send_without_recovery(
        &self,
        request: OutboundRequest,
    ) -> Result<HttpResponse, ClientError> {
        self.dispatch(request, false).await
    }

    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: OutboundRequest,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        Ok(response.json()?)
    }

    pub async fn get(&self, path: impl Into<String>) -> Result<HttpResponse, ClientError> {
        self.send(OutboundRequest::get(path)).await
    }

    pub async fn delete(&self, path: impl Into<String>) -> Result<HttpResponse, ClientError> {
        self.send(OutboundRequest::delete(path)).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: impl Into<String>,
        body: &B,
    ) -> Result<HttpResponse, ClientError> {
        self.send(OutboundRequest::post(path).json(body)?).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: impl Into<String>,
        body: &B,
    ) -> Result<HttpResponse, ClientError> {
        self.send(OutboundRequest::put(path).json(body)?).await
    }

    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: impl Into<String>,
        body: &B,
    ) -> Result<HttpResponse, ClientError> {
        self.send(OutboundRequest::patch(path).json(body)?).await
    }

    async fn dispatch(
        &self,
        mut request: OutboundRequest,
        recover: bool,
    ) -> Result<HttpResponse, ClientError> {
        loop {
            self.attach(&mut request).await?;
            debug!(
                request_id = %request.id,
                method = %request.method,
                path = %request.path,
                retried = request.retried,
                "sending request"
            );

            let response = self.transport.send(&request).await?;
            if response.is_success() {
                return Ok(response);
            }
            if response.status != StatusCode::UNAUTHORIZED || !recover {
                debug!(request_id = %request.id, status = %response.status, "request failed");
                return Err(ClientError::Status(response));
            }

            if request.retried {
                warn!(request_id = %request.id, "request rejected again after refresh");
                self.expire(ExpiryReason::RejectedAfterRefresh).await;
                return Err(ClientError::SessionExpired(response));
            }

            // marked before refreshing: this request never refreshes twice
            request.retried = true;
            let sent_with = request.bearer_token();
            match self.refresher.refresh(sent_with.as_ref()).await {
                Ok(token) => {
                    request
                        .set_bearer(&token)
                        .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
                    self.events.publish(SessionEvent::Refreshed);
                }
                Err(e) => {
                    warn!(request_id = %request.id, error = %e, "refresh failed");
                    self.expire(ExpiryReason::RefreshFailed).await;
                    return Err(ClientError::Refresh(e));
                }
            }
        }
    }

    async fn attach(&self, request: &mut OutboundRequest) -> Result<(), ClientError> {
        if let Some(token) = self.session.access_token().await? {
            request
                .set_bearer(&token)
                .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
        }
        Ok(())
    }

    async fn expire(&self, reason: ExpiryReason) {
        if let Err(e) = self.session.clear().await {
            error!(error = %e, "failed to clear access token");
        }
        self.events.publish(SessionEvent::Expired(SessionExpired {
            redirect_to: self.login_route.clone(),
            reason,
            at: Utc::now(),
        }));
    }
}
