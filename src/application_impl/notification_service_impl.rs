use crate::application_impl::util::{execute, fetch, segment};
use crate::application_port::*;
use crate::client::AuthenticatedClient;
use crate::domain_model::*;
use std::sync::Arc;

pub struct RealNotificationService {
    client: Arc<AuthenticatedClient>,
}

impl RealNotificationService {
    pub fn new(client: Arc<AuthenticatedClient>) -> RealNotificationService {
        RealNotificationService { client }
    }
}

#[async_trait::async_trait]
impl NotificationService for RealNotificationService {
    async fn list(&self, page: u32, limit: u32) -> Result<Page<Notification>, ApiError> {
        let request = OutboundRequest::get("/notifications")
            .query("page", page)
            .query("limit", limit);
        fetch(&self.client, request).await
    }

    async fn get(&self, id: &NotificationId) -> Result<Notification, ApiError> {
        let path = format!("/notifications/{}", segment(&id)?);
        fetch(&self.client, OutboundRequest::get(path)).await
    }

    async fn delete(&self, id: &NotificationId) -> Result<(), ApiError> {
        let path = format!("/notifications/{}", segment(&id)?);
        let request = OutboundRequest::delete(path);
        execute(&self.client, request).await?;
        Ok(())
    }
}
