use crate::application_port::ApiError;
use crate::domain_model::{Notification, NotificationId, Page};

#[async_trait::async_trait]
pub trait NotificationService: Send + Sync {
    async fn list(&self, page: u32, limit: u32) -> Result<Page<Notification>, ApiError>;
    async fn get(&self, id: &NotificationId) -> Result<Notification, ApiError>;
    async fn delete(&self, id: &NotificationId) -> Result<(), ApiError>;
}
