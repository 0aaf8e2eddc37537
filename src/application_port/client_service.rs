use crate::application_port::ApiError;
use crate::domain_model::{Client, ClientId, ClientInput, ClientUpdate};

#[async_trait::async_trait]
pub trait ClientService: Send + Sync {
    async fn list(&self) -> Result<Vec<Client>, ApiError>;
    async fn create(&self, input: ClientInput) -> Result<Client, ApiError>;
    async fn update(&self, id: ClientId, update: ClientUpdate) -> Result<Client, ApiError>;
    async fn delete(&self, id: ClientId) -> Result<(), ApiError>;
    async fn blacklist(&self) -> Result<Vec<Client>, ApiError>;
    async fn add_to_blacklist(&self, id: ClientId) -> Result<(), ApiError>;
    async fn remove_from_blacklist(&self, id: ClientId) -> Result<(), ApiError>;
}
