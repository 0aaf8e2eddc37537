use crate::application_port::ApiError;
use crate::domain_model::{User, UserId, UserInput, UserUpdate};

#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, ApiError>;
    async fn get(&self, id: UserId) -> Result<User, ApiError>;
    async fn create(&self, input: UserInput) -> Result<User, ApiError>;
    async fn update(&self, id: UserId, update: UserUpdate) -> Result<User, ApiError>;
    async fn delete(&self, id: UserId) -> Result<(), ApiError>;
    async fn update_permissions(&self, id: UserId, permissions: Vec<String>) -> Result<(), ApiError>;
}
