use crate::application_port::ApiError;
use crate::domain_model::{Page, Retour, RetourFilter, RetourId, RetourInput, RetourUpdate};

#[async_trait::async_trait]
pub trait RetourService: Send + Sync {
    async fn list(&self, filter: RetourFilter) -> Result<Page<Retour>, ApiError>;
    /// Same criteria as [`RetourService::list`], sent as a JSON body.
    async fn filter(&self, filter: RetourFilter) -> Result<Page<Retour>, ApiError>;
    async fn get(&self, id: RetourId) -> Result<Retour, ApiError>;
    async fn create(&self, input: RetourInput) -> Result<Retour, ApiError>;
    async fn update(&self, id: RetourId, update: RetourUpdate) -> Result<Retour, ApiError>;
    async fn delete(&self, id: RetourId) -> Result<(), ApiError>;
}
