use crate::application_port::ApiError;
use crate::domain_model::{Fournisseur, FournisseurId, FournisseurInput, FournisseurUpdate};

#[async_trait::async_trait]
pub trait FournisseurService: Send + Sync {
    async fn list(&self) -> Result<Vec<Fournisseur>, ApiError>;
    async fn get(&self, id: FournisseurId) -> Result<Fournisseur, ApiError>;
    async fn create(&self, input: FournisseurInput) -> Result<Fournisseur, ApiError>;
    async fn update(
        &self,
        id: FournisseurId,
        update: FournisseurUpdate,
    ) -> Result<Fournisseur, ApiError>;
    async fn delete(&self, id: FournisseurId) -> Result<(), ApiError>;
}
