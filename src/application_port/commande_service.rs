use crate::application_port::ApiError;
use crate::domain_model::{Commande, CommandeId, CommandeInput, CommandeQuery, CommandeUpdate, Page};

#[async_trait::async_trait]
pub trait CommandeService: Send + Sync {
    async fn list(&self, query: CommandeQuery) -> Result<Page<Commande>, ApiError>;
    async fn get(&self, id: &CommandeId) -> Result<Commande, ApiError>;
    async fn create(&self, input: CommandeInput) -> Result<Commande, ApiError>;
    async fn update(&self, id: &CommandeId, update: CommandeUpdate) -> Result<Commande, ApiError>;
    /// `montant_total` is a decimal string, e.g. `"129.90"`.
    async fn update_montant(&self, id: &CommandeId, montant_total: &str)
    -> Result<Commande, ApiError>;
    async fn delete(&self, id: &CommandeId) -> Result<(), ApiError>;
}
