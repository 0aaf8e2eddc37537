use crate::application_port::ApiError;
use crate::domain_model::{Historique, HistoriqueFilter, HistoriqueId, Page};

#[async_trait::async_trait]
pub trait HistoriqueService: Send + Sync {
    async fn list(&self, filter: HistoriqueFilter) -> Result<Page<Historique>, ApiError>;
    async fn get(&self, id: HistoriqueId) -> Result<Historique, ApiError>;
    async fn delete(&self, id: HistoriqueId) -> Result<(), ApiError>;
    /// Deletes entries past the server's retention window; returns how many.
    async fn purge_old(&self) -> Result<u64, ApiError>;
}
