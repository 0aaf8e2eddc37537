use crate::application_impl::util::{execute, fetch, segment};
use crate::application_port::*;
use crate::client::AuthenticatedClient;
use crate::domain_model::*;
use std::sync::Arc;
use tracing::info;

pub struct RealHistoriqueService {
    client: Arc<AuthenticatedClient>,
}

impl RealHistoriqueService {
    pub fn new(client: Arc<AuthenticatedClient>) -> RealHistoriqueService {
        RealHistoriqueService { client }
    }
}

#[async_trait::async_trait]
impl HistoriqueService for RealHistoriqueService {
    async fn list(&self, filter: HistoriqueFilter) -> Result<Page<Historique>, ApiError> {
        let request = OutboundRequest::get("/historiques")
            .query_opt("page", filter.page)
            .query_opt("perPage", filter.per_page)
            .query_opt("acteur", filter.acteur)
            .query_opt("descriptionAction", filter.description_action)
            .query_opt("utilisateurId", filter.utilisateur_id)
            .query_opt("dateFrom", filter.date_from)
            .query_opt("dateTo", filter.date_to);
        fetch(&self.client, request).await
    }

    async fn get(&self, id: HistoriqueId) -> Result<Historique, ApiError> {
        let path = format!("/historiques/{}", segment(&id)?);
        fetch(&self.client, OutboundRequest::get(path)).await
    }

    async fn delete(&self, id: HistoriqueId) -> Result<(), ApiError> {
        let path = format!("/historiques/{}", segment(&id)?);
        let request = OutboundRequest::delete(path);
        execute(&self.client, request).await?;
        Ok(())
    }

    async fn purge_old(&self) -> Result<u64, ApiError> {
        let result: PurgeResult =
            fetch(&self.client, OutboundRequest::delete("/historiques/old")).await?;
        info!(deleted = result.deleted, "old history entries purged");
        Ok(result.deleted)
    }
}
