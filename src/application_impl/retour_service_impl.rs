use crate::application_impl::util::{execute, fetch, segment, with_json};
use crate::application_port::*;
use crate::client::AuthenticatedClient;
use crate::domain_model::*;
use garde::Validate;
use std::sync::Arc;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 25;

pub struct RealRetourService {
    client: Arc<AuthenticatedClient>,
}

impl RealRetourService {
    pub fn new(client: Arc<AuthenticatedClient>) -> RealRetourService {
        RealRetourService { client }
    }
}

#[async_trait::async_trait]
impl RetourService for RealRetourService {
    async fn list(&self, filter: RetourFilter) -> Result<Page<Retour>, ApiError> {
        let request = OutboundRequest::get("/retours")
            .query("page", filter.page.unwrap_or(DEFAULT_PAGE))
            .query("perPage", filter.per_page.unwrap_or(DEFAULT_PER_PAGE))
            .query_opt("dateFrom", filter.date_from)
            .query_opt("dateTo", filter.date_to)
            .query_opt("search", filter.search)
            .query_opt("statutRetour", filter.statut_retour);
        fetch(&self.client, request).await
    }

    async fn filter(&self, filter: RetourFilter) -> Result<Page<Retour>, ApiError> {
        let request = with_json(OutboundRequest::post("/retours/filter"), &filter)?;
        fetch(&self.client, request).await
    }

    async fn get(&self, id: RetourId) -> Result<Retour, ApiError> {
        let path = format!("/retours/{}", segment(&id)?);
        fetch(&self.client, OutboundRequest::get(path)).await
    }

    async fn create(&self, input: RetourInput) -> Result<Retour, ApiError> {
        input.validate()?;
        let request = with_json(OutboundRequest::post("/retours"), &input)?;
        fetch(&self.client, request).await
    }

    async fn update(&self, id: RetourId, update: RetourUpdate) -> Result<Retour, ApiError> {
        update.validate()?;
        let path = format!("/retours/{}", segment(&id)?);
        let request = with_json(OutboundRequest::patch(path), &update)?;
        fetch(&self.client, request).await
    }

    async fn delete(&self, id: RetourId) -> Result<(), ApiError> {
        let path = format!("/retours/{}", segment(&id)?);
        execute(&self.client, OutboundRequest::delete(path)).await?;
        Ok(())
    }
}
