use crate::application_impl::util::{execute, fetch, segment, with_json};
use crate::application_port::*;
use crate::client::AuthenticatedClient;
use crate::domain_model::*;
use garde::Validate;
use std::sync::Arc;

pub struct RealFournisseurService {
    client: Arc<AuthenticatedClient>,
}

impl RealFournisseurService {
    pub fn new(client: Arc<AuthenticatedClient>) -> RealFournisseurService {
        RealFournisseurService { client }
    }
}

#[async_trait::async_trait]
impl FournisseurService for RealFournisseurService {
    async fn list(&self) -> Result<Vec<Fournisseur>, ApiError> {
        let envelope: DataEnvelope<Vec<Fournisseur>> =
            fetch(&self.client, OutboundRequest::get("/fournisseurs")).await?;
        Ok(envelope.data)
    }

    async fn get(&self, id: FournisseurId) -> Result<Fournisseur, ApiError> {
        let path = format!("/fournisseurs/{}", segment(&id)?);
        fetch(&self.client, OutboundRequest::get(path)).await
    }

    async fn create(&self, input: FournisseurInput) -> Result<Fournisseur, ApiError> {
        input.validate()?;
        let request = with_json(OutboundRequest::post("/fournisseurs"), &input)?;
        fetch(&self.client, request).await
    }

    async fn update(
        &self,
        id: FournisseurId,
        update: FournisseurUpdate,
    ) -> Result<Fournisseur, ApiError> {
        update.validate()?;
        let request = with_json(
            OutboundRequest::patch(format!("/fournisseurs/{}", segment(&id)?)),
            &update,
        )?;
        fetch(&self.client, request).await
    }

    async fn delete(&self, id: FournisseurId) -> Result<(), ApiError> {
        let path = format!("/fournisseurs/{}", segment(&id)?);
        let request = OutboundRequest::delete(path);
        execute(&self.client, request).await?;
        Ok(())
    }
}
