use crate::application_impl::util::{execute, fetch, segment};
use crate::application_port::*;
use crate::client::AuthenticatedClient;
use crate::domain_model::*;
use garde::Validate;
use std::sync::Arc;

pub struct RealProduitService {
    client: Arc<AuthenticatedClient>,
}

impl RealProduitService {
    pub fn new(client: Arc<AuthenticatedClient>) -> RealProduitService {
        RealProduitService { client }
    }
}

#[async_trait::async_trait]
impl ProduitService for RealProduitService {
    async fn list(&self, query: ProduitQuery) -> Result<Page<Produit>, ApiError> {
        let request = OutboundRequest::get("/produits")
            .query_opt("page", query.page)
            .query_opt("limit", query.limit)
            .query_opt("nom", query.nom)
            .query_opt("marque", query.marque)
            .query_opt("categorie", query.categorie);
        fetch(&self.client, request).await
    }

    async fn get(&self, id: &ProduitId) -> Result<Produit, ApiError> {
        let path = format!("/produits/{}", segment(&id)?);
        fetch(&self.client, OutboundRequest::get(path)).await
    }

    async fn create(&self, input: ProduitInput) -> Result<Produit, ApiError> {
        input.validate()?;
        let parts = input.into_form_parts().map_err(ApiError::encode)?;
        let request = OutboundRequest::post("/produits").multipart(parts);
        fetch(&self.client, request).await
    }

    async fn update(&self, id: &ProduitId, input: EditProduitInput) -> Result<Produit, ApiError> {
        input.validate()?;
        let parts = input.into_form_parts().map_err(ApiError::encode)?;
        let path = format!("/produits/{}", segment(&id)?);
        let request = OutboundRequest::put(path).multipart(parts);
        fetch(&self.client, request).await
    }

    async fn delete(&self, id: &ProduitId) -> Result<(), ApiError> {
        let path = format!("/produits/{}", segment(&id)?);
        execute(&self.client, OutboundRequest::delete(path)).await?;
        Ok(())
    }
}
