use crate::application_port::ApiError;
use crate::domain_model::{EditProduitInput, Page, Produit, ProduitId, ProduitInput, ProduitQuery};

#[async_trait::async_trait]
pub trait ProduitService: Send + Sync {
    async fn list(&self, query: ProduitQuery) -> Result<Page<Produit>, ApiError>;
    async fn get(&self, id: &ProduitId) -> Result<Produit, ApiError>;
    /// Uploads as `multipart/form-data` together with the images.
    async fn create(&self, input: ProduitInput) -> Result<Produit, ApiError>;
    async fn update(&self, id: &ProduitId, input: EditProduitInput) -> Result<Produit, ApiError>;
    async fn delete(&self, id: &ProduitId) -> Result<(), ApiError>;
}
