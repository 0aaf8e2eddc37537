use crate::domain_model::{FormPart, ProduitId};
use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Produit {
    #[serde(rename = "idProduit")]
    pub id: ProduitId,
    pub nom: String,
    #[serde(default)]
    pub description: String,
    pub prix: f64,
    pub stock: i64,
    #[serde(default)]
    pub remise: f64,
    #[serde(default)]
    pub marque: String,
    #[serde(default)]
    pub categorie: String,
    #[serde(default)]
    pub qr_code: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub fournisseurs: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// An image file uploaded with a product form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    fn into_part(self) -> FormPart {
        FormPart::File {
            name: "images".to_string(),
            file_name: self.file_name,
            mime: self.mime,
            bytes: self.bytes,
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct ProduitInput {
    #[garde(length(min = 1))]
    pub nom: String,
    #[garde(skip)]
    pub description: String,
    #[garde(range(min = 0.01))]
    pub prix: f64,
    #[garde(range(min = 0))]
    pub stock: i64,
    #[garde(range(min = 0.0))]
    pub remise: f64,
    #[garde(length(min = 1))]
    pub marque: String,
    #[garde(length(min = 1))]
    pub categorie: String,
    #[garde(skip)]
    pub images: Vec<ImageUpload>,
    #[garde(inner(range(min = 1)))]
    pub fournisseurs: Vec<i64>,
}

impl ProduitInput {
    /// Multipart layout expected by `POST /produits`: scalar fields as text,
    /// one `images` part per file, supplier ids as a JSON array.
    pub fn into_form_parts(self) -> Result<Vec<FormPart>, serde_json::Error> {
        let mut parts = scalar_parts(
            self.nom,
            self.description,
            self.prix,
            self.stock,
            self.remise,
            self.marque,
            self.categorie,
        );
        parts.extend(self.images.into_iter().map(ImageUpload::into_part));
        parts.push(FormPart::text(
            "fournisseurs",
            serde_json::to_string(&self.fournisseurs)?,
        ));
        Ok(parts)
    }
}

#[derive(Debug, Clone, Validate)]
pub struct EditProduitInput {
    #[garde(length(min = 1))]
    pub nom: String,
    #[garde(skip)]
    pub description: String,
    #[garde(range(min = 0.01))]
    pub prix: f64,
    #[garde(range(min = 0))]
    pub stock: i64,
    #[garde(range(min = 0.0))]
    pub remise: f64,
    #[garde(length(min = 1))]
    pub marque: String,
    #[garde(length(min = 1))]
    pub categorie: String,
    #[garde(skip)]
    pub images: Vec<ImageUpload>,
    /// Existing image file names to keep on the product.
    #[garde(skip)]
    pub keep_images: Vec<String>,
    #[garde(inner(range(min = 1)))]
    pub fournisseurs: Vec<i64>,
}

impl EditProduitInput {
    pub fn into_form_parts(self) -> Result<Vec<FormPart>, serde_json::Error> {
        let mut parts = scalar_parts(
            self.nom,
            self.description,
            self.prix,
            self.stock,
            self.remise,
            self.marque,
            self.categorie,
        );
        parts.extend(self.images.into_iter().map(ImageUpload::into_part));
        parts.push(FormPart::text(
            "keepImages",
            serde_json::to_string(&self.keep_images)?,
        ));
        parts.push(FormPart::text(
            "fournisseurs",
            serde_json::to_string(&self.fournisseurs)?,
        ));
        Ok(parts)
    }
}

fn scalar_parts(
    nom: String,
    description: String,
    prix: f64,
    stock: i64,
    remise: f64,
    marque: String,
    categorie: String,
) -> Vec<FormPart> {
    vec![
        FormPart::text("nom", nom),
        FormPart::text("description", description),
        FormPart::text("prix", prix.to_string()),
        FormPart::text("stock", stock.to_string()),
        FormPart::text("remise", remise.to_string()),
        FormPart::text("marque", marque),
        FormPart::text("categorie", categorie),
    ]
}

#[derive(Debug, Clone, Default)]
pub struct ProduitQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub nom: Option<String>,
    pub marque: Option<String>,
    pub categorie: Option<String>,
}
