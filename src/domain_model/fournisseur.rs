use crate::domain_model::FournisseurId;
use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fournisseur {
    #[serde(rename = "idFournisseur")]
    pub id: FournisseurId,
    pub nom: String,
    pub adresse: String,
    pub contact: String,
    pub telephone: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct FournisseurInput {
    #[garde(length(min = 1))]
    pub nom: String,
    #[garde(length(min = 1))]
    pub adresse: String,
    #[garde(length(min = 1))]
    pub contact: String,
    #[garde(length(min = 1))]
    pub telephone: String,
    #[garde(email)]
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct FournisseurUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(length(min = 1))]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(length(min = 1))]
    pub adresse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(length(min = 1))]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(length(min = 1))]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(email)]
    pub email: Option<String>,
}
