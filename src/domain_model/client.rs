use crate::domain_model::ClientId;
use garde::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientStatus {
    Active,
    Blacklisted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(rename = "idClient")]
    pub id: ClientId,
    pub nom: String,
    pub prenom: String,
    pub adresse: String,
    pub email: String,
    pub numero_telephone: String,
    pub statut: ClientStatus,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientInput {
    #[garde(length(min = 1))]
    pub nom: String,
    #[garde(length(min = 1))]
    pub prenom: String,
    #[garde(length(min = 1))]
    pub adresse: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub numero_telephone: String,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(length(min = 1))]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(length(min = 1))]
    pub prenom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(length(min = 1))]
    pub adresse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(email)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(length(min = 1))]
    pub numero_telephone: Option<String>,
}
