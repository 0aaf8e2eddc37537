use crate::domain_model::{CommandeId, RetourId};
use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retour {
    #[serde(rename = "idRetour")]
    pub id: RetourId,
    pub date_retour: DateTime<Utc>,
    pub statut_retour: String,
    pub raison_retour: String,
    pub commande_id: CommandeId,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RetourInput {
    #[garde(skip)]
    pub date_retour: DateTime<Utc>,
    #[garde(length(min = 1))]
    pub statut_retour: String,
    #[garde(length(min = 1))]
    pub raison_retour: String,
    #[garde(skip)]
    pub commande_id: CommandeId,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RetourUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub date_retour: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(length(min = 1))]
    pub statut_retour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(length(min = 1))]
    pub raison_retour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub commande_id: Option<CommandeId>,
}

/// Criteria for `GET /retours` (query string) and `POST /retours/filter` (body).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetourFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statut_retour: Option<String>,
}
