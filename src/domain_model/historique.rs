use crate::domain_model::{HistoriqueId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One audit-log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Historique {
    #[serde(rename = "idHistorique")]
    pub id: HistoriqueId,
    pub date_modification: DateTime<Utc>,
    pub description_action: String,
    #[serde(default)]
    pub utilisateur: Option<Acteur>,
    pub utilisateur_id: UserId,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acteur {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct HistoriqueFilter {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub acteur: Option<String>,
    pub description_action: Option<String>,
    pub utilisateur_id: Option<UserId>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeResult {
    pub deleted: u64,
}
