use crate::domain_model::{NotificationId, ProduitId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stock alert raised by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub produit_id: ProduitId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    OutOfStock,
    LowStock,
    #[serde(other)]
    Other,
}
