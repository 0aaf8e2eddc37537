use crate::domain_model::{ClientId, CommandeId, ProduitId};
use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commande {
    #[serde(rename = "idCommande")]
    pub id: CommandeId,
    pub date_commande: DateTime<Utc>,
    pub statut: String,
    pub adresse_livraison: String,
    /// Decimal amount as sent by the API.
    pub montant_total: String,
    pub client_id: ClientId,
    #[serde(default, rename = "ligne")]
    pub lignes: Vec<LigneCommande>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LigneCommande {
    pub id_ligne: i64,
    pub produit_id: ProduitId,
    pub quantite: u32,
    pub prix_unitaire: String,
    pub commande_id: CommandeId,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommandeInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub date_commande: Option<DateTime<Utc>>,
    #[garde(length(min = 1))]
    pub statut: String,
    #[garde(length(min = 1))]
    pub adresse_livraison: String,
    #[garde(skip)]
    pub client_id: ClientId,
    #[garde(length(min = 1), dive)]
    pub lignes: Vec<LigneInput>,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LigneInput {
    #[garde(range(min = 1))]
    pub quantite: u32,
    #[garde(skip)]
    pub produit_id: ProduitId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LigneOp {
    Add,
    Update,
    Remove,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LignePatch {
    #[garde(skip)]
    pub op: LigneOp,
    #[garde(skip)]
    pub produit_id: ProduitId,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(range(min = 1))]
    pub quantite: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommandeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(length(min = 1))]
    pub statut: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(length(min = 1))]
    pub adresse_livraison: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(skip)]
    pub client_id: Option<ClientId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[garde(dive)]
    pub lignes: Option<Vec<LignePatch>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandeOrderBy {
    DateCommande,
    MontantTotal,
    ClientId,
}

impl CommandeOrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandeOrderBy::DateCommande => "dateCommande",
            CommandeOrderBy::MontantTotal => "montantTotal",
            CommandeOrderBy::ClientId => "clientId",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDir {
    Asc,
    Desc,
}

impl OrderDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDir::Asc => "asc",
            OrderDir::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommandeQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub client_id: Option<ClientId>,
    pub statut: Option<String>,
    pub produit_id: Option<ProduitId>,
    pub min_total: Option<f64>,
    pub max_total: Option<f64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub order_by: Option<CommandeOrderBy>,
    pub order_dir: Option<OrderDir>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn commande_reads_api_shape() {
        let commande: Commande = serde_json::from_value(json!({
            "idCommande": "c-1",
            "dateCommande": "2024-05-02T10:00:00.000Z",
            "statut": "EN_COURS",
            "adresseLivraison": "12 rue des Lilas",
            "montantTotal": "149.70",
            "clientId": 4,
            "ligne": [{
                "idLigne": 1,
                "produitId": "p-9",
                "quantite": 3,
                "prixUnitaire": "49.90",
                "commandeId": "c-1"
            }]
        }))
        .unwrap();

        assert_eq!(commande.id, CommandeId("c-1".into()));
        assert_eq!(commande.lignes.len(), 1);
        assert_eq!(commande.lignes[0].quantite, 3);
    }

    #[test]
    fn empty_order_is_invalid() {
        let input = CommandeInput {
            date_commande: None,
            statut: "EN_COURS".into(),
            adresse_livraison: "12 rue des Lilas".into(),
            client_id: ClientId(4),
            lignes: vec![],
        };
        assert!(input.validate().is_err());

        let zero_quantity = CommandeInput {
            lignes: vec![LigneInput {
                quantite: 0,
                produit_id: ProduitId("p-9".into()),
            }],
            ..input
        };
        assert!(zero_quantity.validate().is_err());
    }

    #[test]
    fn line_patch_serializes_operation() {
        let patch = LignePatch {
            op: LigneOp::Remove,
            produit_id: ProduitId("p-9".into()),
            quantite: None,
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "op": "remove", "produitId": "p-9" })
        );
    }
}
