use crate::application_impl::util::{execute, fetch, segment, with_json};
use crate::application_port::*;
use crate::client::AuthenticatedClient;
use crate::domain_model::*;
use garde::Validate;
use serde_json::json;
use std::sync::Arc;

pub struct RealCommandeService {
    client: Arc<AuthenticatedClient>,
}

impl RealCommandeService {
    pub fn new(client: Arc<AuthenticatedClient>) -> RealCommandeService {
        RealCommandeService { client }
    }
}

fn list_request(query: CommandeQuery) -> OutboundRequest {
    OutboundRequest::get("/commandes")
        .query_opt("page", query.page)
        .query_opt("limit", query.limit)
        .query_opt("clientId", query.client_id)
        .query_opt("statut", query.statut)
        .query_opt("produitId", query.produit_id)
        .query_opt("minTotal", query.min_total)
        .query_opt("maxTotal", query.max_total)
        .query_opt("dateFrom", query.date_from)
        .query_opt("dateTo", query.date_to)
        .query_opt("orderBy", query.order_by.map(|o| o.as_str()))
        .query_opt("orderDir", query.order_dir.map(|d| d.as_str()))
}

#[async_trait::async_trait]
impl CommandeService for RealCommandeService {
    async fn list(&self, query: CommandeQuery) -> Result<Page<Commande>, ApiError> {
        fetch(&self.client, list_request(query)).await
    }

    async fn get(&self, id: &CommandeId) -> Result<Commande, ApiError> {
        let path = format!("/commandes/{}", segment(&id)?);
        fetch(&self.client, OutboundRequest::get(path)).await
    }

    async fn create(&self, input: CommandeInput) -> Result<Commande, ApiError> {
        input.validate()?;
        let request = with_json(OutboundRequest::post("/commandes"), &input)?;
        fetch(&self.client, request).await
    }

    async fn update(&self, id: &CommandeId, update: CommandeUpdate) -> Result<Commande, ApiError> {
        update.validate()?;
        let path = format!("/commandes/{}", segment(&id)?);
        let request = with_json(OutboundRequest::patch(path), &update)?;
        fetch(&self.client, request).await
    }

    async fn update_montant(
        &self,
        id: &CommandeId,
        montant_total: &str,
    ) -> Result<Commande, ApiError> {
        if montant_total.trim().parse::<f64>().is_err() {
            return Err(ApiError::Validation(format!(
                "montantTotal must be a decimal amount, got {montant_total:?}"
            )));
        }
        let request = with_json(
            OutboundRequest::patch(format!("/commandes/{}/montant", segment(&id)?)),
            &json!({ "montantTotal": montant_total }),
        )?;
        fetch(&self.client, request).await
    }

    async fn delete(&self, id: &CommandeId) -> Result<(), ApiError> {
        let path = format!("/commandes/{}", segment(&id)?);
        execute(&self.client, OutboundRequest::delete(path)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra_event::BroadcastSessionEvents;
    use crate::infra_http::FakeTransport;
    use crate::infra_storage::MemoryKeyValueStore;
    use crate::session::{DEFAULT_STORAGE_KEY, RefreshPolicy, SessionContext};
    use chrono::NaiveDate;
    use http::StatusCode;

    #[test]
    fn only_present_filters_reach_the_query_string() {
        let request = list_request(CommandeQuery {
            page: Some(2),
            statut: Some("LIVREE".into()),
            date_from: NaiveDate::from_ymd_opt(2025, 1, 31),
            order_by: Some(CommandeOrderBy::MontantTotal),
            order_dir: Some(OrderDir::Desc),
            ..Default::default()
        });

        let query: Vec<(&str, &str)> = request
            .query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            query,
            vec![
                ("page", "2"),
                ("statut", "LIVREE"),
                ("dateFrom", "2025-01-31"),
                ("orderBy", "montantTotal"),
                ("orderDir", "desc"),
            ]
        );
    }

    fn service(transport: Arc<FakeTransport>) -> RealCommandeService {
        let client = AuthenticatedClient::new(
            transport,
            Arc::new(SessionContext::new(
                Arc::new(MemoryKeyValueStore::new()),
                DEFAULT_STORAGE_KEY,
            )),
            Arc::new(BroadcastSessionEvents::new(8)),
            RefreshPolicy::default(),
            "/",
        );
        RealCommandeService::new(Arc::new(client))
    }

    #[tokio::test]
    async fn ids_with_reserved_characters_stay_in_their_segment() {
        let transport = Arc::new(FakeTransport::new(|_| {
            Ok(HttpResponse::json_value(StatusCode::OK, &json!({})))
        }));
        let commandes = service(transport.clone());

        commandes
            .delete(&CommandeId("../users/7".into()))
            .await
            .unwrap();
        commandes.delete(&CommandeId("a?x=1".into())).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].path, "/commandes/..%2Fusers%2F7");
        assert_eq!(calls[1].path, "/commandes/a%3Fx=1");
        assert!(calls[1].query.is_empty());
    }

    #[tokio::test]
    async fn dot_ids_never_reach_the_network() {
        let transport = Arc::new(FakeTransport::new(|_| {
            Ok(HttpResponse::json_value(StatusCode::OK, &json!({})))
        }));
        let commandes = service(transport.clone());

        let err = commandes.delete(&CommandeId("..".into())).await.unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert!(transport.calls().is_empty());
    }
}
