use crate::application_impl::util::{execute, fetch, segment, with_json};
use crate::application_port::*;
use crate::client::AuthenticatedClient;
use crate::domain_model::*;
use garde::Validate;
use std::sync::Arc;

/// Unique constraints the API leaks through its error messages.
const UNIQUE_VIOLATIONS: [(&str, &str); 2] = [
    ("Client_email_key", "a client with this email already exists"),
    (
        "Client_numeroTelephone_key",
        "a client with this phone number already exists",
    ),
];

fn unique_violation(message: &str) -> Option<ApiError> {
    UNIQUE_VIOLATIONS
        .iter()
        .find(|(constraint, _)| message.contains(constraint))
        .map(|(_, text)| ApiError::Conflict(text.to_string()))
}

pub struct RealClientService {
    client: Arc<AuthenticatedClient>,
}

impl RealClientService {
    pub fn new(client: Arc<AuthenticatedClient>) -> RealClientService {
        RealClientService { client }
    }
}

#[async_trait::async_trait]
impl ClientService for RealClientService {
    async fn list(&self) -> Result<Vec<Client>, ApiError> {
        let envelope: DataEnvelope<Vec<Client>> =
            fetch(&self.client, OutboundRequest::get("/clients")).await?;
        Ok(envelope.data)
    }

    async fn create(&self, input: ClientInput) -> Result<Client, ApiError> {
        input.validate()?;
        let request = with_json(OutboundRequest::post("/clients"), &input)?;

        // the API may report a duplicate with a 2xx body as well as an error status
        let response = match self.client.send(request).await {
            Ok(response) => response,
            Err(e) => {
                let conflict = e
                    .response()
                    .and_then(|r| r.message())
                    .and_then(|m| unique_violation(&m));
                return Err(conflict.unwrap_or_else(|| e.into()));
            }
        };
        if let Some(conflict) = response.message().and_then(|m| unique_violation(&m)) {
            return Err(conflict);
        }
        Ok(response.json()?)
    }

    async fn update(&self, id: ClientId, update: ClientUpdate) -> Result<Client, ApiError> {
        update.validate()?;
        let path = format!("/clients/{}", segment(&id)?);
        let request = with_json(OutboundRequest::patch(path), &update)?;
        fetch(&self.client, request).await
    }

    async fn delete(&self, id: ClientId) -> Result<(), ApiError> {
        let path = format!("/clients/{}", segment(&id)?);
        execute(&self.client, OutboundRequest::delete(path)).await?;
        Ok(())
    }

    async fn blacklist(&self) -> Result<Vec<Client>, ApiError> {
        let envelope: DataEnvelope<Vec<Client>> =
            fetch(&self.client, OutboundRequest::get("/clients/blacklist")).await?;
        Ok(envelope.data)
    }

    async fn add_to_blacklist(&self, id: ClientId) -> Result<(), ApiError> {
        let path = format!("/clients/addBlacklist/{}", segment(&id)?);
        let request = OutboundRequest::patch(path);
        execute(&self.client, request).await?;
        Ok(())
    }

    async fn remove_from_blacklist(&self, id: ClientId) -> Result<(), ApiError> {
        let path = format!("/clients/deleteBlacklist/{}", segment(&id)?);
        let request = OutboundRequest::patch(path);
        execute(&self.client, request).await?;
        Ok(())
    }
}
