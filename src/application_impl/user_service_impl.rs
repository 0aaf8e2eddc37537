use crate::application_impl::util::{execute, fetch, segment, with_json};
use crate::application_port::*;
use crate::client::AuthenticatedClient;
use crate::domain_model::*;
use garde::Validate;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
struct UsersEnvelope {
    users: Vec<User>,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

pub struct RealUserService {
    client: Arc<AuthenticatedClient>,
}

impl RealUserService {
    pub fn new(client: Arc<AuthenticatedClient>) -> RealUserService {
        RealUserService { client }
    }
}

#[async_trait::async_trait]
impl UserService for RealUserService {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let envelope: UsersEnvelope =
            fetch(&self.client, OutboundRequest::get("/users/all")).await?;
        Ok(envelope.users)
    }

    async fn get(&self, id: UserId) -> Result<User, ApiError> {
        let path = format!("/users/{}", segment(&id)?);
        let envelope: UserEnvelope = fetch(&self.client, OutboundRequest::get(path)).await?;
        Ok(envelope.user)
    }

    async fn create(&self, input: UserInput) -> Result<User, ApiError> {
        input.validate()?;
        let request = with_json(OutboundRequest::post("/users/create"), &input)?;
        fetch(&self.client, request).await
    }

    async fn update(&self, id: UserId, update: UserUpdate) -> Result<User, ApiError> {
        update.validate()?;
        let path = format!("/users/{}", segment(&id)?);
        let request = with_json(OutboundRequest::patch(path), &update)?;
        fetch(&self.client, request).await
    }

    async fn delete(&self, id: UserId) -> Result<(), ApiError> {
        let path = format!("/users/{}", segment(&id)?);
        execute(&self.client, OutboundRequest::delete(path)).await?;
        Ok(())
    }

    async fn update_permissions(&self, id: UserId, permissions: Vec<String>) -> Result<(), ApiError> {
        let request = with_json(
            OutboundRequest::patch(format!("/users/{}/permissions", segment(&id)?)),
            &json!({ "permissions": permissions }),
        )?;
        execute(&self.client, request).await?;
        Ok(())
    }
}
