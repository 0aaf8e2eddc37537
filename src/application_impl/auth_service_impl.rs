use crate::application_impl::util::{fetch, with_json};
use crate::application_port::*;
use crate::client::AuthenticatedClient;
use crate::domain_model::*;
use chrono::Utc;
use garde::Validate;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct RealAuthService {
    client: Arc<AuthenticatedClient>,
}

impl RealAuthService {
    pub fn new(client: Arc<AuthenticatedClient>) -> RealAuthService {
        RealAuthService { client }
    }
}

#[async_trait::async_trait]
impl AuthService for RealAuthService {
    async fn login(&self, input: LoginInput) -> Result<LoginResult, ApiError> {
        input.validate()?;
        let request = with_json(OutboundRequest::post("/auth/login"), &input)?;
        // a 401 here means bad credentials, not an expired session
        let response = self.client.send_without_recovery(request).await?;

        let result: LoginResult = response.json()?;
        if result.access_token.is_blank() {
            return Err(ApiError::Decode(
                "login response carries no access token".to_string(),
            ));
        }
        self.client
            .session()
            .store_token(&result.access_token)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        self.client.events().publish(SessionEvent::LoggedIn);
        info!(email = %input.email, "logged in");
        Ok(result)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let request = OutboundRequest::post("/auth/logout");
        // the session ends here anyway, so a 401 is not worth a refresh
        if let Err(e) = self.client.send_without_recovery(request).await {
            warn!(error = %e, "logout request failed, ending session locally");
        }

        let cleared = self.client.session().clear().await;
        if let Err(e) = &cleared {
            error!(error = %e, "failed to clear access token");
        }
        self.client
            .events()
            .publish(SessionEvent::LoggedOut(SessionEnded {
                redirect_to: self.client.login_route().to_string(),
                at: Utc::now(),
            }));
        info!("logged out");
        cleared.map_err(|e| ApiError::Internal(e.to_string()))
    }

    async fn profile(&self) -> Result<Profile, ApiError> {
        let envelope: DataEnvelope<Profile> =
            fetch(&self.client, OutboundRequest::get("/auth/profile")).await?;
        Ok(envelope.data)
    }

    async fn change_password(&self, input: ChangePasswordInput) -> Result<(), ApiError> {
        input.validate()?;
        let request = with_json(OutboundRequest::post("/auth/change-password"), &input)?;
        self.client.send(request).await?;
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        if email.trim().is_empty() {
            return Err(ApiError::Validation("email is required".to_string()));
        }
        let request = with_json(
            OutboundRequest::post("/auth/forgot-password"),
            &json!({ "email": email }),
        )?;
        self.client.send(request).await?;
        Ok(())
    }

    async fn reset_password(&self, input: ResetPasswordInput) -> Result<(), ApiError> {
        input.validate()?;
        let request = with_json(OutboundRequest::post("/auth/reset-password"), &input)?;
        self.client.send(request).await?;
        Ok(())
    }

    async fn verify_email(&self, token: &str) -> Result<String, ApiError> {
        let request = with_json(
            OutboundRequest::post("/auth/verify-email"),
            &json!({ "token": token }),
        )?;
        match self.client.send(request).await {
            Ok(response) => Ok(response
                .message()
                .unwrap_or_else(|| "email verified".to_string())),
            Err(e) => match ApiError::from(e) {
                ApiError::Validation(_) => {
                    Err(ApiError::Validation("invalid or expired token".to_string()))
                }
                other => Err(other),
            },
        }
    }
}
