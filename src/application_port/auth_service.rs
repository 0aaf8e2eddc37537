use crate::application_port::ApiError;
use crate::domain_model::{AccessToken, Profile};
use garde::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginInput {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub access_token: AccessToken,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordInput {
    #[garde(length(min = 1))]
    pub old_password: String,
    #[garde(length(min = 1))]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordInput {
    #[garde(length(min = 1))]
    pub token: String,
    #[garde(length(min = 1))]
    pub new_password: String,
}

#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Stores the issued access token and publishes `LoggedIn`.
    async fn login(&self, input: LoginInput) -> Result<LoginResult, ApiError>;
    /// Ends the session locally whatever the server answers.
    async fn logout(&self) -> Result<(), ApiError>;
    async fn profile(&self) -> Result<Profile, ApiError>;
    async fn change_password(&self, input: ChangePasswordInput) -> Result<(), ApiError>;
    async fn forgot_password(&self, email: &str) -> Result<(), ApiError>;
    async fn reset_password(&self, input: ResetPasswordInput) -> Result<(), ApiError>;
    /// Returns the server's confirmation message.
    async fn verify_email(&self, token: &str) -> Result<String, ApiError>;
}
