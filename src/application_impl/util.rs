use crate::application_port::ApiError;
use crate::client::AuthenticatedClient;
use crate::domain_model::{HttpResponse, OutboundRequest, path_segment};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Display;

pub(crate) fn with_json<B: Serialize + ?Sized>(
    request: OutboundRequest,
    body: &B,
) -> Result<OutboundRequest, ApiError> {
    request.json(body).map_err(ApiError::encode)
}

/// Renders an id as one escaped path segment.
pub(crate) fn segment(id: &impl Display) -> Result<String, ApiError> {
    path_segment(&id.to_string()).map_err(|e| ApiError::Validation(e.to_string()))
}

pub(crate) async fn execute(
    client: &AuthenticatedClient,
    request: OutboundRequest,
) -> Result<HttpResponse, ApiError> {
    Ok(client.send(request).await?)
}

pub(crate) async fn fetch<T: DeserializeOwned>(
    client: &AuthenticatedClient,
    request: OutboundRequest,
) -> Result<T, ApiError> {
    let response = client.send(request).await?;
    Ok(response.json()?)
}
