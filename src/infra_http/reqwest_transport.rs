use crate::domain_model::*;
use crate::domain_port::*;
use http::header::SET_COOKIE;
use reqwest::multipart::{Form, Part};
use reqwest_cookie_store::{CookieStore, CookieStoreMutex};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, trace};

/// [`HttpTransport`] backed by a shared `reqwest` connection pool.
///
/// With `with_credentials` the client keeps a cookie jar, so the HttpOnly
/// refresh cookie set at login is replayed on `/auth/refresh`. The jar lives
/// in memory unless [`ReqwestTransport::persist_cookies`] ties it to a store.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
    jar: Option<Arc<CookieStoreMutex>>,
    persistence: Option<CookiePersistence>,
}

/// Mirrors the cookie jar into a [`KeyValueStore`] entry, so a later process
/// sharing the store can still refresh the session.
struct CookiePersistence {
    store: Arc<dyn KeyValueStore>,
    key: String,
    restored: OnceCell<()>,
}

impl ReqwestTransport {
    pub fn try_new(base_url: &str, with_credentials: bool) -> Result<Self, TransportError> {
        let parsed = reqwest::Url::parse(base_url)
            .map_err(|e| TransportError::InvalidRequest(format!("base url {base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(TransportError::InvalidRequest(format!(
                "base url {base_url} cannot carry paths"
            )));
        }

        let jar = with_credentials.then(|| Arc::new(CookieStoreMutex::new(CookieStore::default())));
        let mut builder = reqwest::Client::builder();
        if let Some(jar) = &jar {
            builder = builder.cookie_provider(jar.clone());
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(ReqwestTransport {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            jar,
            persistence: None,
        })
    }

    /// Loads the cookie jar from `store` under `key` before the first request
    /// and writes it back whenever a response sets cookies. No-op without
    /// credentials.
    pub fn persist_cookies(
        mut self,
        store: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
    ) -> Self {
        if self.jar.is_some() {
            self.persistence = Some(CookiePersistence {
                store,
                key: key.into(),
                restored: OnceCell::new(),
            });
        }
        self
    }

    async fn restore_cookies(&self) -> Result<(), TransportError> {
        let (Some(jar), Some(persistence)) = (&self.jar, &self.persistence) else {
            return Ok(());
        };
        persistence
            .restored
            .get_or_try_init(|| async {
                let Some(raw) = persistence.store.get(&persistence.key).await? else {
                    return Ok(());
                };
                let loaded = cookie_store::serde::json::load_all(raw.as_bytes())
                    .map_err(|e| TransportError::Cookies(e.to_string()))?;
                *lock(jar)? = loaded;
                debug!(key = %persistence.key, "cookie jar restored");
                Ok::<(), TransportError>(())
            })
            .await?;
        Ok(())
    }

    async fn save_cookies(&self) -> Result<(), TransportError> {
        let (Some(jar), Some(persistence)) = (&self.jar, &self.persistence) else {
            return Ok(());
        };
        let raw = {
            let jar = lock(jar)?;
            let mut raw = Vec::new();
            cookie_store::serde::json::save_incl_expired_and_nonpersistent(&jar, &mut raw)
                .map_err(|e| TransportError::Cookies(e.to_string()))?;
            String::from_utf8(raw).map_err(|e| TransportError::Cookies(e.to_string()))?
        };
        persistence.store.set(&persistence.key, &raw).await?;
        debug!(key = %persistence.key, "cookie jar saved");
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<reqwest::Url, TransportError> {
        let joined = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };
        reqwest::Url::parse(&joined)
            .map_err(|e| TransportError::InvalidRequest(format!("{joined}: {e}")))
    }
}

fn lock(
    jar: &CookieStoreMutex,
) -> Result<std::sync::MutexGuard<'_, CookieStore>, TransportError> {
    jar.lock()
        .map_err(|_| TransportError::Cookies("cookie jar lock poisoned".to_string()))
}

fn build_form(parts: &[FormPart]) -> Result<Form, TransportError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name.clone(), value.clone()),
            FormPart::File {
                name,
                file_name,
                mime,
                bytes,
            } => {
                let file = Part::bytes(bytes.clone())
                    .file_name(file_name.clone())
                    .mime_str(mime)
                    .map_err(|e| TransportError::InvalidRequest(format!("{file_name}: {e}")))?;
                form.part(name.clone(), file)
            }
        };
    }
    Ok(form)
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<HttpResponse, TransportError> {
        self.restore_cookies().await?;
        let url = self.url(&request.path)?;
        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .headers(request.headers.clone());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(parts) => builder.multipart(build_form(parts)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        trace!(request_id = %request.id, %status, len = body.len(), "response received");
        if headers.contains_key(SET_COOKIE) {
            self.save_cookies().await?;
        }

        Ok(HttpResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_appended_to_the_base_path() {
        let transport = ReqwestTransport::try_new("http://localhost:3000/api/", true).unwrap();
        assert_eq!(
            transport.url("/produits").unwrap().as_str(),
            "http://localhost:3000/api/produits"
        );
        assert_eq!(
            transport.url("clients/blacklist").unwrap().as_str(),
            "http://localhost:3000/api/clients/blacklist"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(ReqwestTransport::try_new("not a url", true).is_err());
        assert!(ReqwestTransport::try_new("mailto:admin@example.com", true).is_err());
    }

    #[test]
    fn escaped_ids_are_not_resolved_as_dot_segments() {
        let transport = ReqwestTransport::try_new("http://localhost:3000/api", true).unwrap();
        let path = format!("/commandes/{}", path_segment("../users/7").unwrap());
        assert_eq!(
            transport.url(&path).unwrap().as_str(),
            "http://localhost:3000/api/commandes/..%2Fusers%2F7"
        );
    }
}
