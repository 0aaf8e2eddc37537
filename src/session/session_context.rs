use crate::domain_model::AccessToken;
use crate::domain_port::{KeyValueStore, StorageError};
use std::sync::Arc;

pub const DEFAULT_STORAGE_KEY: &str = "accessToken";
/// Key under which the persisted cookie jar is kept next to the token.
pub const DEFAULT_COOKIE_KEY: &str = "cookies";

/// Owns the current Access Token.
///
/// The token lives in a [`KeyValueStore`] under a fixed key, so it survives
/// restarts when the store is persistent. Reads and writes are not serialized:
/// the last writer wins.
pub struct SessionContext {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl SessionContext {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        SessionContext {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn access_token(&self) -> Result<Option<AccessToken>, StorageError> {
        let token = self.store.get(&self.key).await?.map(AccessToken);
        Ok(token.filter(|t| !t.is_blank()))
    }

    pub async fn store_token(&self, token: &AccessToken) -> Result<(), StorageError> {
        self.store.set(&self.key, token.as_str()).await
    }

    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra_storage::MemoryKeyValueStore;

    #[tokio::test]
    async fn token_lifecycle() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let session = SessionContext::new(store.clone(), DEFAULT_STORAGE_KEY);
        assert_eq!(session.access_token().await.unwrap(), None);

        session.store_token(&AccessToken::new("t1")).await.unwrap();
        assert_eq!(
            store.get("accessToken").await.unwrap().as_deref(),
            Some("t1")
        );
        assert_eq!(
            session.access_token().await.unwrap(),
            Some(AccessToken::new("t1"))
        );

        session.clear().await.unwrap();
        assert_eq!(session.access_token().await.unwrap(), None);
        session.clear().await.unwrap();
    }

    #[tokio::test]
    async fn blank_token_reads_as_absent() {
        let store = Arc::new(MemoryKeyValueStore::new());
        store.set("accessToken", "").await.unwrap();
        let session = SessionContext::new(store, DEFAULT_STORAGE_KEY);
        assert_eq!(session.access_token().await.unwrap(), None);
    }
}
