use backoffice::client::Backoffice;
use backoffice::domain_port::KeyValueStore;
use backoffice::infra_http::ReqwestTransport;
use backoffice::infra_storage::{FileKeyValueStore, MemoryKeyValueStore};
use backoffice::session::{DEFAULT_COOKIE_KEY, DEFAULT_STORAGE_KEY, RefreshPolicy};
use backoffice::settings::Session;
use std::path::Path;
use std::sync::Arc;
use wiremock::MockServer;

fn session(policy: RefreshPolicy) -> Session {
    Session {
        backend: "memory".to_string(),
        path: None,
        storage_key: DEFAULT_STORAGE_KEY.to_string(),
        cookie_key: DEFAULT_COOKIE_KEY.to_string(),
        login_route: "/".to_string(),
        refresh_policy: policy,
    }
}

/// A client as the CLI builds it: token and cookie jar both kept in the file.
#[allow(dead_code)]
pub fn file_backoffice(server: &MockServer, path: &Path) -> Backoffice {
    let store = Arc::new(FileKeyValueStore::new(path));
    let transport = ReqwestTransport::try_new(&server.uri(), true)
        .unwrap()
        .persist_cookies(store.clone(), DEFAULT_COOKIE_KEY);
    Backoffice::from_parts(Arc::new(transport), store, &session(RefreshPolicy::Coalesced))
}

pub struct Harness {
    pub server: MockServer,
    pub store: Arc<MemoryKeyValueStore>,
    pub backoffice: Backoffice,
}

impl Harness {
    pub async fn start(policy: RefreshPolicy, token: Option<&str>) -> Harness {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryKeyValueStore::new());
        if let Some(token) = token {
            store.insert(DEFAULT_STORAGE_KEY, token);
        }
        let transport = Arc::new(ReqwestTransport::try_new(&server.uri(), true).unwrap());
        let backoffice = Backoffice::from_parts(transport, store.clone(), &session(policy));
        Harness {
            server,
            store,
            backoffice,
        }
    }

    pub async fn token(&self) -> Option<String> {
        self.store.get(DEFAULT_STORAGE_KEY).await.unwrap()
    }
}
