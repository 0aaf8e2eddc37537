use crate::application_impl::*;
use crate::application_port::*;
use crate::client::AuthenticatedClient;
use crate::domain_port::{HttpTransport, KeyValueStore};
use crate::infra_event::BroadcastSessionEvents;
use crate::infra_http::ReqwestTransport;
use crate::infra_storage::{FileKeyValueStore, MemoryKeyValueStore};
use crate::session::SessionContext;
use crate::settings::{Session, Settings};
use std::sync::Arc;
use tracing::info;

const EVENT_CAPACITY: usize = 64;

/// Every resource service, sharing one [`AuthenticatedClient`].
pub struct Backoffice {
    client: Arc<AuthenticatedClient>,
    events: Arc<BroadcastSessionEvents>,
    pub auth_service: Arc<dyn AuthService>,
    pub client_service: Arc<dyn ClientService>,
    pub produit_service: Arc<dyn ProduitService>,
    pub fournisseur_service: Arc<dyn FournisseurService>,
    pub commande_service: Arc<dyn CommandeService>,
    pub retour_service: Arc<dyn RetourService>,
    pub historique_service: Arc<dyn HistoriqueService>,
    pub notification_service: Arc<dyn NotificationService>,
    pub user_service: Arc<dyn UserService>,
}

impl Backoffice {
    pub fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let store: Arc<dyn KeyValueStore> = match settings.session.backend.as_str() {
            "memory" => Arc::new(MemoryKeyValueStore::new()),
            "file" => {
                let path = settings.session.path.as_deref().ok_or_else(|| {
                    anyhow::anyhow!("session.path is required for the file backend")
                })?;
                Arc::new(FileKeyValueStore::new(path))
            }
            other => return Err(anyhow::anyhow!("Unknown session backend: {}", other)),
        };

        let transport: Arc<dyn HttpTransport> = Arc::new(
            ReqwestTransport::try_new(&settings.api.base_url, settings.api.with_credentials)?
                .persist_cookies(store.clone(), settings.session.cookie_key.clone()),
        );

        info!(
            base_url = %settings.api.base_url,
            backend = %settings.session.backend,
            policy = ?settings.session.refresh_policy,
            "backoffice client ready"
        );
        Ok(Self::from_parts(transport, store, &settings.session))
    }

    pub fn from_parts(
        transport: Arc<dyn HttpTransport>,
        store: Arc<dyn KeyValueStore>,
        session: &Session,
    ) -> Self {
        let events = Arc::new(BroadcastSessionEvents::new(EVENT_CAPACITY));
        let context = Arc::new(SessionContext::new(store, session.storage_key.clone()));
        let client = Arc::new(AuthenticatedClient::new(
            transport,
            context,
            events.clone(),
            session.refresh_policy,
            session.login_route.clone(),
        ));

        Backoffice {
            auth_service: Arc::new(RealAuthService::new(client.clone())),
            client_service: Arc::new(RealClientService::new(client.clone())),
            produit_service: Arc::new(RealProduitService::new(client.clone())),
            fournisseur_service: Arc::new(RealFournisseurService::new(client.clone())),
            commande_service: Arc::new(RealCommandeService::new(client.clone())),
            retour_service: Arc::new(RealRetourService::new(client.clone())),
            historique_service: Arc::new(RealHistoriqueService::new(client.clone())),
            notification_service: Arc::new(RealNotificationService::new(client.clone())),
            user_service: Arc::new(RealUserService::new(client.clone())),
            client,
            events,
        }
    }

    pub fn client(&self) -> &Arc<AuthenticatedClient> {
        &self.client
    }

    pub fn events(&self) -> &Arc<BroadcastSessionEvents> {
        &self.events
    }
}
