use backoffice::client::AuthenticatedClient;
use backoffice::domain_model::*;
use backoffice::domain_port::TransportError;
use backoffice::infra_event::BroadcastSessionEvents;
use backoffice::infra_http::FakeTransport;
use backoffice::infra_storage::MemoryKeyValueStore;
use backoffice::logger::*;
use backoffice::session::{DEFAULT_STORAGE_KEY, REFRESH_PATH, RefreshPolicy, SessionContext};
use http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

// Walks through a refresh and an expiry against an in-process API:
// $ cargo run --bin session_demo
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let logger = Logger::new_bootstrap();
    logger.reload_from_config(&LogConfig {
        filter: "debug".to_string(),
    })?;

    let refresh_allowed = Arc::new(AtomicBool::new(true));
    let allowed = refresh_allowed.clone();
    let transport = Arc::new(FakeTransport::new(move |request| {
        let reply = |status: StatusCode, body: serde_json::Value| -> Result<_, TransportError> {
            Ok(HttpResponse::json_value(status, &body))
        };
        match (request.path.as_str(), request.bearer_token()) {
            (REFRESH_PATH, _) if allowed.load(Ordering::SeqCst) => {
                reply(StatusCode::OK, json!({ "accessToken": "fresh" }))
            }
            (REFRESH_PATH, _) => reply(StatusCode::UNAUTHORIZED, json!({ "message": "revoked" })),
            (_, Some(token)) if token.as_str() == "fresh" => {
                reply(StatusCode::OK, json!({ "data": [] }))
            }
            (_, _) => reply(StatusCode::UNAUTHORIZED, json!({ "message": "jwt expired" })),
        }
    }));

    let store = Arc::new(MemoryKeyValueStore::new());
    store.insert(DEFAULT_STORAGE_KEY, "stale");
    let events = Arc::new(BroadcastSessionEvents::default());
    let mut rx = events.subscribe();
    let client = AuthenticatedClient::new(
        transport.clone(),
        Arc::new(SessionContext::new(store, DEFAULT_STORAGE_KEY)),
        events,
        RefreshPolicy::Coalesced,
        "/",
    );

    let response = client.get("/clients").await?;
    info!(status = %response.status, "stale token recovered");

    client.session().store_token(&AccessToken::new("stale")).await?;
    refresh_allowed.store(false, Ordering::SeqCst);
    let err = client.get("/clients").await.err();
    info!(?err, "refresh revoked");

    while let Ok(event) = rx.try_recv() {
        println!("session event: {}", serde_json::to_string(&event)?);
    }
    println!("requests sent: {}", transport.calls().len());
    Ok(())
}
