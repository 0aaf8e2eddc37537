mod common;

use backoffice::application_port::ApiError;
use backoffice::domain_model::*;
use backoffice::session::RefreshPolicy;
use common::Harness;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, Request, ResponseTemplate};

async fn signed_in() -> Harness {
    Harness::start(RefreshPolicy::Coalesced, Some("t1")).await
}

fn client_json(id: i64) -> serde_json::Value {
    json!({
        "idClient": id,
        "nom": "Ben Salah",
        "prenom": "Amira",
        "adresse": "Tunis",
        "email": "amira@shop.tn",
        "numeroTelephone": "+21620000000",
        "statut": "ACTIVE"
    })
}

fn client_input() -> ClientInput {
    ClientInput {
        nom: "Ben Salah".into(),
        prenom: "Amira".into(),
        adresse: "Tunis".into(),
        email: "amira@shop.tn".into(),
        numero_telephone: "+21620000000".into(),
    }
}

#[tokio::test]
async fn clients_are_listed_from_the_data_envelope() {
    let h = signed_in().await;
    Mock::given(method("GET"))
        .and(path("/clients"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [client_json(7)] })))
        .mount(&h.server)
        .await;

    let clients = h.backoffice.client_service.list().await.unwrap();

    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id, ClientId(7));
    assert_eq!(clients[0].statut, ClientStatus::Active);
}

#[tokio::test]
async fn duplicate_client_reported_in_a_success_body_is_a_conflict() {
    let h = signed_in().await;
    Mock::given(method("POST"))
        .and(path("/clients"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Unique constraint failed on the constraint: `Client_email_key`"
        })))
        .mount(&h.server)
        .await;

    let err = h
        .backoffice
        .client_service
        .create(client_input())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Conflict(ref m) if m.contains("email")));
}

#[tokio::test]
async fn client_is_created() {
    let h = signed_in().await;
    Mock::given(method("POST"))
        .and(path("/clients"))
        .and(body_json(json!({
            "nom": "Ben Salah",
            "prenom": "Amira",
            "adresse": "Tunis",
            "email": "amira@shop.tn",
            "numeroTelephone": "+21620000000"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(client_json(8)))
        .expect(1)
        .mount(&h.server)
        .await;

    let created = h.backoffice.client_service.create(client_input()).await.unwrap();
    assert_eq!(created.id, ClientId(8));
}

#[tokio::test]
async fn invalid_client_is_rejected_before_sending() {
    let h = signed_in().await;
    Mock::given(method("POST"))
        .and(path("/clients"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&h.server)
        .await;

    let err = h
        .backoffice
        .client_service
        .create(ClientInput {
            email: "pas-un-email".into(),
            ..client_input()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn blacklist_endpoints() {
    let h = signed_in().await;
    Mock::given(method("PATCH"))
        .and(path("/clients/addBlacklist/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(client_json(7)))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/clients/deleteBlacklist/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": client_json(7) })))
        .expect(1)
        .mount(&h.server)
        .await;

    h.backoffice
        .client_service
        .add_to_blacklist(ClientId(7))
        .await
        .unwrap();
    h.backoffice
        .client_service
        .remove_from_blacklist(ClientId(7))
        .await
        .unwrap();
}

#[tokio::test]
async fn produit_is_uploaded_as_multipart() {
    let h = signed_in().await;
    Mock::given(method("POST"))
        .and(path("/produits"))
        .and(|request: &Request| {
            let content_type = request
                .headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            let body = String::from_utf8_lossy(&request.body);
            content_type.starts_with("multipart/form-data")
                && body.contains("name=\"nom\"")
                && body.contains("filename=\"chaise.png\"")
                && body.contains("[3,8]")
        })
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "idProduit": "p-1",
            "nom": "Chaise",
            "prix": 49.9,
            "stock": 12,
            "images": ["/uploads/chaise.png"]
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let produit = h
        .backoffice
        .produit_service
        .create(ProduitInput {
            nom: "Chaise".into(),
            description: "Chaise en chêne".into(),
            prix: 49.9,
            stock: 12,
            remise: 0.0,
            marque: "Bois&Co".into(),
            categorie: "Mobilier".into(),
            images: vec![ImageUpload {
                file_name: "chaise.png".into(),
                mime: "image/png".into(),
                bytes: vec![0x89, 0x50, 0x4e, 0x47],
            }],
            fournisseurs: vec![3, 8],
        })
        .await
        .unwrap();

    assert_eq!(produit.images, vec!["/uploads/chaise.png".to_string()]);
}

#[tokio::test]
async fn produit_filters_become_query_parameters() {
    let h = signed_in().await;
    Mock::given(method("GET"))
        .and(path("/produits"))
        .and(query_param("page", "2"))
        .and(query_param("marque", "Bois&Co"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [], "meta": { "total": 0 } })))
        .expect(1)
        .mount(&h.server)
        .await;

    let page = h
        .backoffice
        .produit_service
        .list(ProduitQuery {
            page: Some(2),
            marque: Some("Bois&Co".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(page.items.is_empty());
}

#[tokio::test]
async fn commande_amount_is_patched() {
    let h = signed_in().await;
    Mock::given(method("PATCH"))
        .and(path("/commandes/c-1/montant"))
        .and(body_json(json!({ "montantTotal": "129.90" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "idCommande": "c-1",
            "dateCommande": "2025-03-01T10:00:00Z",
            "statut": "EN_COURS",
            "adresseLivraison": "Sfax",
            "montantTotal": "129.90",
            "clientId": 7
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let commande = h
        .backoffice
        .commande_service
        .update_montant(&CommandeId("c-1".into()), "129.90")
        .await
        .unwrap();

    assert_eq!(commande.montant_total, "129.90");
    assert!(commande.lignes.is_empty());
}

#[tokio::test]
async fn retours_default_to_first_page_of_25() {
    let h = signed_in().await;
    Mock::given(method("GET"))
        .and(path("/retours"))
        .and(query_param("page", "1"))
        .and(query_param("perPage", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "idRetour": 4,
                "dateRetour": "2025-03-02T08:30:00Z",
                "statutRetour": "EN_ATTENTE",
                "raisonRetour": "Produit abîmé",
                "commandeId": "c-1"
            }],
            "meta": { "total": 1, "page": 1, "perPage": 25, "pages": 1 }
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let page = h
        .backoffice
        .retour_service
        .list(RetourFilter::default())
        .await
        .unwrap();

    assert_eq!(page.items[0].id, RetourId(4));
    assert_eq!(page.meta.limit, 25);
    assert_eq!(page.meta.total_pages, 1);
}

#[tokio::test]
async fn old_history_is_purged() {
    let h = signed_in().await;
    Mock::given(method("DELETE"))
        .and(path("/historiques/old"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "deleted": 42 })))
        .expect(1)
        .mount(&h.server)
        .await;

    assert_eq!(h.backoffice.historique_service.purge_old().await.unwrap(), 42);
}

#[tokio::test]
async fn users_come_in_their_own_envelopes() {
    let h = signed_in().await;
    let user = json!({
        "id": 3,
        "name": "Sami",
        "email": "sami@shop.tn",
        "phone": "+21622000000",
        "permissions": ["clients:read"],
        "emailVerified": true
    });
    Mock::given(method("GET"))
        .and(path("/users/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [user.clone()] })))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user })))
        .mount(&h.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/users/3/permissions"))
        .and(body_json(json!({ "permissions": ["clients:read", "clients:write"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&h.server)
        .await;

    let users = h.backoffice.user_service.list().await.unwrap();
    assert_eq!(users.len(), 1);

    let sami = h.backoffice.user_service.get(UserId(3)).await.unwrap();
    assert!(sami.email_verified);

    h.backoffice
        .user_service
        .update_permissions(
            UserId(3),
            vec!["clients:read".into(), "clients:write".into()],
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn missing_notification_is_not_found() {
    let h = signed_in().await;
    Mock::given(method("GET"))
        .and(path("/notifications/n-9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Notification introuvable" })))
        .mount(&h.server)
        .await;

    let err = h
        .backoffice
        .notification_service
        .get(&NotificationId("n-9".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::NotFound(ref m) if m == "Notification introuvable"));
    assert_eq!(h.token().await.as_deref(), Some("t1"));
}

#[tokio::test]
async fn notifications_are_paged() {
    let h = signed_in().await;
    Mock::given(method("GET"))
        .and(path("/notifications"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "n-1",
                "produitId": "p-1",
                "type": "LOW_STOCK",
                "message": "Stock faible",
                "createdAt": "2025-03-03T09:00:00Z"
            }],
            "meta": { "total": 1, "page": 1, "limit": 25, "totalPages": 1 }
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let page = h.backoffice.notification_service.list(1, 25).await.unwrap();

    assert_eq!(page.items[0].kind, NotificationKind::LowStock);
    assert!(!page.items[0].resolved);
}
