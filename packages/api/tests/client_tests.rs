#![allow(clippy::disallowed_methods)]

mod common;

use std::error::Error;

use api::{
    ApiClient, ApiError, CardId, CardQuery, CardStatus, ClientConfig, CredentialStore,
    GENERIC_ERROR, Method, MockTransport, NewComment, NewContentCard, ContentType, RegisterRequest,
    UserId, UserQuery, UserUpdate,
};
use approval_core::{Role, StatusFilter, TypeFilter};
use serde_json::json;

use common::{card_json, mock_client, url};

#[tokio::test]
async fn token_controls_authorization_header() -> Result<(), Box<dyn Error>> {
    let (client, _transport, store) = mock_client();

    assert!(!client.is_authenticated());
    assert!(client.headers().iter().all(|(name, _)| name != "Authorization"));

    client.set_token(Some("abc"));
    assert_eq!(store.load()?.as_deref(), Some("abc"));
    assert!(
        client
            .headers()
            .contains(&("Authorization".to_string(), "Bearer abc".to_string()))
    );

    client.set_token(None);
    assert_eq!(store.load()?, None);
    assert!(client.headers().iter().all(|(name, _)| name != "Authorization"));
    Ok(())
}

#[tokio::test]
async fn stored_token_is_read_at_construction() -> Result<(), Box<dyn Error>> {
    let store = CredentialStore::memory();
    store.save("persisted")?;

    let transport = MockTransport::new();
    transport.respond_json(200, json!({ "user": { "_id": "u1", "name": "Ana", "email": "a@x.com", "role": "aprovador" } }));
    let client = ApiClient::with_transport(
        ClientConfig::new(common::BASE_URL),
        store,
        transport.clone(),
    );

    let user = client.current_user().await?;
    assert_eq!(user.role, Role::Approver);

    let request = transport.last_request().ok_or("no request")?;
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, url("/auth/me"));
    assert_eq!(request.header("authorization"), Some("Bearer persisted"));
    assert_eq!(request.header("content-type"), Some("application/json"));
    Ok(())
}

#[tokio::test]
async fn login_captures_token() -> Result<(), Box<dyn Error>> {
    let (client, transport, store) = mock_client();
    transport.respond_json(
        200,
        json!({ "token": "jwt-123", "user": { "_id": "u1", "name": "Ana", "email": "a@x.com", "role": "cliente" } }),
    );

    let data = client.login("a@x.com", "secret").await?;

    assert_eq!(data.user.map(|u| u.role), Some(Role::Client));
    assert_eq!(client.token().as_deref(), Some("jwt-123"));
    assert_eq!(store.load()?.as_deref(), Some("jwt-123"));

    let request = transport.last_request().ok_or("no request")?;
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, url("/auth/login"));
    assert_eq!(
        request.json_body(),
        Some(json!({ "email": "a@x.com", "password": "secret" }))
    );
    Ok(())
}

#[tokio::test]
async fn failed_login_surfaces_server_message() {
    let (client, transport, _store) = mock_client();
    transport.respond_json(401, json!({ "error": "Credenciais inválidas" }));

    let err = client.login("a@x.com", "wrong").await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            message: "Credenciais inválidas".to_string()
        }
    );
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Credenciais inválidas");
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn register_captures_token() -> Result<(), Box<dyn Error>> {
    let (client, transport, _store) = mock_client();
    transport.respond_json(201, json!({ "token": "fresh", "message": "ok" }));

    let request = RegisterRequest {
        name: "Bia".into(),
        email: "b@x.com".into(),
        password: "pw".into(),
        role: Some(Role::Approver),
    };
    client.register(&request).await?;

    assert_eq!(client.token().as_deref(), Some("fresh"));
    let sent = transport.last_request().ok_or("no request")?;
    assert_eq!(sent.url, url("/auth/register"));
    assert_eq!(sent.json_body().ok_or("no body")?["role"], "aprovador");
    Ok(())
}

#[tokio::test]
async fn logout_clears_token_even_when_server_fails() -> Result<(), Box<dyn Error>> {
    let (client, transport, store) = mock_client();
    client.set_token(Some("abc"));
    transport.fail(ApiError::Transport("network down".into()));

    let result = client.logout().await;

    assert!(result.is_err());
    assert!(!client.is_authenticated());
    assert_eq!(store.load()?, None);
    assert_eq!(transport.requests()[0].url, url("/auth/logout"));
    Ok(())
}

#[tokio::test]
async fn logout_succeeds_with_empty_body() -> Result<(), Box<dyn Error>> {
    let (client, transport, _store) = mock_client();
    client.set_token(Some("abc"));
    transport.respond_raw(204, "");

    client.logout().await?;
    assert!(!client.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn list_cards_sends_only_active_filters() -> Result<(), Box<dyn Error>> {
    let (client, transport, _store) = mock_client();
    transport.respond_json(200, json!({ "cards": [card_json(1, "pendente")] }));
    transport.respond_json(200, json!({ "cards": [] }));

    let all = client.list_content_cards(&CardQuery::default()).await?;
    assert_eq!(all.len(), 1);

    let query = CardQuery {
        status: StatusFilter::parse("pendente"),
        content_type: TypeFilter::parse("postagem_diaria"),
    };
    let filtered = client.list_content_cards(&query).await?;
    assert!(filtered.is_empty());

    let requests = transport.requests();
    assert_eq!(requests[0].url, url("/content-cards"));
    assert_eq!(
        requests[1].url,
        url("/content-cards?status=pendente&type=postagem_diaria")
    );
    Ok(())
}

#[tokio::test]
async fn missing_cards_field_is_an_empty_list() -> Result<(), Box<dyn Error>> {
    let (client, transport, _store) = mock_client();
    transport.respond_json(200, json!({}));

    assert!(client.list_content_cards(&CardQuery::default()).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn error_without_message_uses_generic_text() {
    let (client, transport, _store) = mock_client();
    transport.respond_json(500, json!({}));

    let err = client
        .list_content_cards(&CardQuery::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), GENERIC_ERROR);
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let (client, transport, _store) = mock_client();
    transport.respond_raw(502, "<html>Bad Gateway</html>");

    let err = client
        .get_content_card(&CardId::new("1"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn approve_posts_status_and_comments() -> Result<(), Box<dyn Error>> {
    let (client, transport, _store) = mock_client();
    transport.respond_json(200, json!({ "message": "Card atualizado", "card": card_json(5, "aprovado") }));

    let outcome = client
        .approve_content_card(&CardId::from(5u64), &CardStatus::Approved, "")
        .await?;
    assert_eq!(outcome.card.map(|c| c.status), Some(CardStatus::Approved));

    let request = transport.last_request().ok_or("no request")?;
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, url("/content-cards/5/approve"));
    assert_eq!(
        request.json_body(),
        Some(json!({ "status": "aprovado", "comments": "" }))
    );
    Ok(())
}

#[tokio::test]
async fn card_crud_maps_to_endpoints() -> Result<(), Box<dyn Error>> {
    let (client, transport, _store) = mock_client();
    transport.respond_json(200, json!({ "card": card_json(9, "pendente") }));
    transport.respond_json(201, json!({ "card": card_json(10, "pendente") }));
    transport.respond_json(200, json!({ "card": card_json(10, "em_revisao") }));
    transport.respond_json(200, json!({ "message": "Card removido" }));

    let id = CardId::from(10u64);
    let fetched = client.get_content_card(&CardId::from(9u64)).await?;
    assert_eq!(fetched.id, CardId::new("9"));

    let created = client
        .create_content_card(&NewContentCard::new("Arte", "Junho", ContentType::MonthlyArtPosting))
        .await?;
    assert_eq!(created.id, id);

    let update = api::ContentCardUpdate {
        title: Some("Arte revisada".into()),
        ..Default::default()
    };
    let updated = client.update_content_card(&id, &update).await?;
    assert_eq!(updated.status, CardStatus::InReview);

    let deleted = client.delete_content_card(&id).await?;
    assert_eq!(deleted.message.as_deref(), Some("Card removido"));

    let sent: Vec<_> = transport
        .requests()
        .into_iter()
        .map(|r| (r.method, r.url))
        .collect();
    assert_eq!(
        sent,
        vec![
            (Method::Get, url("/content-cards/9")),
            (Method::Post, url("/content-cards")),
            (Method::Put, url("/content-cards/10")),
            (Method::Delete, url("/content-cards/10")),
        ]
    );
    assert_eq!(
        transport.requests()[2].json_body(),
        Some(json!({ "title": "Arte revisada" }))
    );
    Ok(())
}

#[tokio::test]
async fn comments_round_trip_through_card_endpoints() -> Result<(), Box<dyn Error>> {
    let (client, transport, _store) = mock_client();
    transport.respond_json(
        200,
        json!({ "comments": [{ "_id": "c1", "text": "Ajustar cor", "isInternal": true, "parentComment": null }] }),
    );
    transport.respond_json(
        201,
        json!({ "comment": { "_id": "c2", "text": "Feito", "isInternal": false, "parentComment": "c1" } }),
    );

    let card = CardId::new("abc");
    let comments = client.list_comments(&card).await?;
    assert!(comments[0].is_internal);

    let reply = client
        .add_comment(&card, &NewComment::new("Feito").reply_to("c1".into()))
        .await?;
    assert_eq!(reply.parent_comment.map(|id| id.0), Some("c1".to_string()));

    let requests = transport.requests();
    assert_eq!(requests[0].url, url("/content-cards/abc/comments"));
    assert_eq!(requests[1].method, Method::Post);
    assert_eq!(
        requests[1].json_body(),
        Some(json!({ "text": "Feito", "isInternal": false, "parentComment": "c1" }))
    );
    Ok(())
}

#[tokio::test]
async fn user_endpoints() -> Result<(), Box<dyn Error>> {
    let (client, transport, _store) = mock_client();
    let ana = json!({ "_id": "u1", "name": "Ana", "email": "a@x.com", "role": "admin" });
    transport.respond_json(200, json!({ "users": [ana.clone()] }));
    transport.respond_json(200, json!({ "users": [ana.clone()] }));
    transport.respond_json(200, json!({ "user": ana }));
    transport.respond_json(200, json!({ "message": "Senha alterada" }));

    let query = UserQuery {
        role: Some(Role::Admin),
        page: Some(2),
        ..Default::default()
    };
    assert_eq!(client.list_users(&query).await?.len(), 1);
    assert_eq!(client.search_users("ana maria").await?.len(), 1);

    let id = UserId::new("u1");
    let update = UserUpdate {
        name: Some("Ana".into()),
        ..Default::default()
    };
    assert!(client.update_user(&id, &update).await?.is_admin());

    let changed = client.change_password(&id, "old", "new").await?;
    assert_eq!(changed.message.as_deref(), Some("Senha alterada"));

    let requests = transport.requests();
    assert_eq!(requests[0].url, url("/users?role=admin&page=2"));
    assert_eq!(requests[1].url, url("/users/search?q=ana+maria"));
    assert_eq!(requests[2].method, Method::Put);
    assert_eq!(requests[2].url, url("/users/u1"));
    assert_eq!(requests[3].url, url("/users/u1/password"));
    assert_eq!(
        requests[3].json_body(),
        Some(json!({ "currentPassword": "old", "newPassword": "new" }))
    );
    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let (client, _transport, _store) = mock_client();
    let err = client.current_user().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
