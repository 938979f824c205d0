use api::{ApiClient, ClientConfig, CredentialStore, MockTransport};
use serde_json::{Value, json};

pub const BASE_URL: &str = "http://api.test/api";

/// Client over a scripted backend with an empty in-memory token slot.
pub fn mock_client() -> (ApiClient<MockTransport>, MockTransport, CredentialStore) {
    let store = CredentialStore::memory();
    let transport = MockTransport::new();
    let client =
        ApiClient::with_transport(ClientConfig::new(BASE_URL), store.clone(), transport.clone());
    (client, transport, store)
}

pub fn url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

pub fn card_json(id: u64, status: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Card {id}"),
        "description": "Descrição",
        "type": "postagem_diaria",
        "status": status,
        "createdBy": { "_id": "u1", "name": "Ana" },
        "createdAt": "2024-04-02T09:30:00.000Z",
        "commentsCount": 0,
        "attachments": []
    })
}
