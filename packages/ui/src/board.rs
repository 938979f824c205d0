//! Dashboard orchestration: loading the card list and reviewing cards.
//!
//! These functions hold the async flow the dashboard page runs. They work on
//! anything implementing [`BoardHandle`], so the page drives them through a
//! signal and tests drive them through a plain [`DashboardState`].

use api::{ApiClient, Transport};
use approval_core::{CardId, CardQuery, DashboardState, ReviewDecision};
use dioxus::prelude::*;

/// Mutable access to the dashboard state.
pub trait BoardHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R;
}

impl BoardHandle for Signal<DashboardState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let mut state = self.write();
        f(&mut *state)
    }
}

impl BoardHandle for DashboardState {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        f(self)
    }
}

/// Fetch the card list for `query` and apply it to the board.
///
/// Returns `false` when a newer load started while this one was in flight
/// and the response was dropped.
pub async fn reload<B, T>(board: &mut B, client: &ApiClient<T>, query: &CardQuery) -> bool
where
    B: BoardHandle,
    T: Transport,
{
    let ticket = board.update(DashboardState::begin_load);
    let result = client
        .list_content_cards(query)
        .await
        .map_err(|e| e.to_string());
    board.update(|state| state.finish_load(ticket, result))
}

/// Approve or reject a card, then reload the list.
///
/// `query` is resolved once the approve call returns, so the reload uses the
/// filters selected at that moment rather than when the button was clicked.
/// On failure the error is shown and nothing is reloaded.
pub async fn review<B, T>(
    board: &mut B,
    client: &ApiClient<T>,
    card: &CardId,
    decision: ReviewDecision,
    query: impl FnOnce() -> CardQuery,
) where
    B: BoardHandle,
    T: Transport,
{
    match client
        .approve_content_card(card, &decision.target_status(), "")
        .await
    {
        Ok(_) => {
            tracing::info!(card = %card, ?decision, "Card reviewed");
            let query = query();
            reload(board, client, &query).await;
        }
        Err(e) => board.update(|state| state.fail_review(decision, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiError, ClientConfig, CredentialStore, MockTransport};
    use approval_core::{CardStatus, ContentType, Selection};
    use serde_json::{Value, json};
    use std::cell::Cell;

    fn client() -> (ApiClient<MockTransport>, MockTransport) {
        let transport = MockTransport::new();
        let client = ApiClient::with_transport(
            ClientConfig::new("http://api.test/api"),
            CredentialStore::memory(),
            transport.clone(),
        );
        (client, transport)
    }

    fn card_json(id: &str, status: &str) -> Value {
        json!({
            "_id": id,
            "title": format!("Card {id}"),
            "description": "Post de teste",
            "type": "postagem_diaria",
            "status": status,
            "createdAt": "2024-03-01T12:00:00Z",
            "commentsCount": 0,
        })
    }

    #[tokio::test]
    async fn approve_then_reload_with_same_filters() {
        let (client, transport) = client();
        transport
            .respond_json(200, json!({ "message": "ok", "card": card_json("5", "aprovado") }))
            .respond_json(200, json!({ "cards": [card_json("5", "aprovado")] }));

        let query = CardQuery {
            status: Selection::Only(CardStatus::Pending),
            content_type: Selection::All,
        };
        let mut board = DashboardState::new();
        review(
            &mut board,
            &client,
            &CardId::from("5"),
            ReviewDecision::Approve,
            || query.clone(),
        )
        .await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, "http://api.test/api/content-cards/5/approve");
        assert_eq!(
            requests[0].json_body(),
            Some(json!({ "status": "aprovado", "comments": "" }))
        );
        assert_eq!(requests[1].url, "http://api.test/api/content-cards?status=pendente");

        assert!(!board.loading);
        assert_eq!(board.error, None);
        assert_eq!(board.stats.approved, 1);
    }

    #[tokio::test]
    async fn failed_review_reports_and_skips_reload() {
        let (client, transport) = client();
        transport
            .respond_json(403, json!({ "error": "Sem permissão" }))
            .respond_json(200, json!({ "cards": [] }));

        let mut board = DashboardState::new();
        review(
            &mut board,
            &client,
            &CardId::from("7"),
            ReviewDecision::Reject,
            CardQuery::default,
        )
        .await;

        assert_eq!(transport.requests().len(), 1);
        assert_eq!(transport.pending_responses(), 1);
        assert_eq!(board.error.as_deref(), Some("Erro ao rejeitar card: Sem permissão"));
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_cards() {
        let (client, transport) = client();
        transport
            .respond_json(200, json!({ "cards": [card_json("1", "pendente")] }))
            .fail(ApiError::Transport("connection reset".into()));

        let mut board = DashboardState::new();
        assert!(reload(&mut board, &client, &CardQuery::default()).await);
        assert!(reload(&mut board, &client, &CardQuery::default()).await);

        assert_eq!(board.cards.len(), 1);
        assert_eq!(board.stats.pending, 1);
        assert_eq!(
            board.error.as_deref(),
            Some("Erro ao carregar cards: connection reset")
        );
        assert!(!board.loading);
    }

    #[tokio::test]
    async fn reload_sends_type_filter() {
        let (client, transport) = client();
        transport.respond_json(200, json!({ "cards": [] }));

        let query = CardQuery {
            status: Selection::All,
            content_type: Selection::Only(ContentType::MonthlyArtPosting),
        };
        let mut board = DashboardState::new();
        reload(&mut board, &client, &query).await;

        assert_eq!(
            transport.last_request().map(|r| r.url),
            Some("http://api.test/api/content-cards?type=postagem_arte_mensal".to_string())
        );
        assert!(board.cards.is_empty());
        assert_eq!(board.stats.total, 0);
    }

    #[tokio::test]
    async fn reload_after_review_uses_filters_current_on_completion() {
        let (client, transport) = client();
        transport
            .respond_json(200, json!({ "message": "ok" }))
            .respond_json(200, json!({ "cards": [card_json("9", "rejeitado")] }));

        // The filter changes to "rejeitado" while the approve call is in flight
        let requests_seen = Cell::new(usize::MAX);
        let mut board = DashboardState::new();
        review(
            &mut board,
            &client,
            &CardId::from("9"),
            ReviewDecision::Reject,
            || {
                requests_seen.set(transport.requests().len());
                CardQuery {
                    status: Selection::Only(CardStatus::Rejected),
                    content_type: Selection::All,
                }
            },
        )
        .await;

        assert_eq!(requests_seen.get(), 1);
        assert_eq!(
            transport.last_request().map(|r| r.url),
            Some("http://api.test/api/content-cards?status=rejeitado".to_string())
        );
        assert_eq!(board.stats.rejected, 1);
        assert!(!board.loading);
    }

    /// Board whose loads get superseded mid-flight, as when the user changes
    /// a filter before the previous response arrives.
    struct Superseded {
        state: DashboardState,
        updates: usize,
    }

    impl BoardHandle for Superseded {
        fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
            self.updates += 1;
            let out = f(&mut self.state);
            if self.updates == 1 {
                self.state.begin_load();
            }
            out
        }
    }

    #[tokio::test]
    async fn stale_response_is_dropped() {
        let (client, transport) = client();
        transport.respond_json(200, json!({ "cards": [card_json("1", "pendente")] }));

        let mut board = Superseded {
            state: DashboardState::new(),
            updates: 0,
        };
        let applied = reload(&mut board, &client, &CardQuery::default()).await;

        assert!(!applied);
        assert!(board.state.cards.is_empty());
        assert!(board.state.loading);
    }
}
