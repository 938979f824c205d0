//! Content card endpoints.

use approval_core::{CardId, CardQuery, CardStatus, ContentCard, ContentCardUpdate, NewContentCard};
use serde::{Deserialize, Serialize};

use crate::{ApiClient, ApiError, MessageResponse, Transport};

#[derive(Deserialize)]
struct CardList {
    #[serde(default)]
    cards: Vec<ContentCard>,
}

#[derive(Deserialize)]
struct CardEnvelope {
    card: ContentCard,
}

/// Answer of the approve endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReviewOutcome {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub card: Option<ContentCard>,
}

#[derive(Serialize)]
struct ReviewRequest<'a> {
    status: &'a CardStatus,
    comments: &'a str,
}

impl<T: Transport> ApiClient<T> {
    /// List cards, filtered server-side by status and type.
    pub async fn list_content_cards(&self, query: &CardQuery) -> Result<Vec<ContentCard>, ApiError> {
        let params = query.params();
        let data: CardList = self.get("/content-cards", &params).await?;
        Ok(data.cards)
    }

    pub async fn get_content_card(&self, id: &CardId) -> Result<ContentCard, ApiError> {
        let data: CardEnvelope = self.get(&format!("/content-cards/{id}"), &[]).await?;
        Ok(data.card)
    }

    pub async fn create_content_card(&self, card: &NewContentCard) -> Result<ContentCard, ApiError> {
        let data: CardEnvelope = self.post("/content-cards", card).await?;
        Ok(data.card)
    }

    pub async fn update_content_card(
        &self,
        id: &CardId,
        update: &ContentCardUpdate,
    ) -> Result<ContentCard, ApiError> {
        let data: CardEnvelope = self.put(&format!("/content-cards/{id}"), update).await?;
        Ok(data.card)
    }

    /// Move a card to a new status, with optional reviewer comments.
    pub async fn approve_content_card(
        &self,
        id: &CardId,
        status: &CardStatus,
        comments: &str,
    ) -> Result<ReviewOutcome, ApiError> {
        let body = ReviewRequest { status, comments };
        let data: Option<ReviewOutcome> = self
            .post(&format!("/content-cards/{id}/approve"), &body)
            .await?;
        Ok(data.unwrap_or_default())
    }

    pub async fn delete_content_card(&self, id: &CardId) -> Result<MessageResponse, ApiError> {
        let data: Option<MessageResponse> = self.delete(&format!("/content-cards/{id}")).await?;
        Ok(data.unwrap_or_default())
    }
}
