//! Content card domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CardId, UserId};

/// Approval status of a content card.
///
/// Values the dashboard does not know about are kept verbatim in
/// [`CardStatus::Other`] so a new backend status never breaks decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CardStatus {
    /// Waiting for a decision.
    #[default]
    Pending,
    /// Accepted by an approver.
    Approved,
    /// Turned down by an approver.
    Rejected,
    /// Under active evaluation.
    InReview,
    /// Any status string not listed above.
    Other(String),
}

impl CardStatus {
    /// The four statuses the workflow knows about, in display order.
    pub const KNOWN: [CardStatus; 4] = [
        CardStatus::Pending,
        CardStatus::Approved,
        CardStatus::Rejected,
        CardStatus::InReview,
    ];

    /// Wire value used by the backend.
    pub fn as_str(&self) -> &str {
        match self {
            CardStatus::Pending => "pendente",
            CardStatus::Approved => "aprovado",
            CardStatus::Rejected => "rejeitado",
            CardStatus::InReview => "em_revisao",
            CardStatus::Other(raw) => raw,
        }
    }

    /// Whether the card is exactly pending (unknown statuses are not).
    pub fn is_pending(&self) -> bool {
        matches!(self, CardStatus::Pending)
    }
}

impl From<String> for CardStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pendente" => CardStatus::Pending,
            "aprovado" => CardStatus::Approved,
            "rejeitado" => CardStatus::Rejected,
            "em_revisao" => CardStatus::InReview,
            _ => CardStatus::Other(raw),
        }
    }
}

impl From<&str> for CardStatus {
    fn from(raw: &str) -> Self {
        CardStatus::from(raw.to_string())
    }
}

impl From<CardStatus> for String {
    fn from(status: CardStatus) -> Self {
        match status {
            CardStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for CardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of content a card proposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    MonthlyMacroSchedule,
    MonthlyArtPosting,
    DailyPosting,
    Other(String),
}

impl ContentType {
    /// The content types the workflow knows about, in display order.
    pub const KNOWN: [ContentType; 3] = [
        ContentType::MonthlyMacroSchedule,
        ContentType::MonthlyArtPosting,
        ContentType::DailyPosting,
    ];

    /// Wire value used by the backend.
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::MonthlyMacroSchedule => "cronograma_macro_mensal",
            ContentType::MonthlyArtPosting => "postagem_arte_mensal",
            ContentType::DailyPosting => "postagem_diaria",
            ContentType::Other(raw) => raw,
        }
    }
}

impl From<String> for ContentType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "cronograma_macro_mensal" => ContentType::MonthlyMacroSchedule,
            "postagem_arte_mensal" => ContentType::MonthlyArtPosting,
            "postagem_diaria" => ContentType::DailyPosting,
            _ => ContentType::Other(raw),
        }
    }
}

impl From<&str> for ContentType {
    fn from(raw: &str) -> Self {
        ContentType::from(raw.to_string())
    }
}

impl From<ContentType> for String {
    fn from(kind: ContentType) -> Self {
        match kind {
            ContentType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimal user details embedded in other entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(alias = "_id")]
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Reference to a user: populated by the backend or a bare id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Populated(UserSummary),
    Id(UserId),
}

impl UserRef {
    /// Display name, when the reference was populated.
    pub fn name(&self) -> Option<&str> {
        match self {
            UserRef::Populated(summary) => Some(summary.name.as_str()),
            UserRef::Id(_) => None,
        }
    }

    pub fn id(&self) -> &UserId {
        match self {
            UserRef::Populated(summary) => &summary.id,
            UserRef::Id(id) => id,
        }
    }
}

/// A file attached to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(default)]
    pub filename: String,
    #[serde(default, alias = "originalName", skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
}

/// A unit of proposed content moving through the approval workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCard {
    #[serde(alias = "_id")]
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(default)]
    pub status: CardStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserRef>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub comments_count: u32,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl ContentCard {
    /// Name of the card's author, if the backend populated it.
    pub fn author_name(&self) -> Option<&str> {
        self.created_by.as_ref().and_then(UserRef::name)
    }
}

/// Body for `POST /content-cards`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContentCard {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl NewContentCard {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        content_type: ContentType,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            content_type,
            due_date: None,
        }
    }

    /// Set the due date for this card.
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Body for `PUT /content-cards/:id`; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_backend_card() {
        let card: ContentCard = serde_json::from_value(json!({
            "_id": "c1",
            "title": "Posts de maio",
            "description": "Cronograma completo",
            "type": "cronograma_macro_mensal",
            "status": "em_revisao",
            "createdBy": { "_id": "u1", "name": "Ana", "email": "ana@example.com" },
            "createdAt": "2024-05-01T12:00:00.000Z",
            "dueDate": "2024-05-20T00:00:00Z",
            "commentsCount": 3,
            "attachments": [{ "filename": "a.png", "url": "/uploads/a.png" }]
        }))
        .unwrap();

        assert_eq!(card.id, CardId::new("c1"));
        assert_eq!(card.content_type, ContentType::MonthlyMacroSchedule);
        assert_eq!(card.status, CardStatus::InReview);
        assert_eq!(card.author_name(), Some("Ana"));
        assert_eq!(card.comments_count, 3);
        assert_eq!(card.attachments.len(), 1);
        assert!(card.due_date.is_some());
    }

    #[test]
    fn unknown_enumerations_are_preserved() {
        let card: ContentCard = serde_json::from_value(json!({
            "id": 7,
            "title": "t",
            "type": "story_semanal",
            "status": "arquivado",
            "createdBy": "u9",
            "createdAt": "2024-05-01T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(card.status, CardStatus::Other("arquivado".into()));
        assert_eq!(card.content_type.as_str(), "story_semanal");
        assert_eq!(card.author_name(), None);
        assert_eq!(card.created_by.as_ref().map(|r| r.id().as_str()), Some("u9"));
        assert!(!card.status.is_pending());
    }

    #[test]
    fn new_card_serializes_type_field() {
        let body = serde_json::to_value(NewContentCard::new(
            "Arte",
            "Peça de junho",
            ContentType::MonthlyArtPosting,
        ))
        .unwrap();
        assert_eq!(
            body,
            json!({ "title": "Arte", "description": "Peça de junho", "type": "postagem_arte_mensal" })
        );
    }
}
