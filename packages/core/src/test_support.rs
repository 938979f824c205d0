//! Builders shared by unit tests.

use chrono::{TimeZone, Utc};

use crate::{CardId, CardStatus, ContentCard, ContentType};

pub fn card(id: &str, status: &str) -> ContentCard {
    ContentCard {
        id: CardId::new(id),
        title: format!("Card {id}"),
        description: String::new(),
        content_type: ContentType::DailyPosting,
        status: CardStatus::from(status),
        created_by: None,
        created_at: Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
        due_date: None,
        comments_count: 0,
        attachments: Vec::new(),
    }
}

pub fn titled(id: &str, title: &str, description: &str) -> ContentCard {
    ContentCard {
        title: title.to_string(),
        description: description.to_string(),
        ..card(id, "pendente")
    }
}
