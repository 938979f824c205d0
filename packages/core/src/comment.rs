//! Comments left on content cards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CommentId, UserRef};

/// A comment on a card, optionally threaded under another comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(alias = "_id")]
    pub id: CommentId,
    pub text: String,
    /// Internal comments are hidden from clients.
    #[serde(default)]
    pub is_internal: bool,
    #[serde(default)]
    pub parent_comment: Option<CommentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `POST /content-cards/:id/comments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub text: String,
    pub is_internal: bool,
    pub parent_comment: Option<CommentId>,
}

impl NewComment {
    /// A public, top-level comment.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_internal: false,
            parent_comment: None,
        }
    }

    pub fn internal(mut self, is_internal: bool) -> Self {
        self.is_internal = is_internal;
        self
    }

    pub fn reply_to(mut self, parent: CommentId) -> Self {
        self.parent_comment = Some(parent);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_comment_sends_null_parent() {
        let body = serde_json::to_value(NewComment::new("ok")).unwrap();
        assert_eq!(
            body,
            json!({ "text": "ok", "isInternal": false, "parentComment": null })
        );
    }

    #[test]
    fn reply_carries_parent_id() {
        let body =
            serde_json::to_value(NewComment::new("re").internal(true).reply_to("c1".into()))
                .unwrap();
        assert_eq!(body["isInternal"], true);
        assert_eq!(body["parentComment"], "c1");
    }
}
