//! Comment endpoints.

use approval_core::{CardId, Comment, NewComment};
use serde::Deserialize;

use crate::{ApiClient, ApiError, Transport};

#[derive(Deserialize)]
struct CommentList {
    #[serde(default)]
    comments: Vec<Comment>,
}

#[derive(Deserialize)]
struct CommentEnvelope {
    comment: Comment,
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_comments(&self, card_id: &CardId) -> Result<Vec<Comment>, ApiError> {
        let data: CommentList = self
            .get(&format!("/content-cards/{card_id}/comments"), &[])
            .await?;
        Ok(data.comments)
    }

    pub async fn add_comment(
        &self,
        card_id: &CardId,
        comment: &NewComment,
    ) -> Result<Comment, ApiError> {
        let data: CommentEnvelope = self
            .post(&format!("/content-cards/{card_id}/comments"), comment)
            .await?;
        Ok(data.comment)
    }
}
